//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use std::marker::PhantomData;

use bit_set::BitSet;

use crate::ErrPack;
use crate::util::index::IndexTrait;

pub mod error;


pub use error::{DsuError, IndexOutOfRangeError, InvalidArgumentError};

//--------------------------------------------------------------------------------------------------

/// Disjoint-set forest over the fixed universe `0..n`.
///
/// Uses union by rank and full path compression, so any sequence of `m` operations
/// runs in `O(m * α(n))`.
///
/// `find()` takes `&mut self` because it flattens the paths it walks.
/// Wrap the whole structure in a single lock if it has to be shared between threads.
#[derive(Clone, Debug)]
pub struct DisjointSetUnion<I: IndexTrait = usize> {
	parent: Vec<usize>,

	// Upper bound on the height of the tree. Only meaningful for roots.
	rank: Vec<u32>,

	sets: usize,
	_marker: PhantomData<I>,
}

#[allow(clippy::indexing_slicing)]
impl<I: IndexTrait> DisjointSetUnion<I> {
	/// Creates `size` singleton sets.
	///
	/// An empty universe is allowed. A negative `size` is rejected with `InvalidArgument`.
	pub fn new(size: I) -> Result<Self, ErrPack<DsuError>> {
		let Some(len) = size.to_raw() else {
			return Err(InvalidArgumentError::new(size).into());
		};
		log::debug!("DisjointSetUnion::new(): {len} singleton sets");
		Ok(Self {
			parent: (0..len).collect(),
			rank: vec![0; len],
			sets: len,
			_marker: PhantomData,
		})
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.parent.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Returns the representative of the set containing `index`.
	pub fn find(&mut self, index: I) -> Result<I, ErrPack<DsuError>> {
		let key = self.check(index)?;
		Ok(I::from_raw(self.__find(key)))
	}

	/// Merges the sets containing `a` and `b`. No-op if they are already in the same set.
	///
	/// Both indices are checked before anything is modified.
	pub fn union(&mut self, a: I, b: I) -> Result<(), ErrPack<DsuError>> {
		let key0 = self.check(a)?;
		let key1 = self.check(b)?;
		self.__union(key0, key1);
		Ok(())
	}

	pub fn same_set(&mut self, a: I, b: I) -> Result<bool, ErrPack<DsuError>> {
		let key0 = self.check(a)?;
		let key1 = self.check(b)?;
		Ok(self.__find(key0) == self.__find(key1))
	}

	/// Counts the sets by resolving the root of every element.
	///
	/// This is `O(n * α(n))`. See `num_sets()` for the constant time version.
	pub fn count(&mut self) -> usize {
		let mut roots = BitSet::with_capacity(self.parent.len());
		for key in 0..self.parent.len() {
			roots.insert(self.__find(key));
		}
		let count = roots.len();
		debug_assert_eq!(count, self.sets);
		count
	}

	#[inline]
	pub fn num_sets(&self) -> usize {
		self.sets
	}

	/// Assigns each element the dense id of its set.
	///
	/// Ids are `0..sets`, numbered in the order of the smallest element of each set.
	/// Returns the ids and the number of sets.
	pub fn compact_ids(&mut self) -> (Vec<usize>, usize) {
		let len = self.parent.len();
		let mut ids = vec![usize::MAX; len];
		let mut sets = 0;
		for key in 0..len {
			let root = self.__find(key);
			if ids[root] == usize::MAX {
				ids[root] = sets;
				sets += 1;
			}
			ids[key] = ids[root];
		}
		(ids, sets)
	}

	/// Members of every set in ascending order. Sets are ordered by their smallest member.
	pub fn groups(&mut self) -> Vec<Vec<I>> {
		let (ids, sets) = self.compact_ids();
		let mut groups = vec![Vec::new(); sets];
		for (key, id) in ids.into_iter().enumerate() {
			groups[id].push(I::from_raw(key));
		}
		groups
	}

	pub fn parents(&self) -> &[usize] {
		&self.parent
	}

	pub fn ranks(&self) -> &[u32] {
		&self.rank
	}

	/// Dumps the raw `parent` and `rank` arrays. The format is for debugging only.
	pub fn debug_string(&self) -> String {
		self.to_string()
	}

	#[inline]
	fn check(&self, index: I) -> Result<usize, ErrPack<IndexOutOfRangeError>> {
		match index.to_raw() {
			Some(key) if key < self.parent.len() => Ok(key),
			_ => Err(IndexOutOfRangeError::new(index, self.parent.len())),
		}
	}

	fn __find(&mut self, key: usize) -> usize {
		let mut root = key;
		let mut parent = self.parent[root];
		while parent != root {
			root = parent;
			parent = self.parent[root];
		}

		let mut key = key;
		while key != root {
			let next = self.parent[key];
			self.parent[key] = root;
			key = next;
		}

		root
	}

	fn __union(&mut self, key0: usize, key1: usize) {
		let root0 = self.__find(key0);
		let root1 = self.__find(key1);
		if root0 == root1 {
			return;
		}

		let rank0 = self.rank[root0];
		let rank1 = self.rank[root1];
		let (parent, child) = if rank0 < rank1 { (root1, root0) } else { (root0, root1) };
		if rank0 == rank1 {
			self.rank[parent] += 1;
		}
		self.parent[child] = parent;

		self.sets -= 1;
		log::trace!("DisjointSetUnion::union(): {child} -> {parent}, {} sets left", self.sets);
	}
}

impl<I: IndexTrait> std::fmt::Display for DisjointSetUnion<I> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		writeln!(f, "parent: {:?}", self.parent)?;
		write!(f, "rank: {:?}", self.rank)
	}
}

//--------------------------------------------------------------------------------------------------
