//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use std::fmt::Debug;
use std::hash::Hash;

//--------------------------------------------------------------------------------------------------

/// Anything that can name an element of a fixed universe `0..n`.
///
/// `to_raw()` returns `None` for values that can never be a position,
/// e.g. negative integers or the invalid sentinel of a typed index.
pub trait IndexTrait: Copy + Clone + PartialEq + Eq + Hash + Ord + Debug {
	fn to_raw(self) -> Option<usize>;

	/// `raw` must have been obtained from `to_raw()` of some value of the same type,
	/// or be smaller than such a value.
	fn from_raw(raw: usize) -> Self;
}

macro_rules! impl_index_for_primitive {
	($($t:ty),*) => {
		$(
			impl IndexTrait for $t {
				#[inline]
				fn to_raw(self) -> Option<usize> {
					usize::try_from(self).ok()
				}

				#[inline]
				#[allow(clippy::cast_possible_truncation)]
				#[allow(clippy::cast_possible_wrap)]
				fn from_raw(raw: usize) -> Self {
					raw as $t
				}
			}
		)*
	};
}

impl_index_for_primitive!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

//--------------------------------------------------------------------------------------------------

#[macro_export]
macro_rules! define_index_type {
	($name:ident) => {
		#[repr(transparent)]
		#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
		pub struct $name {
			pub raw: usize,
		}

		impl $name {
			pub const fn new(raw: usize) -> Self {
				$name { raw }
			}

			pub const fn new_invalid() -> Self {
				$name { raw: usize::MAX }
			}

			#[allow(clippy::cast_possible_wrap)]
			pub const fn is_valid(&self) -> bool {
				(self.raw as isize) >= 0
			}
		}

		impl $crate::util::index::IndexTrait for $name {
			fn to_raw(self) -> Option<usize> {
				if self.is_valid() { Some(self.raw) } else { None }
			}

			fn from_raw(raw: usize) -> Self {
				$name { raw }
			}
		}
	};
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
