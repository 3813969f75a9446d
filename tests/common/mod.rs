//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

#![allow(dead_code)]

use std::sync::Once;

//--------------------------------------------------------------------------------------------------

/// Installs the stderr logger once per test binary. Set `DSU_TEST_LOG` to see the trace output.
pub fn init_logging() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let _ = stderrlog::new()
			.module("dsu")
			.quiet(std::env::var_os("DSU_TEST_LOG").is_none())
			.verbosity(4_usize)
			.init();
	});
}

/// Quadratic reference partition. Every element stores the label of its class.
pub struct NaivePartition {
	labels: Vec<usize>,
}

impl NaivePartition {
	pub fn new(size: usize) -> Self {
		Self { labels: (0..size).collect() }
	}

	pub fn union(&mut self, a: usize, b: usize) {
		let from = self.labels[b];
		let to = self.labels[a];
		if from == to {
			return;
		}
		for label in &mut self.labels {
			if *label == from {
				*label = to;
			}
		}
	}

	pub fn same_set(&self, a: usize, b: usize) -> bool {
		self.labels[a] == self.labels[b]
	}

	pub fn count(&self) -> usize {
		let mut labels = self.labels.clone();
		labels.sort_unstable();
		labels.dedup();
		labels.len()
	}

	pub fn groups(&self) -> Vec<Vec<usize>> {
		let mut groups: Vec<Vec<usize>> = Vec::new();
		for (key, &label) in self.labels.iter().enumerate() {
			match groups.iter_mut().find(|group| self.labels[group[0]] == label) {
				Some(group) => group.push(key),
				None => groups.push(vec![key]),
			}
		}
		groups
	}
}

//--------------------------------------------------------------------------------------------------
