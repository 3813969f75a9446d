//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

// clippy
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::panic_in_result_fn)]
#![warn(clippy::panic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::used_underscore_items)]
use std::borrow::Cow;

pub mod dsu;
pub mod util;

pub use dsu::{DisjointSetUnion, DsuError};

#[derive(Debug)]
pub struct ErrExtra {
	pub message: Cow<'static, str>,
	pub nested: Option<Box<dyn std::error::Error + Send + Sync>>,
}

#[derive(Debug)]
pub struct ErrPack<Code: Copy + std::fmt::Debug> {
	pub code: Code,
	pub extra: Option<Box<ErrExtra>>,
}

impl<Code: Copy + std::fmt::Debug> ErrPack<Code> {
	pub fn message(&self) -> &str {
		self.extra.as_ref().map_or("", |extra| extra.message.as_ref())
	}
}

impl<Code: Copy + std::fmt::Debug> std::error::Error for ErrPack<Code> {
}

impl<Code: Copy + std::fmt::Debug> std::fmt::Display for ErrPack<Code> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let code = self.code;
		write!(f, "(ErrPack: code={code:?}")?;
		if let Some(ref extra) = self.extra {
			let msg = extra.message.as_ref();
			if !msg.is_empty() {
				write!(f, ", message={msg}")?;
			}
			if let Some(nested) = &extra.nested {
				write!(f, ", nested={nested:?}")?;
			}
		}
		write!(f, ")")
	}
}
