//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use std::fmt::Debug;

use crate::{ErrExtra, ErrPack};

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct InvalidArgumentError;

impl InvalidArgumentError {
	#[cold]
	#[inline(never)]
	pub fn new(size: impl Debug) -> ErrPack<Self> {
		let message = format!("Invalid universe size: expected a non-negative value, got {size:?}");
		ErrPack {
			code: Self,
			extra: Some(Box::new(ErrExtra { message: message.into(), nested: None })),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct IndexOutOfRangeError;

impl IndexOutOfRangeError {
	#[cold]
	#[inline(never)]
	pub fn new(index: impl Debug, len: usize) -> ErrPack<Self> {
		let message = format!("Element index {index:?} out of range 0..{len}");
		ErrPack {
			code: Self,
			extra: Some(Box::new(ErrExtra { message: message.into(), nested: None })),
		}
	}
}

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DsuError {
	InvalidArgument,
	IndexOutOfRange,
}

impl From<InvalidArgumentError> for DsuError {
	fn from(_: InvalidArgumentError) -> Self {
		Self::InvalidArgument
	}
}

impl From<ErrPack<InvalidArgumentError>> for ErrPack<DsuError> {
	fn from(err: ErrPack<InvalidArgumentError>) -> Self {
		Self { code: err.code.into(), extra: err.extra }
	}
}

impl From<IndexOutOfRangeError> for DsuError {
	fn from(_: IndexOutOfRangeError) -> Self {
		Self::IndexOutOfRange
	}
}

impl From<ErrPack<IndexOutOfRangeError>> for ErrPack<DsuError> {
	fn from(err: ErrPack<IndexOutOfRangeError>) -> Self {
		Self { code: err.code.into(), extra: err.extra }
	}
}

//--------------------------------------------------------------------------------------------------
