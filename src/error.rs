//! Error types returned by the checked accessors and allocating constructors of this crate.
//!
//! Each error is a small struct deriving [`Display`](std::fmt::Display) and
//! [`Error`](std::error::Error), so that it can be composed into larger enums with `From` by
//! downstream code.

use std::alloc::Layout;

use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected a Just value but found Nothing")]
pub struct NothingError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected a Left value but found Right")]
pub struct NotLeftError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected a Right value but found Left")]
pub struct NotRightError;

/// The allocator was unable to provide memory for the requested layout.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("memory allocation of {size} bytes (align {align}) failed")]
pub struct AllocError {
    pub size: usize,
    pub align: usize,
}

impl AllocError {
    pub const fn new(layout: Layout) -> AllocError {
        AllocError {
            size: layout.size(),
            align: layout.align(),
        }
    }
}
