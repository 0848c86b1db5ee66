//! The optional value type, [`Maybe`].
//!
//! [`Maybe`] mirrors [`Option`] closely and converts to and from it freely. It exists alongside
//! [`Either`](crate::either::Either) to give both types the same vocabulary: construction,
//! predicates, checked and unchecked extraction and dispatch over both variants.
//!
//! Heap-resident instances are covered by [`MaybeBox`](crate::boxed::MaybeBox).

mod maybe;
mod tests;

pub use maybe::*;
