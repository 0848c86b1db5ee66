//! Two small algebraic data types, [`Maybe`](maybe::Maybe) and [`Either`](either::Either), with a
//! shared vocabulary for building, querying and dispatching on them.
//!
//! # Purpose
//! Rust already has [`Option`] and [`Result`], so this crate isn't about filling a gap. It's about
//! the pattern itself: a tag that decides which payload is live, constructors for each variant,
//! predicates, extraction and a dispatch helper that evaluates exactly one of two handlers. Both
//! types convert freely to and from their standard library counterparts.
//!
//! # Extraction
//! Every accessor comes in three flavours:
//! - `try_*` returns a [`Result`] with a small error type from [`error`].
//! - The plain accessor (e.g. [`Maybe::from_just`](maybe::Maybe::from_just)) panics with the
//!   message of that error.
//! - `*_unchecked` is `unsafe` and skips the check in release builds. Debug builds still panic, so
//!   mistakes show up during testing.
//!
//! Pattern matching is, of course, always available and usually the nicest option.
//!
//! # Dispatch
//! [`Maybe::maybe`](maybe::Maybe::maybe) and [`Either::either`](either::Either::either) take a
//! handler per variant and call only the one that matches. The `_with` variants, as well as the
//! [`maybe!`] and [`either!`] macros, forward extra arguments to whichever handler runs.
//!
//! # Heap Allocation
//! With the `boxed` feature (on by default), [`MaybeBox`](boxed::MaybeBox) keeps a `Maybe` on
//! the heap. Allocation failures are returned as [`AllocError`](error::AllocError) and the payload
//! is always dropped before the container is freed.
//!
//! # libmagic
//! The `magic` feature adds a thin, owning wrapper around libmagic, and the `cli` feature builds
//! the `magic-example` binary on top of it.
#![cfg_attr(docsrs, feature(doc_cfg))]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

mod macros;

pub mod either;
pub mod error;
pub mod maybe;

#[cfg(feature = "boxed")]
#[cfg_attr(docsrs, doc(cfg(feature = "boxed")))]
pub mod boxed;

#[cfg(feature = "magic")]
#[cfg_attr(docsrs, doc(cfg(feature = "magic")))]
pub mod magic;

pub(crate) mod util;
