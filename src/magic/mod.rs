//! A minimal binding to libmagic, the file type detection library behind `file(1)`.
//!
//! The usual lifecycle is open → load → (set flags → detect)* → close, where closing happens
//! when the [`Magic`] handle is dropped. Every step that can fail returns its own error type,
//! all of which convert into [`MagicError`].
//!
//! Requires the `magic` feature and libmagic to be installed at link time.
#![cfg(unix)]

mod error;
mod ffi;
mod flags;
mod magic;

pub use error::*;
pub use flags::*;
pub use magic::*;
