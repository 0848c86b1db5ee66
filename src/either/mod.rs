//! The two-alternative tagged union, [`Either`].

mod either;

pub use either::*;
