use std::hint;

use derive_more::IsVariant;

use crate::error::{NotLeftError, NotRightError};
use crate::maybe::Maybe;
use crate::util::result::ResultExtension;

/// A value that is exactly one of two alternatives, a [`Left`](Either::Left) of type `L` or a
/// [`Right`](Either::Right) of type `R`.
///
/// Either isn't tied to error handling: neither side is treated as a failure. Converting to and
/// from [`Result`] follows the usual convention of `Right` as `Ok` and `Left` as `Err`.
///
/// # Examples
/// ```
/// # use algebraic_lib::either::Either;
/// let parsed: Either<&str, i32> = Either::Right(7);
/// assert!(parsed.is_right());
/// assert_eq!(parsed.either(str::len, |x| x as usize), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

use Either::*;

impl<L, R> Either<L, R> {
    /// Returns the left value, panicking if `self` is `Right`.
    ///
    /// # Panics
    /// Panics with the message of [`NotLeftError`] if `self` is `Right`.
    #[track_caller]
    pub fn from_left(self) -> L {
        self.try_from_left().throw()
    }

    /// Returns the right value, panicking if `self` is `Left`.
    ///
    /// # Panics
    /// Panics with the message of [`NotRightError`] if `self` is `Left`.
    #[track_caller]
    pub fn from_right(self) -> R {
        self.try_from_right().throw()
    }

    pub fn try_from_left(self) -> Result<L, NotLeftError> {
        match self {
            Left(value) => Ok(value),
            Right(_) => Err(NotLeftError),
        }
    }

    pub fn try_from_right(self) -> Result<R, NotRightError> {
        match self {
            Left(_) => Err(NotRightError),
            Right(value) => Ok(value),
        }
    }

    /// Returns the left value without checking the discriminant in release builds.
    ///
    /// # Safety
    /// The caller must ensure that `self` is `Left`. Debug builds panic otherwise, release builds
    /// exhibit undefined behaviour.
    pub unsafe fn from_left_unchecked(self) -> L {
        match self {
            Left(value) => value,
            Right(_) if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that self is Left.
            Right(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Returns the right value without checking the discriminant in release builds.
    ///
    /// # Safety
    /// The caller must ensure that `self` is `Right`. Debug builds panic otherwise, release builds
    /// exhibit undefined behaviour.
    pub unsafe fn from_right_unchecked(self) -> R {
        match self {
            Right(value) => value,
            Left(_) if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that self is Right.
            Left(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Applies `on_left` or `on_right` to the contained value, depending on which side is held.
    /// Only the selected handler is called.
    pub fn either<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Left(value) => on_left(value),
            Right(value) => on_right(value),
        }
    }

    /// The same as [`Either::either`], with `args` passed after the contained value to whichever
    /// handler is called.
    pub fn either_with<A, U, FL, FR>(self, args: A, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L, A) -> U,
        FR: FnOnce(R, A) -> U,
    {
        match self {
            Left(value) => on_left(value, args),
            Right(value) => on_right(value, args),
        }
    }

    /// Converts the left side into a [`Maybe`], discarding a right value.
    pub fn left(self) -> Maybe<L> {
        match self {
            Left(value) => Maybe::Just(value),
            Right(_) => Maybe::Nothing,
        }
    }

    /// Converts the right side into a [`Maybe`], discarding a left value.
    pub fn right(self) -> Maybe<R> {
        match self {
            Left(_) => Maybe::Nothing,
            Right(value) => Maybe::Just(value),
        }
    }

    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(value),
        }
    }

    pub const fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(value),
        }
    }

    /// Swaps the sides, turning `Left(l)` into `Right(l)` and vice versa.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Left(value) => Right(value),
            Right(value) => Left(value),
        }
    }

    pub fn map_left<M, F: FnOnce(L) -> M>(self, f: F) -> Either<M, R> {
        match self {
            Left(value) => Left(f(value)),
            Right(value) => Right(value),
        }
    }

    pub fn map_right<M, F: FnOnce(R) -> M>(self, f: F) -> Either<L, M> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(f(value)),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Right(value),
            Err(value) => Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        match value {
            Left(value) => Err(value),
            Right(value) => Ok(value),
        }
    }
}
