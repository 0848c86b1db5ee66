use std::hint;
use std::mem;
use std::option;

use derive_more::IsVariant;

use crate::error::NothingError;
use crate::util::result::ResultExtension;

/// An optional value: either [`Nothing`](Maybe::Nothing) or [`Just`](Maybe::Just) a value of type
/// `T`.
///
/// The discriminant alone decides which variant is held, so `Just(None)` or `Just(ptr::null())`
/// are perfectly valid and distinct from `Nothing`. `Nothing` owns no storage that could ever be
/// read as a `T`.
///
/// # Dispatch
/// [`Maybe::maybe`] and [`Maybe::from_maybe`] evaluate exactly one of their handlers, selected by
/// the discriminant. The handler for the other variant is never called. For handlers taking extra
/// arguments, see [`Maybe::maybe_with`] or the [`maybe!`](crate::maybe!) macro.
///
/// # Examples
/// ```
/// # use algebraic_lib::maybe::Maybe;
/// let answer = Maybe::just(42);
/// assert!(answer.is_just());
/// assert_eq!(answer.maybe(|| 0, |x| x), 42);
/// assert_eq!(Maybe::<i32>::nothing().maybe(|| 0, |x| x), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Maybe<T> {
    #[default]
    Nothing,
    Just(T),
}

use Maybe::*;

impl<T> Maybe<T> {
    /// Creates a Maybe containing no value.
    pub const fn nothing() -> Maybe<T> {
        Nothing
    }

    /// Creates a Maybe containing `value`.
    pub const fn just(value: T) -> Maybe<T> {
        Just(value)
    }

    /// Returns the contained value, panicking if there is none.
    ///
    /// # Panics
    /// Panics with the message of [`NothingError`] if `self` is `Nothing`.
    #[track_caller]
    pub fn from_just(self) -> T {
        self.try_from_just().throw()
    }

    /// Returns the contained value, or a [`NothingError`] rather than panicking.
    pub fn try_from_just(self) -> Result<T, NothingError> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(NothingError),
        }
    }

    /// Returns the contained value without checking the discriminant in release builds.
    ///
    /// In debug builds this still panics via [`unreachable!`] when called on `Nothing`.
    ///
    /// # Safety
    /// The caller must ensure that `self` is `Just`. Calling this on `Nothing` is undefined
    /// behaviour in release builds.
    pub unsafe fn from_just_unchecked(self) -> T {
        match self {
            Just(value) => value,
            Nothing if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that Nothing is impossible
            // when invoking this method.
            Nothing => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Calls `on_nothing` if `self` is `Nothing` or `on_just` with the contained value otherwise,
    /// returning the result of whichever ran.
    pub fn maybe<U, N, J>(self, on_nothing: N, on_just: J) -> U
    where
        N: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        match self {
            Nothing => on_nothing(),
            Just(value) => on_just(value),
        }
    }

    /// The same as [`Maybe::maybe`], except that `args` is handed to whichever handler is called.
    /// `on_just` receives the contained value first.
    pub fn maybe_with<A, U, N, J>(self, args: A, on_nothing: N, on_just: J) -> U
    where
        N: FnOnce(A) -> U,
        J: FnOnce(T, A) -> U,
    {
        match self {
            Nothing => on_nothing(args),
            Just(value) => on_just(value, args),
        }
    }

    /// Returns `default` if `self` is `Nothing`, otherwise the result of `on_just` applied to the
    /// contained value.
    ///
    /// # Examples
    /// ```
    /// # use algebraic_lib::maybe::Maybe;
    /// assert_eq!(Maybe::nothing().from_maybe(-1, |x: i32| x * 2), -1);
    /// assert_eq!(Maybe::just(21).from_maybe(-1, |x| x * 2), 42);
    /// ```
    pub fn from_maybe<U, J: FnOnce(T) -> U>(self, default: U, on_just: J) -> U {
        match self {
            Nothing => default,
            Just(value) => on_just(value),
        }
    }

    /// The same as [`Maybe::from_maybe`], except that `args` is passed to `on_just` after the
    /// contained value.
    pub fn from_maybe_with<A, U, J>(self, args: A, default: U, on_just: J) -> U
    where
        J: FnOnce(T, A) -> U,
    {
        match self {
            Nothing => default,
            Just(value) => on_just(value, args),
        }
    }

    /// The same as [`Maybe::from_maybe`], but the default is only computed when needed.
    pub fn from_maybe_else<U, D, J>(self, default: D, on_just: J) -> U
    where
        D: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        self.maybe(default, on_just)
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.from_maybe(default, |value| value)
    }

    pub fn unwrap_or_else<D: FnOnce() -> T>(self, default: D) -> T {
        self.maybe(default, |value| value)
    }

    /// Borrows the contained value, if any.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Nothing => Nothing,
            Just(value) => Just(value),
        }
    }

    /// Mutably borrows the contained value, if any.
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Nothing => Nothing,
            Just(value) => Just(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Nothing => Nothing,
            Just(value) => Just(f(value)),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Nothing => Nothing,
            Just(value) => f(value),
        }
    }

    /// Returns `self` if it is `Just`, otherwise `other`.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Nothing => other,
            just => just,
        }
    }

    /// Takes the value out, leaving `Nothing` in its place.
    pub const fn take(&mut self) -> Maybe<T> {
        mem::replace(self, Nothing)
    }

    /// Replaces the contents with `Just(value)`, returning what was there before.
    pub const fn replace(&mut self, value: T) -> Maybe<T> {
        mem::replace(self, Just(value))
    }

    pub fn iter(&self) -> option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}
