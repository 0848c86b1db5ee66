/// Dispatches on a [`Maybe`](crate::maybe::Maybe), calling `on_nothing(args..)` or
/// `on_just(value, args..)` and evaluating to the result.
///
/// Any number of extra arguments can follow the handlers. They are only evaluated in the arm that
/// is selected, so side effects in them happen at most once.
///
/// # Examples
/// ```
/// # use algebraic_lib::maybe;
/// # use algebraic_lib::maybe::Maybe;
/// fn fallback(base: i32) -> i32 { base }
/// fn add(value: i32, base: i32) -> i32 { value + base }
///
/// assert_eq!(maybe!(Maybe::just(2), fallback, add, 40), 42);
/// assert_eq!(maybe!(Maybe::nothing(), fallback, add, 40), 40);
/// ```
#[macro_export]
macro_rules! maybe {
    ($value:expr, $on_nothing:expr, $on_just:expr $(, $arg:expr)* $(,)?) => {
        match $value {
            $crate::maybe::Maybe::Nothing => ($on_nothing)($($arg),*),
            $crate::maybe::Maybe::Just(value) => ($on_just)(value $(, $arg)*),
        }
    };
}

/// Dispatches on an [`Either`](crate::either::Either), calling `on_left(value, args..)` or
/// `on_right(value, args..)` and evaluating to the result.
///
/// Extra arguments behave the same as for [`maybe!`](crate::maybe!).
#[macro_export]
macro_rules! either {
    ($value:expr, $on_left:expr, $on_right:expr $(, $arg:expr)* $(,)?) => {
        match $value {
            $crate::either::Either::Left(value) => ($on_left)(value $(, $arg)*),
            $crate::either::Either::Right(value) => ($on_right)(value $(, $arg)*),
        }
    };
}
