#![cfg(test)]

use std::cell::Cell;
use std::ptr;

use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;

use super::*;
use crate::error::NothingError;
use crate::util::panic::assert_panics;

#[test]
fn test_just_and_nothing() {
    let answer = Maybe::just(42);
    assert!(answer.is_just(), "Just should be present.");
    assert!(!answer.is_nothing());
    assert_eq!(answer.from_just(), 42, "Extraction should return the stored value.");

    let empty = Maybe::<i32>::nothing();
    assert!(empty.is_nothing(), "Nothing should be absent.");
    assert!(!empty.is_just());
    assert_eq!(empty, Maybe::default(), "Nothing should be the default.");
}

#[test]
fn test_sentinel_payloads_are_present() {
    let null: Maybe<*const u8> = Maybe::just(ptr::null());
    assert!(null.is_just(), "A null payload is still a present value.");

    let none: Maybe<Option<u8>> = Maybe::just(None);
    assert!(none.is_just());
    assert_ne!(none, Maybe::Nothing);
}

#[test]
fn test_checked_extraction() {
    assert_eq!(Maybe::just("value").try_from_just(), Ok("value"));
    assert_eq!(Maybe::<&str>::nothing().try_from_just(), Err(NothingError));

    assert_panics!({
        Maybe::<u8>::nothing().from_just();
    });
}

#[test]
fn test_unchecked_extraction() {
    // SAFETY: The value is Just.
    assert_eq!(unsafe { Maybe::just(7_u8).from_just_unchecked() }, 7);

    #[cfg(debug_assertions)]
    assert_panics!({
        // SAFETY: Not safe, but debug builds are guaranteed to panic instead.
        unsafe { Maybe::<u8>::nothing().from_just_unchecked() };
    });
}

#[test]
fn test_dispatch() {
    assert_eq!(Maybe::<i32>::nothing().maybe(|| 0, |x| x), 0);
    assert_eq!(Maybe::just(42).maybe(|| 0, |x| x), 42);
}

#[test]
fn test_dispatch_runs_one_handler() {
    let nothing_calls = Cell::new(0);
    let just_calls = Cell::new(0);

    let on_nothing = || {
        nothing_calls.set(nothing_calls.get() + 1);
        "nothing"
    };
    let on_just = |_: u8| {
        just_calls.set(just_calls.get() + 1);
        "just"
    };

    assert_eq!(Maybe::just(1).maybe(on_nothing, on_just), "just");
    assert_eq!((nothing_calls.get(), just_calls.get()), (0, 1));

    assert_eq!(Maybe::nothing().maybe(on_nothing, on_just), "nothing");
    assert_eq!(
        (nothing_calls.get(), just_calls.get()),
        (1, 1),
        "Exactly one handler should run per dispatch."
    );
}

#[test]
fn test_dispatch_with_args() {
    let scale = |factor: i32| factor;
    let times = |x: i32, factor: i32| x * factor;

    assert_eq!(Maybe::just(6).maybe_with(7, scale, times), 42);
    assert_eq!(Maybe::nothing().maybe_with(7, scale, times), 7);
}

#[test]
fn test_from_maybe() {
    let double = |x: i32| x * 2;

    assert_eq!(Maybe::nothing().from_maybe(-1, double), -1);
    assert_eq!(Maybe::just(21).from_maybe(-1, double), 42);
    assert_eq!(Maybe::just(2).from_maybe_with(5, 0, |x, y| x + y), 7);
    assert_eq!(Maybe::<i32>::nothing().from_maybe_with(5, 0, |x, y| x + y), 0);

    let computed = Cell::new(false);
    let result = Maybe::just(3).from_maybe_else(
        || {
            computed.set(true);
            0
        },
        |x| x,
    );
    assert_eq!(result, 3);
    assert!(!computed.get(), "The default shouldn't be computed for Just.");
}

#[test]
fn test_macro_dispatch() {
    fn on_nothing(base: i32, offset: i32) -> i32 {
        base - offset
    }

    fn on_just(value: i32, base: i32, offset: i32) -> i32 {
        value + base + offset
    }

    assert_eq!(crate::maybe!(Maybe::just(1), on_nothing, on_just, 10, 2), 13);
    assert_eq!(crate::maybe!(Maybe::nothing(), on_nothing, on_just, 10, 2), 8);
    assert_eq!(crate::maybe!(Maybe::just(5), || 0, |x| x), 5);
}

#[test]
fn test_macro_only_evaluates_chosen_arm() {
    let evaluated = Cell::new(0);
    let arg = || {
        evaluated.set(evaluated.get() + 1);
        1
    };

    let result = crate::maybe!(Maybe::just(1), |a: i32| a, |x: i32, a: i32| x + a, arg());
    assert_eq!(result, 2);
    assert_eq!(evaluated.get(), 1, "Arguments should only be evaluated once.");

    evaluated.set(0);
    let result = crate::maybe!(Maybe::<i32>::nothing(), |a: i32| a, |x: i32, a: i32| x + a, arg());
    assert_eq!(result, 1, "Nothing should dispatch to the first handler.");
    assert_eq!(evaluated.get(), 1, "Arguments should only be evaluated once for Nothing.");
}

#[test]
fn test_take_and_replace() {
    let mut value = Maybe::just(String::from("first"));

    let old = value.replace(String::from("second"));
    assert_eq!(old, Maybe::just(String::from("first")));
    assert_eq!(value.as_ref().map(String::as_str), Maybe::just("second"));

    assert_eq!(value.take(), Maybe::just(String::from("second")));
    assert!(value.is_nothing(), "Taking should leave Nothing behind.");
}

#[test]
fn test_combinators() {
    let mut value = Maybe::just(4);
    if let Maybe::Just(inner) = value.as_mut() {
        *inner += 1;
    }

    assert_eq!(value.map(|x| x * 2), Maybe::just(10));
    assert_eq!(value.and_then(|_| Maybe::<u8>::nothing()), Maybe::Nothing);
    assert_eq!(Maybe::nothing().or(value), Maybe::just(5));
    assert_eq!(Maybe::nothing().unwrap_or(3), 3);
    assert_eq!(value.unwrap_or_else(|| unreachable!()), 5);
    assert_eq!(value.iter().copied().sum::<i32>(), 5);
    assert_eq!(Maybe::<i32>::nothing().into_iter().count(), 0);
}

#[quickcheck]
fn just_round_trips(value: i64) -> bool {
    let maybe = Maybe::just(value);
    maybe.is_just() && maybe.from_just() == value
}

#[quickcheck]
fn option_conversion_is_lossless(value: Option<String>) -> bool {
    Option::<String>::from(Maybe::from(value.clone())) == value
}

#[quickcheck]
fn from_maybe_matches_dispatch(value: Option<u32>, default: u64) -> bool {
    let maybe = Maybe::from(value);
    maybe.from_maybe(default, u64::from) == maybe.maybe(|| default, u64::from)
}
