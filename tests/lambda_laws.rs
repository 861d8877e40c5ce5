#![cfg(feature = "lambda")]
//! Property-based tests for the lambda combinators.
//!
//! This module verifies that the combinators satisfy:
//!
//! - **Identity**: composing with the identity lambda changes nothing
//! - **Associativity**: chaining order of `and_then` does not matter
//! - **Duality**: `f.and_then(g) == g.compose(f)`
//! - **Partial application**: fixing an argument equals passing it
//! - **Currying**: `curry2(f)(a)(b) == f(a, b)`, undone by `uncurry2`

use lambdakit::lambda::{BoxedLambda, Lambda, curry2, partial, uncurry2};
use proptest::prelude::*;

fn identity(value: i32) -> i32 {
    value
}

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn negate(value: i32) -> i32 {
    value.wrapping_neg()
}

fn weighted(first: i32, second: i32) -> i32 {
    first.wrapping_mul(3).wrapping_sub(second)
}

fn volume(width: i16, height: i16, depth: i16) -> i64 {
    i64::from(width) * i64::from(height) * i64::from(depth)
}

// =============================================================================
// Identity Laws
// =============================================================================

proptest! {
    /// Left identity: f.compose(identity) == f
    #[test]
    fn prop_compose_left_identity(value in any::<i32>()) {
        prop_assert_eq!(increment.compose(identity).apply((value,)), increment(value));
    }

    /// Right identity: f.and_then(identity) == f
    #[test]
    fn prop_and_then_right_identity(value in any::<i32>()) {
        prop_assert_eq!(double.and_then(identity).apply((value,)), double(value));
    }
}

// =============================================================================
// Associativity Law
// =============================================================================

proptest! {
    /// Associativity: (f.and_then(g)).and_then(h) == f.and_then(g.and_then(h))
    #[test]
    fn prop_and_then_associativity(value in any::<i32>()) {
        let left = increment.and_then(double).and_then(negate);
        let right = increment.and_then(double.and_then(negate));

        prop_assert_eq!(left.apply((value,)), right.apply((value,)));
    }
}

// =============================================================================
// Duality Law
// =============================================================================

proptest! {
    /// Duality: f.and_then(g) == g.compose(f), also across arities
    #[test]
    fn prop_and_then_compose_duality(first in any::<i32>(), second in any::<i32>()) {
        let post = weighted.and_then(negate);
        let pre = negate.compose(weighted);

        prop_assert_eq!(post.apply((first, second)), pre.apply((first, second)));
        prop_assert_eq!(post.apply((first, second)), negate(weighted(first, second)));
    }
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// Partial definition: partial(f, a)(b) == f(a, b)
    #[test]
    fn prop_partial_binary(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(partial(weighted, first).apply((second,)), weighted(first, second));
    }

    /// Repeated partial application of an arity-3 lambda
    #[test]
    fn prop_partial_ternary(width in any::<i16>(), height in any::<i16>(), depth in any::<i16>()) {
        let fixed_width = partial(volume, width);
        let fixed_height = partial(fixed_width, height);

        prop_assert_eq!(fixed_width.apply((height, depth)), volume(width, height, depth));
        prop_assert_eq!(fixed_height.apply((depth,)), volume(width, height, depth));
    }

    /// Currying: curry2(f)(a)(b) == f(a, b)
    #[test]
    fn prop_curry2(first in any::<i32>(), second in any::<i32>()) {
        let curried = curry2(weighted);
        prop_assert_eq!(curried(first).apply((second,)), weighted(first, second));
    }

    /// Uncurrying: uncurry2(curry2(f))(a, b) == f(a, b)
    #[test]
    fn prop_uncurry2_inverts_curry2(first in any::<i32>(), second in any::<i32>()) {
        let round_trip = uncurry2(curry2(weighted));
        prop_assert_eq!(round_trip(first, second), weighted(first, second));
    }
}

// =============================================================================
// Boxing Law
// =============================================================================

proptest! {
    /// Boxing preserves behavior: BoxedLambda::new(f)(args) == f(args)
    #[test]
    fn prop_boxed_transparency(first in any::<i32>(), second in any::<i32>()) {
        let boxed: BoxedLambda<(i32, i32), i32> = BoxedLambda::new(weighted);
        let shared = boxed.clone();

        prop_assert_eq!(boxed.apply((first, second)), weighted(first, second));
        prop_assert!(boxed.ptr_eq(&shared));
    }
}
