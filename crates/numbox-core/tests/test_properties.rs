//! Property-based tests for arithmetic, comparison and batch invariants.

use approx::relative_eq;
use numbox_core::{Number, NumberSequence};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e6..1e6f64
}

fn non_zero() -> impl Strategy<Value = f64> {
    prop_oneof![-1e6..-1e-3f64, 1e-3..1e6f64]
}

proptest! {
    #[test]
    fn prop_add_then_subtract_round_trips(a in finite(), b in finite()) {
        let result = (Number::new(a) + b) - b;
        prop_assert!(relative_eq!(result.value(), a, epsilon = 1e-6, max_relative = 1e-9));
    }

    #[test]
    fn prop_multiply_then_divide_round_trips(a in finite(), b in non_zero()) {
        let result = (Number::new(a) * b) / b;
        prop_assert!(relative_eq!(result.value(), a, epsilon = 1e-9, max_relative = 1e-12));
    }

    #[test]
    fn prop_trichotomy(a in any::<f64>(), b in any::<f64>()) {
        let (a, b) = (Number::new(a), Number::new(b));
        let holds = [a < b, a == b, a > b];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
    }

    #[test]
    fn prop_batch_preserves_length_and_order(
        values in prop::collection::vec(finite(), 0..64),
        k in finite(),
        divisor in non_zero(),
    ) {
        let sequence = NumberSequence::from(values.clone());
        let shifted = &sequence + k;
        let lowered = &sequence - k;
        let scaled = &sequence * k;
        let divided = &sequence / divisor;
        let remainders = &sequence % divisor;

        for result in [&shifted, &lowered, &scaled, &divided, &remainders] {
            prop_assert_eq!(result.len(), sequence.len());
        }
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(shifted[i], Number::new(value + k));
            prop_assert_eq!(lowered[i], Number::new(value - k));
            prop_assert_eq!(scaled[i], Number::new(value * k));
            prop_assert_eq!(divided[i], Number::new(value / divisor));
            prop_assert_eq!(remainders[i], Number::new(value % divisor));
        }
    }

    #[test]
    fn prop_all_reduction_matches_elements(
        values in prop::collection::vec(-100i32..100, 0..32),
        k in -100i32..100,
    ) {
        let sequence: NumberSequence = values.iter().copied().collect();
        prop_assert_eq!(sequence.all_lt(k), values.iter().all(|&v| v < k));
        prop_assert_eq!(sequence.all_ge(k), values.iter().all(|&v| v >= k));
        prop_assert_eq!(sequence.all_eq(k), values.iter().all(|&v| v == k));
        prop_assert_eq!(sequence.all_ne(k), values.iter().all(|&v| v != k));
    }

    #[test]
    fn prop_extrema_bound_every_element(values in prop::collection::vec(finite(), 1..64)) {
        let sequence = NumberSequence::from(values);
        let max = sequence.maximum().unwrap();
        let min = sequence.minimum().unwrap();

        prop_assert!(sequence.all_le(max));
        prop_assert!(sequence.all_ge(min));
        prop_assert!(sequence.contains(&max));
        prop_assert!(sequence.contains(&min));
    }

    #[test]
    fn prop_extrema_bound_every_element_with_nan(
        values in prop::collection::vec(prop_oneof![3 => finite(), 1 => Just(f64::NAN)], 1..64),
    ) {
        let sequence = NumberSequence::from(values.clone());
        let max = sequence.maximum().unwrap();
        let min = sequence.minimum().unwrap();

        prop_assert!(sequence.all_le(max));
        prop_assert!(sequence.all_ge(min));
        prop_assert_eq!(Some(&max), sequence.iter().max());
        prop_assert_eq!(Some(&min), sequence.iter().min());
        prop_assert_eq!(min.is_nan(), values.iter().any(|v| v.is_nan()));
    }

    #[test]
    fn prop_limit_stays_in_bounds(x in finite(), lo in finite(), width in 0.0..1e6f64) {
        let hi = lo + width;
        let limited = Number::new(x).limit(lo, hi);
        prop_assert!(limited >= lo && limited <= hi);
        if x >= lo && x <= hi {
            prop_assert_eq!(limited, Number::new(x));
        }
    }
}
