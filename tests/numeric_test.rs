use proptest::prelude::*;
use quotient::ast::BinaryOperator;
use quotient::value::{Fraction, Value};

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// What the engine normalizes a fraction to: integral fractions collapse.
fn to_value(fraction: Fraction) -> Value {
    if fraction.denominator() == 1 {
        Value::Integer(fraction.numerator())
    } else {
        Value::Fraction(fraction)
    }
}

proptest! {
    #[test]
    fn construction_is_always_reduced(n in -10_000i64..10_000, d in -10_000i64..10_000) {
        prop_assume!(d != 0);
        let fraction = Fraction::new(n, d).unwrap();
        prop_assert!(fraction.denominator() > 0);
        prop_assert_eq!(
            gcd(
                fraction.numerator().unsigned_abs(),
                fraction.denominator().unsigned_abs()
            ),
            1
        );
    }

    #[test]
    fn sign_lives_on_the_numerator(n in 1i64..10_000, d in 1i64..10_000) {
        let positive = Fraction::new(n, d).unwrap();
        prop_assert!(!positive.is_negative());
        prop_assert_eq!(Fraction::new(-n, d).unwrap(), Fraction::new(n, -d).unwrap());
        prop_assert!(Fraction::new(-n, d).unwrap().is_negative());
    }

    #[test]
    fn reduction_is_idempotent(n in -10_000i64..10_000, d in 1i64..10_000) {
        let reduced = Fraction::new(n, d).unwrap();
        let again = Fraction::new(reduced.numerator(), reduced.denominator()).unwrap();
        prop_assert_eq!(reduced, again);
    }

    #[test]
    fn addition_matches_manual_cross_multiplication(
        a in -1_000i64..1_000,
        b in 1i64..1_000,
        c in -1_000i64..1_000,
        d in 1i64..1_000,
    ) {
        let left = Fraction::new(a, b).unwrap();
        let right = Fraction::new(c, d).unwrap();
        let actual = Value::apply_binary(
            BinaryOperator::Add,
            &Value::Fraction(left),
            &Value::Fraction(right),
        )
        .unwrap();
        let expected = to_value(Fraction::new(a * d + c * b, b * d).unwrap());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn multiplication_matches_manual_cross_multiplication(
        a in -1_000i64..1_000,
        b in 1i64..1_000,
        c in -1_000i64..1_000,
        d in 1i64..1_000,
    ) {
        let left = Fraction::new(a, b).unwrap();
        let right = Fraction::new(c, d).unwrap();
        let actual = Value::apply_binary(
            BinaryOperator::Multiply,
            &Value::Fraction(left),
            &Value::Fraction(right),
        )
        .unwrap();
        let expected = to_value(Fraction::new(a * c, b * d).unwrap());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn ordering_matches_cross_multiplication(
        a in -1_000i64..1_000,
        b in 1i64..1_000,
        c in -1_000i64..1_000,
        d in 1i64..1_000,
    ) {
        let left = Fraction::new(a, b).unwrap();
        let right = Fraction::new(c, d).unwrap();
        // Denominators are positive, so the inequality direction survives.
        prop_assert_eq!(left < right, (a as i128 * d as i128) < (c as i128 * b as i128));
    }

    #[test]
    fn mixed_comparison_agrees_with_promotion(n in -1_000i64..1_000, k in -1_000i64..1_000, d in 1i64..1_000) {
        let fraction = Value::Fraction(Fraction::new(n, d).unwrap());
        let integer = Value::Integer(k);
        let actual = Value::apply_binary(BinaryOperator::Less, &fraction, &integer).unwrap();
        let expected = (n as i128) < (k as i128) * (d as i128);
        prop_assert_eq!(actual, Value::Bool(expected));
    }

    #[test]
    fn integer_division_agrees_with_fraction_construction(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assume!(b != 0);
        let actual = Value::apply_binary(
            BinaryOperator::Divide,
            &Value::Integer(a),
            &Value::Integer(b),
        )
        .unwrap();
        let expected = to_value(Fraction::new(a, b).unwrap());
        prop_assert_eq!(actual, expected);
    }
}
