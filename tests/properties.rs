// ============================================================================
// Property Tests
// Algebraic laws of the fraction engine
// ============================================================================

use fraction_calc::prelude::*;
use proptest::prelude::*;
use quickcheck::{Arbitrary, Gen};

// Small ranges keep every product far away from the u32 limits
fn fraction_strategy() -> impl Strategy<Value = Fraction> {
    (any::<bool>(), 0u32..1000, 0u32..300, 0u32..300).prop_map(|(negative, whole, num, den)| {
        let sign = if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Fraction::new(sign, whole, num, den)
    })
}

fn cross_equal(a: ImproperFraction, b: ImproperFraction) -> bool {
    a.num * b.den == b.num * a.den
}

proptest! {
    #[test]
    fn round_trip_through_proper_form(num in -100_000i128..100_000, den in -5_000i128..5_000) {
        prop_assume!(den != 0);
        let proper = to_proper_fraction(num, den).unwrap();
        let back = to_improper_fraction(&proper);
        prop_assert!(cross_equal(back, simplify(num, den).unwrap()));
    }

    #[test]
    fn simplification_is_idempotent(f in fraction_strategy()) {
        let once = simplify_proper_fraction(&f).unwrap();
        let twice = simplify_proper_fraction(&once).unwrap();
        prop_assert!(are_fractions_deep_equal(&once, &twice));
    }

    #[test]
    fn results_are_canonical(a in fraction_strategy(), b in fraction_strategy()) {
        for op in Operator::ALL {
            let r = perform_operation(&a, op, &b).unwrap();
            if r == CANONICAL_ZERO {
                // Division-by-zero fallback
                continue;
            }
            if r.denominator == 0 {
                prop_assert_eq!(r.numerator, 0);
            } else {
                prop_assert!(r.numerator > 0 && r.numerator < r.denominator);
                prop_assert_eq!(gcd(r.numerator as i128, r.denominator as i128), 1);
            }
            if is_zero(&r) {
                prop_assert_eq!(r.sign, Sign::Positive);
            }
        }
    }

    #[test]
    fn additive_identity(f in fraction_strategy()) {
        // Canonicalize first: value equality compares unreduced forms
        let f = simplify_proper_fraction(&f).unwrap();
        let sum = add_fractions(&f, &DEFAULT_FRACTION).unwrap();
        prop_assert!(are_fractions_equal(&sum, &f));
    }

    #[test]
    fn division_by_zero_is_canonical_zero(f in fraction_strategy(), dangling in 0u32..50) {
        prop_assert_eq!(divide_fractions(&f, &DEFAULT_FRACTION).unwrap(), CANONICAL_ZERO);
        let incomplete = Fraction::new(Sign::Negative, 0, dangling, 0);
        prop_assert_eq!(divide_fractions(&f, &incomplete).unwrap(), CANONICAL_ZERO);
    }

    #[test]
    fn subtraction_inverts_addition(a in fraction_strategy(), b in fraction_strategy()) {
        let sum = add_fractions(&a, &b).unwrap();
        let back = subtract_fractions(&sum, &b).unwrap();
        prop_assert!(cross_equal(to_improper_fraction(&back), to_improper_fraction(&a)));
    }

    #[test]
    fn rounding_brackets_value(f in fraction_strategy(), shift in 1u32..9) {
        let den = 1u32 << shift;
        let floor = floor_fraction(&f, den).unwrap();
        let nearest = round_fraction(&f, den).unwrap();
        let ceil = ceil_fraction(&f, den).unwrap();

        let value = to_decimal(&f);
        let step = 1.0 / den as f64;
        prop_assert!(to_decimal(&floor) <= value + 1e-9);
        prop_assert!(to_decimal(&ceil) >= value - 1e-9);
        prop_assert!(to_decimal(&ceil) - to_decimal(&floor) <= step + 1e-9);
        prop_assert!((to_decimal(&nearest) - value).abs() <= step / 2.0 + 1e-9);

        // Every result lands on the grid
        for r in [floor, nearest, ceil] {
            prop_assert!(r.denominator == 0 || den % r.denominator == 0);
        }
    }
}

// ============================================================================
// QuickCheck: commutativity
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct SmallFraction(Fraction);

impl Arbitrary for SmallFraction {
    fn arbitrary(g: &mut Gen) -> Self {
        let sign = if bool::arbitrary(g) {
            Sign::Negative
        } else {
            Sign::Positive
        };
        SmallFraction(Fraction::new(
            sign,
            u32::arbitrary(g) % 500,
            u32::arbitrary(g) % 200,
            u32::arbitrary(g) % 200,
        ))
    }
}

#[test]
fn addition_commutes() {
    fn prop(a: SmallFraction, b: SmallFraction) -> bool {
        add_fractions(&a.0, &b.0) == add_fractions(&b.0, &a.0)
    }
    quickcheck::quickcheck(prop as fn(SmallFraction, SmallFraction) -> bool);
}

#[test]
fn multiplication_commutes() {
    fn prop(a: SmallFraction, b: SmallFraction) -> bool {
        multiply_fractions(&a.0, &b.0) == multiply_fractions(&b.0, &a.0)
    }
    quickcheck::quickcheck(prop as fn(SmallFraction, SmallFraction) -> bool);
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn scenario_mixed_addition() {
    let a = Fraction::new(Sign::Positive, 1, 1, 2);
    let b = Fraction::new(Sign::Positive, 2, 1, 3);
    assert_eq!(
        add_fractions(&a, &b).unwrap(),
        Fraction::new(Sign::Positive, 3, 5, 6)
    );
}

#[test]
fn scenario_sign_in_multiplication() {
    let a = Fraction::new(Sign::Positive, 0, 2, 4);
    let b = Fraction::new(Sign::Negative, 1, 0, 0);
    assert_eq!(
        multiply_fractions(&a, &b).unwrap(),
        Fraction::new(Sign::Negative, 0, 1, 2)
    );
}

#[test]
fn scenario_ceil_to_quarters() {
    let f = Fraction::new(Sign::Positive, 0, 1, 8);
    assert_eq!(
        ceil_fraction(&f, 4).unwrap(),
        Fraction::new(Sign::Positive, 0, 1, 4)
    );
}

#[test]
fn scenario_round_third_to_eighths() {
    let f = Fraction::new(Sign::Positive, 0, 1, 3);
    assert_eq!(
        round_fraction(&f, 8).unwrap(),
        Fraction::new(Sign::Positive, 0, 3, 8)
    );
}

#[test]
fn scenario_dangling_numerator_is_zero() {
    assert!(is_zero(&Fraction::new(Sign::Positive, 0, 5, 0)));
    assert!(!is_complete_fraction(&Fraction::new(Sign::Positive, 0, 5, 0)));
}
