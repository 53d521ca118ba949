// tests/property_tests.rs
//
// 有理数型のプロパティテスト
//
// - 生成された値は常に既約・分母正
// - parse(format(v)) == v
// - 正規化後も体の恒等式が成り立つ
// - 順序は交差乗算と一致する

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;
use ratio_core::{Rational, RationalError};

fn canonical(val: &Rational) -> bool {
    val.denominator().is_positive() && val.numerator().gcd(val.denominator()).is_one()
}

/// 小さな値と巨大な値（i64 を3つ掛けたもの）を混ぜて生成
fn arb_bigint() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        (-1000i64..1000).prop_map(BigInt::from),
        (any::<i64>(), any::<i64>(), any::<i64>())
            .prop_map(|(a, b, c)| BigInt::from(a) * BigInt::from(b) * BigInt::from(c)),
    ]
}

fn arb_nonzero_bigint() -> impl Strategy<Value = BigInt> {
    arb_bigint().prop_filter("nonzero", |n| !n.is_zero())
}

fn arb_rational() -> impl Strategy<Value = Rational> {
    (arb_bigint(), arb_nonzero_bigint()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn construction_is_canonical(n in arb_bigint(), d in arb_nonzero_bigint()) {
        let val = Rational::new(n.clone(), d.clone()).unwrap();
        prop_assert!(canonical(&val));
        // n/d == num/den  <=>  n * den == num * d
        prop_assert_eq!(&n * val.denominator(), val.numerator() * &d);
    }

    #[test]
    fn zero_denominator_always_fails(n in arb_bigint()) {
        prop_assert_eq!(Rational::new(n, BigInt::zero()), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn text_roundtrip(v in arb_rational()) {
        let text = v.to_string();
        let back: Rational = text.parse().unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn unreduced_text_parses_to_reduced_value(n in -10_000i64..10_000, d in 1i64..10_000, k in 1i64..1000) {
        let text = format!("{}/{}", n * k, d * k);
        let parsed: Rational = text.parse().unwrap();
        prop_assert_eq!(parsed, Rational::div_by(n, d).unwrap());
    }

    #[test]
    fn operations_stay_canonical(a in arb_rational(), b in arb_rational()) {
        prop_assert!(canonical(&(&a + &b)));
        prop_assert!(canonical(&(&a - &b)));
        prop_assert!(canonical(&(&a * &b)));
        prop_assert!(canonical(&-&a));
        if !b.is_zero() {
            prop_assert!(canonical(&(&a / &b).unwrap()));
        }
    }

    #[test]
    fn field_identities(a in arb_rational(), b in arb_rational(), c in arb_rational()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        prop_assert_eq!(&(&a - &b) + &b, a.clone());
        prop_assert_eq!(&a + &-&a, Rational::zero());
        if !b.is_zero() {
            prop_assert_eq!(&(&a / &b).unwrap() * &b, a.clone());
        } else {
            prop_assert_eq!(&a / &b, Err(RationalError::DivisionByZero));
        }
    }

    #[test]
    fn ordering_matches_cross_multiplication(a in arb_rational(), b in arb_rational()) {
        let lhs = a.numerator() * b.denominator();
        let rhs = b.numerator() * a.denominator();
        prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
    }

    #[test]
    fn ordering_is_transitive(a in arb_rational(), b in arb_rational(), c in arb_rational()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn interval_membership(a in arb_rational(), b in arb_rational(), x in arb_rational()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let range = lo.range_to(&hi);
        prop_assert_eq!(range.contains(&x), lo <= x && x <= hi);
        prop_assert!(range.contains(&lo));
        prop_assert!(range.contains(&hi));
        prop_assert!(!range.contains(&(&lo - &Rational::one())));
        prop_assert!(!range.contains(&(&hi + &Rational::one())));
    }
}
