//! Property-based tests for the concrete coefficient rings.

use proptest::prelude::*;

use crate::integers::Integer;
use crate::rationals::Rational;
use crate::traits::Ring;

fn small_int() -> impl Strategy<Value = Integer> {
    (-1000i64..1000i64).prop_map(Integer::new)
}

fn small_rat() -> impl Strategy<Value = Rational> {
    ((-100i64..100i64), (1i64..50i64)).prop_map(|(n, d)| Rational::from_i64(n, d))
}

proptest! {
    #[test]
    fn int_add_commutative(a in small_int(), b in small_int()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn int_mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
        let left = a.clone() * (b.clone() + c.clone());
        let right = a.clone() * b + a * c;
        prop_assert_eq!(left, right);
    }

    #[test]
    fn int_gcd_divides_both(a in small_int(), b in small_int()) {
        let g = a.gcd(&b);
        if !Ring::is_zero(&g) {
            prop_assert!(a.exact_div(&g).is_some());
            prop_assert!(b.exact_div(&g).is_some());
        }
    }

    #[test]
    fn int_gcd_nonnegative(a in small_int(), b in small_int()) {
        prop_assert!(!a.gcd(&b).is_negative());
    }

    #[test]
    fn int_exact_div_inverts_mul(a in small_int(), b in small_int()) {
        if !Ring::is_zero(&b) {
            let prod = a.clone() * b.clone();
            prop_assert_eq!(prod.exact_div(&b), Some(a));
        }
    }

    #[test]
    fn int_canonical_unit_normalizes(a in small_int()) {
        let u = a.canonical_unit();
        let canonical = a.exact_div(&u).unwrap();
        prop_assert!(!canonical.is_negative());
    }

    #[test]
    fn rat_field_div_roundtrip(a in small_rat(), b in small_rat()) {
        if !Ring::is_zero(&b) {
            let q = a.exact_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }
    }

    #[test]
    fn rat_add_associative(a in small_rat(), b in small_rat(), c in small_rat()) {
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn rat_canonical_unit_makes_one(a in small_rat()) {
        if !Ring::is_zero(&a) {
            let u = a.canonical_unit();
            prop_assert!(Ring::is_one(&a.exact_div(&u).unwrap()));
        }
    }
}
