//! Property-based tests for multivariate polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::sync::Arc;

    use proptest::prelude::*;
    use rarus_rings::{Integer, Ring};

    use crate::algorithms::gcd::{exact_div, gcd, lcm, normalize};
    use crate::deflation::{deflate, deflation, inflate};
    use crate::monomial::Monomial;
    use crate::mpoly::MPoly;
    use crate::ordering::MonomialOrder;
    use crate::ring::MPolyRing;

    fn ring(order: MonomialOrder) -> Arc<MPolyRing<Integer>> {
        MPolyRing::new(["x", "y"], order)
    }

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::DegLex),
            Just(MonomialOrder::DegRevLex),
        ]
    }

    // Raw term lists; duplicates and zeros are welcome because
    // construction has to normalize them away.
    fn raw_terms() -> impl Strategy<Value = Vec<(i64, u64, u64)>> {
        proptest::collection::vec((-20i64..=20, 0u64..6, 0u64..6), 0..8)
    }

    fn build(
        ring: &Arc<MPolyRing<Integer>>,
        terms: &[(i64, u64, u64)],
    ) -> MPoly<Integer> {
        MPoly::from_terms(
            ring,
            terms
                .iter()
                .map(|&(c, a, b)| (Integer::from(c), vec![a, b])),
        )
        .unwrap()
    }

    fn is_canonical(p: &MPoly<Integer>) -> bool {
        let order = p.ring().order();
        p.terms().iter().all(|(_, c)| !c.is_zero())
            && p.terms()
                .windows(2)
                .all(|w| order.compare(&w[0].0, &w[1].0) == std::cmp::Ordering::Greater)
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative(order in any_order(), a in raw_terms(), b in raw_terms()) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(
            order in any_order(),
            a in raw_terms(),
            b in raw_terms(),
            c in raw_terms(),
        ) {
            let r = ring(order);
            let (a, b, c) = (build(&r, &a), build(&r, &b), build(&r, &c));
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(order in any_order(), a in raw_terms(), b in raw_terms()) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn mul_associative(
            order in any_order(),
            a in raw_terms(),
            b in raw_terms(),
            c in raw_terms(),
        ) {
            let r = ring(order);
            let (a, b, c) = (build(&r, &a), build(&r, &b), build(&r, &c));
            let left = a.mul(&b).unwrap().mul(&c).unwrap();
            let right = a.mul(&b.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn distributive(
            order in any_order(),
            a in raw_terms(),
            b in raw_terms(),
            c in raw_terms(),
        ) {
            let r = ring(order);
            let (a, b, c) = (build(&r, &a), build(&r, &b), build(&r, &c));
            let left = a.mul(&b.add(&c)).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap());
            prop_assert_eq!(left, right);
        }

        #[test]
        fn identities(order in any_order(), a in raw_terms()) {
            let r = ring(order);
            let a = build(&r, &a);
            prop_assert_eq!(a.add(&MPoly::zero(&r)), a.clone());
            prop_assert_eq!(a.mul(&MPoly::one(&r)).unwrap(), a.clone());
            prop_assert!(a.mul(&MPoly::zero(&r)).unwrap().is_zero());
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Results of every operation keep the canonical-term invariants.

        #[test]
        fn results_canonical(order in any_order(), a in raw_terms(), b in raw_terms()) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.sub(&b)));
            prop_assert!(is_canonical(&a.mul(&b).unwrap()));
            prop_assert!(is_canonical(&a.pow(3).unwrap()));
        }

        // Over an integral domain the leading term is multiplicative.

        #[test]
        fn leading_term_multiplicative(
            order in any_order(),
            a in raw_terms(),
            b in raw_terms(),
        ) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assume!(!a.is_zero() && !b.is_zero());
            let prod = a.mul(&b).unwrap();
            let lt = a.leading_term().mul(&b.leading_term()).unwrap();
            prop_assert_eq!(prod.leading_term(), lt);
        }

        // The leading term factors as leading coefficient times leading
        // monomial.

        #[test]
        fn leading_term_law(order in any_order(), a in raw_terms()) {
            let r = ring(order);
            let a = build(&r, &a);
            prop_assume!(!a.is_zero());
            let lt = a.leading_monomial().scale(&a.leading_coeff());
            prop_assert_eq!(a.leading_term(), lt);
        }

        // Every comparator is a total order on monomials, compatible with
        // multiplication by a common factor, with 1 as the minimum.

        #[test]
        fn ordering_laws(
            order in any_order(),
            a in (0u64..6, 0u64..6),
            b in (0u64..6, 0u64..6),
            c in (0u64..6, 0u64..6),
        ) {
            let ma = Monomial::from_exponents(&[a.0, a.1]).unwrap();
            let mb = Monomial::from_exponents(&[b.0, b.1]).unwrap();
            let mc = Monomial::from_exponents(&[c.0, c.1]).unwrap();

            prop_assert_eq!(order.compare(&ma, &ma), Ordering::Equal);
            prop_assert_eq!(
                order.compare(&ma, &mb),
                order.compare(&mb, &ma).reverse()
            );
            if order.compare(&ma, &mb) == Ordering::Equal {
                prop_assert_eq!(&ma, &mb);
            }
            if order.compare(&ma, &mb) != Ordering::Less
                && order.compare(&mb, &mc) != Ordering::Less
            {
                prop_assert_ne!(order.compare(&ma, &mc), Ordering::Less);
            }

            prop_assert_eq!(
                order.compare(&ma.mul(&mc).unwrap(), &mb.mul(&mc).unwrap()),
                order.compare(&ma, &mb)
            );

            let one = Monomial::one(2);
            if !ma.is_one() {
                prop_assert_eq!(order.compare(&ma, &one), Ordering::Greater);
            }
        }

        // Evaluation is a ring homomorphism.

        #[test]
        fn eval_homomorphism(
            order in any_order(),
            a in raw_terms(),
            b in raw_terms(),
            x in -5i64..=5,
            y in -5i64..=5,
        ) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            let pt = [Integer::from(x), Integer::from(y)];
            let sum = a.add(&b);
            prop_assert_eq!(
                sum.evaluate(&pt).unwrap(),
                a.evaluate(&pt).unwrap() + b.evaluate(&pt).unwrap()
            );
            let prod = a.mul(&b).unwrap();
            prop_assert_eq!(
                prod.evaluate(&pt).unwrap(),
                a.evaluate(&pt).unwrap() * b.evaluate(&pt).unwrap()
            );
        }

        // Deflation round trip with its own computed parameters.

        #[test]
        fn deflation_round_trip(order in any_order(), a in raw_terms()) {
            let r = ring(order);
            let a = build(&r, &a);
            let (shift, defl) = deflation(&a);
            let down = deflate(&a, &shift, &defl).unwrap();
            let up = inflate(&down, &shift, &defl).unwrap();
            prop_assert_eq!(up, a);
        }

        // Polynomials compare equal across orderings after re-sorting.

        #[test]
        fn order_independent_semantics(
            a in raw_terms(),
            b in raw_terms(),
            x in -4i64..=4,
            y in -4i64..=4,
        ) {
            let pt = [Integer::from(x), Integer::from(y)];
            let mut results = Vec::new();
            for order in [MonomialOrder::Lex, MonomialOrder::DegLex, MonomialOrder::DegRevLex] {
                let r = ring(order);
                let prod = build(&r, &a).mul(&build(&r, &b)).unwrap();
                results.push(prod.evaluate(&pt).unwrap());
            }
            prop_assert_eq!(&results[0], &results[1]);
            prop_assert_eq!(&results[1], &results[2]);
        }
    }

    // Gcd properties get fewer, smaller cases; pseudo-remainder
    // coefficients grow quickly.
    fn gcd_terms() -> impl Strategy<Value = Vec<(i64, u64, u64)>> {
        proptest::collection::vec((-6i64..=6, 0u64..3, 0u64..3), 0..4)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn gcd_divides_both(a in gcd_terms(), b in gcd_terms()) {
            let r = ring(MonomialOrder::DegRevLex);
            let (a, b) = (build(&r, &a), build(&r, &b));
            let g = gcd(&a, &b).unwrap();
            if !g.is_zero() {
                prop_assert!(exact_div(&a, &g).is_ok());
                prop_assert!(exact_div(&b, &g).is_ok());
            }
        }

        #[test]
        fn gcd_commutative(a in gcd_terms(), b in gcd_terms()) {
            let r = ring(MonomialOrder::DegRevLex);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert_eq!(gcd(&a, &b).unwrap(), gcd(&b, &a).unwrap());
        }

        #[test]
        fn gcd_detects_common_factor(
            a in gcd_terms(),
            b in gcd_terms(),
            f in gcd_terms(),
        ) {
            let r = ring(MonomialOrder::DegRevLex);
            let (a, b, f) = (build(&r, &a), build(&r, &b), build(&r, &f));
            prop_assume!(!f.is_zero());
            let g = gcd(&a.mul(&f).unwrap(), &b.mul(&f).unwrap()).unwrap();
            // f divides the gcd of its own multiples.
            if !g.is_zero() {
                prop_assert!(exact_div(&g, &f).is_ok());
            }
        }

        #[test]
        fn gcd_zero_operands(a in gcd_terms()) {
            let r = ring(MonomialOrder::DegRevLex);
            let a = build(&r, &a);
            let z = MPoly::zero(&r);
            prop_assert_eq!(gcd(&a, &z).unwrap(), normalize(&a));
            prop_assert_eq!(gcd(&z, &a).unwrap(), normalize(&a));
            prop_assert!(gcd(&z, &z).unwrap().is_zero());
        }

        // gcd(a, b) * lcm(a, b) agrees with a * b up to unit
        // normalization, including when either operand is zero.

        #[test]
        fn gcd_lcm_product_law(a in gcd_terms(), b in gcd_terms()) {
            let r = ring(MonomialOrder::DegRevLex);
            let (a, b) = (build(&r, &a), build(&r, &b));
            let g = gcd(&a, &b).unwrap();
            let l = lcm(&a, &b).unwrap();
            prop_assert_eq!(g.mul(&l).unwrap(), normalize(&a.mul(&b).unwrap()));
        }

        #[test]
        fn lcm_is_common_multiple(a in gcd_terms(), b in gcd_terms()) {
            let r = ring(MonomialOrder::DegRevLex);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assume!(!a.is_zero() && !b.is_zero());
            let l = lcm(&a, &b).unwrap();
            prop_assert!(exact_div(&l, &a).is_ok());
            prop_assert!(exact_div(&l, &b).is_ok());
        }
    }
}
