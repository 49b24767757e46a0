use lawful::PartiallyApplied;
use proptest::prelude::*;

#[cfg(test)]
use crate::laws;
#[cfg(test)]
use lawful::{Filterable, Monad};

pub type OptionM = Option<PartiallyApplied>;

pub fn arb_option() -> impl Strategy<Value = Option<i32>> {
    proptest::option::of(any::<i32>())
}

/// A family of `i32 -> Option<i32>` arrows: multiples of `modulus` map to `None`
pub fn kleisli(modulus: i32, factor: i32) -> impl Fn(i32) -> Option<i32> + Clone {
    move |x| {
        if x.rem_euclid(modulus) == 0 {
            None
        } else {
            Some(x.wrapping_mul(factor))
        }
    }
}

#[cfg(test)]
proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), m in 1..5i32, k in any::<i32>()) {
        let (lhs, rhs) = laws::left_identity::<OptionM, _, _>(x, kleisli(m, k));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(mx in arb_option()) {
        let (lhs, rhs) = laws::right_identity::<OptionM, _>(mx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(
        mx in arb_option(),
        (m1, k1) in (1..5i32, any::<i32>()),
        (m2, k2) in (1..5i32, any::<i32>())
    ) {
        let (lhs, rhs) = laws::associativity::<OptionM, _, _, _>(mx, kleisli(m1, k1), kleisli(m2, k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_identity(fx in arb_option()) {
        let (lhs, rhs) = laws::functor_identity::<OptionM, _>(fx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_composition(fx in arb_option(), a in any::<i32>(), b in any::<i32>()) {
        let (lhs, rhs) = laws::functor_composition::<OptionM, _, _, _>(
            fx,
            move |x: i32| x.wrapping_add(a),
            move |x: i32| x.to_string().len() as i64 * b as i64,
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_via_flat_map(mx in arb_option(), a in any::<i32>()) {
        let (lhs, rhs) = laws::map_via_flat_map::<OptionM, _, _>(mx, move |x: i32| x.wrapping_sub(a));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn flatten_via_flat_map(nested in proptest::option::of(arb_option())) {
        let (lhs, rhs) = laws::flatten_via_flat_map::<OptionM, _>(nested);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn all_via_sequence(monads in proptest::collection::vec(arb_option(), 0..8)) {
        let (lhs, rhs) = laws::all_via_sequence::<OptionM, _>(monads);
        prop_assert_eq!(lhs, rhs);
    }

    // unwraps to the ordered values, or None as soon as any element is None
    #[test]
    fn all_unwraps_or_short_circuits(monads in proptest::collection::vec(arb_option(), 0..8)) {
        let expected: Option<Vec<i32>> = if monads.iter().all(Option::is_some) {
            Some(monads.iter().flatten().copied().collect())
        } else {
            None
        };
        prop_assert_eq!(<OptionM as Monad>::all(monads), expected);
    }

    #[test]
    fn filter_via_flat_map(mx in arb_option(), threshold in any::<i32>()) {
        let (lhs, rhs) = laws::filter_via_flat_map::<OptionM, _>(mx, move |x: &i32| *x > threshold);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn find_via_filter(mx in arb_option(), threshold in any::<i32>()) {
        let (lhs, rhs) = laws::find_via_filter::<OptionM, _>(mx, move |x: &i32| *x > threshold);
        prop_assert_eq!(lhs, rhs);
    }

    // a value survives filtering exactly when the predicate holds for it
    #[test]
    fn find_keeps_only_matching(x in any::<i32>(), threshold in any::<i32>()) {
        let found = <OptionM as Filterable>::find(Some(x), |v| *v > threshold);
        prop_assert_eq!(found, if x > threshold { Some(x) } else { None });
        prop_assert_eq!(<OptionM as Filterable>::find(None, |v: &i32| *v > threshold), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty() {
        let (lhs, rhs) = laws::all_empty::<OptionM, i32>();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs, Some(vec![]));
    }

    #[test]
    fn end_to_end() {
        assert_eq!(<OptionM as Monad>::map(Some(3), |x| x + 1), Some(4));
        assert_eq!(
            <OptionM as Monad>::flat_map(Some(3), |x| if x > 0 { Some(x * 2) } else { None }),
            Some(6)
        );
        assert_eq!(<OptionM as Monad>::flat_map(None::<i32>, Some), None);
        assert_eq!(
            <OptionM as Monad>::all(vec![Some(1), Some(2), Some(3)]),
            Some(vec![1, 2, 3])
        );
        assert_eq!(<OptionM as Monad>::all(vec![Some(1), None, Some(3)]), None);
        assert_eq!(
            <OptionM as Filterable>::get(<OptionM as Filterable>::filter(Some(5), |x| *x > 10)),
            None
        );
    }
}
