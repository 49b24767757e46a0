use lawful::PartiallyApplied;
use proptest::prelude::*;

#[cfg(test)]
use crate::laws;
#[cfg(test)]
use lawful::{Filterable, Monad};

pub type VecM = Vec<PartiallyApplied>;

// kept short: associativity and `all` multiply lengths
pub fn arb_list() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50..50i32, 0..4)
}

/// A family of `i32 -> Vec<i32>` arrows producing between 0 and `modulus - 1` values
pub fn kleisli(modulus: i32, step: i32) -> impl Fn(i32) -> Vec<i32> + Clone {
    move |x| {
        (0..x.rem_euclid(modulus))
            .map(|i| x.wrapping_add(i.wrapping_mul(step)))
            .collect()
    }
}

/// Ordered cartesian product, computed directly
pub fn product(lists: &[Vec<i32>]) -> Vec<Vec<i32>> {
    let mut acc: Vec<Vec<i32>> = vec![vec![]];
    for list in lists {
        acc = acc
            .into_iter()
            .flat_map(|prefix| {
                list.iter().map(move |x| {
                    let mut next = prefix.clone();
                    next.push(*x);
                    next
                })
            })
            .collect();
    }
    acc
}

#[cfg(test)]
proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), m in 1..4i32, k in any::<i32>()) {
        let (lhs, rhs) = laws::left_identity::<VecM, _, _>(x, kleisli(m, k));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(mx in arb_list()) {
        let (lhs, rhs) = laws::right_identity::<VecM, _>(mx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(
        mx in arb_list(),
        (m1, k1) in (1..4i32, any::<i32>()),
        (m2, k2) in (1..4i32, any::<i32>())
    ) {
        let (lhs, rhs) = laws::associativity::<VecM, _, _, _>(mx, kleisli(m1, k1), kleisli(m2, k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_identity(fx in arb_list()) {
        let (lhs, rhs) = laws::functor_identity::<VecM, _>(fx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_composition(fx in arb_list(), a in any::<i32>()) {
        let (lhs, rhs) = laws::functor_composition::<VecM, _, _, _>(
            fx,
            move |x: i32| x.wrapping_add(a),
            |x: i32| (x % 7, x),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_via_flat_map(mx in arb_list(), a in any::<i32>()) {
        let (lhs, rhs) = laws::map_via_flat_map::<VecM, _, _>(mx, move |x: i32| x.wrapping_mul(a));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn flatten_via_flat_map(nested in proptest::collection::vec(arb_list(), 0..4)) {
        let (lhs, rhs) = laws::flatten_via_flat_map::<VecM, _>(nested.clone());
        prop_assert_eq!(&lhs, &rhs);
        prop_assert_eq!(lhs, nested.concat());
    }

    #[test]
    fn all_is_ordered_product(lists in proptest::collection::vec(arb_list(), 0..4)) {
        let expected = product(&lists);
        prop_assert_eq!(<VecM as Monad>::all(lists), expected);
    }

    #[test]
    fn filter_via_flat_map(mx in arb_list(), threshold in -50..50i32) {
        let (lhs, rhs) = laws::filter_via_flat_map::<VecM, _>(mx.clone(), move |x: &i32| *x > threshold);
        prop_assert_eq!(&lhs, &rhs);
        prop_assert_eq!(lhs, mx.into_iter().filter(|x| *x > threshold).collect::<Vec<_>>());
    }

    #[test]
    fn find_via_filter(mx in arb_list(), threshold in -50..50i32) {
        let (lhs, rhs) = laws::find_via_filter::<VecM, _>(mx.clone(), move |x: &i32| *x > threshold);
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(<VecM as Filterable>::find(mx.clone(), |x| *x > threshold), mx.into_iter().find(|x| *x > threshold));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty() {
        let (lhs, rhs) = laws::all_empty::<VecM, i32>();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn product_of_known_lists() {
        let lists = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(
            <VecM as Monad>::all(lists),
            vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
        );
    }
}
