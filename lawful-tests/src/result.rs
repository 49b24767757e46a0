use lawful::PartiallyApplied;
use proptest::prelude::*;

#[cfg(test)]
use crate::laws;
#[cfg(test)]
use lawful::Monad;

pub type ResultM = Result<PartiallyApplied, String>;

pub fn arb_result() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok::<i32, String>),
        "[a-z]{1,4}".prop_map(Err::<i32, String>),
    ]
}

/// A family of `i32 -> Result<i32, String>` arrows: multiples of `modulus` fail
pub fn kleisli(modulus: i32, factor: i32) -> impl Fn(i32) -> Result<i32, String> + Clone {
    move |x| {
        if x.rem_euclid(modulus) == 0 {
            Err(format!("{} is a multiple of {}", x, modulus))
        } else {
            Ok(x.wrapping_mul(factor))
        }
    }
}

#[cfg(test)]
proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), m in 1..5i32, k in any::<i32>()) {
        let (lhs, rhs) = laws::left_identity::<ResultM, _, _>(x, kleisli(m, k));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(mx in arb_result()) {
        let (lhs, rhs) = laws::right_identity::<ResultM, _>(mx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(
        mx in arb_result(),
        (m1, k1) in (1..5i32, any::<i32>()),
        (m2, k2) in (1..5i32, any::<i32>())
    ) {
        let (lhs, rhs) = laws::associativity::<ResultM, _, _, _>(mx, kleisli(m1, k1), kleisli(m2, k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_identity(fx in arb_result()) {
        let (lhs, rhs) = laws::functor_identity::<ResultM, _>(fx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_composition(fx in arb_result(), a in any::<i32>()) {
        let (lhs, rhs) = laws::functor_composition::<ResultM, _, _, _>(
            fx,
            move |x: i32| x.wrapping_mul(a),
            |x: i32| x.is_positive(),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_via_flat_map(mx in arb_result(), a in any::<i32>()) {
        let (lhs, rhs) = laws::map_via_flat_map::<ResultM, _, _>(mx, move |x: i32| x ^ a);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn flatten_via_flat_map(
        nested in prop_oneof![
            arb_result().prop_map(Ok::<Result<i32, String>, String>),
            "[a-z]{1,4}".prop_map(Err::<Result<i32, String>, String>),
        ]
    ) {
        let (lhs, rhs) = laws::flatten_via_flat_map::<ResultM, _>(nested);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn all_via_sequence(monads in proptest::collection::vec(arb_result(), 0..8)) {
        let (lhs, rhs) = laws::all_via_sequence::<ResultM, _>(monads);
        prop_assert_eq!(lhs, rhs);
    }

    // the first error wins, later ones are never looked at
    #[test]
    fn all_reports_first_err(monads in proptest::collection::vec(arb_result(), 0..8)) {
        let expected = match monads.iter().find_map(|m| m.as_ref().err()) {
            Some(e) => Err(e.clone()),
            None => Ok(monads.iter().filter_map(|m| m.as_ref().ok()).copied().collect::<Vec<_>>()),
        };
        prop_assert_eq!(<ResultM as Monad>::all(monads), expected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty() {
        let (lhs, rhs) = laws::all_empty::<ResultM, i32>();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs, Ok(vec![]));
    }
}
