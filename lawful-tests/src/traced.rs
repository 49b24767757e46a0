use lawful::PartiallyApplied;
use lawful_trace::Traced;
use proptest::prelude::*;

#[cfg(test)]
use crate::laws;
#[cfg(test)]
use lawful::Monad;
#[cfg(test)]
use lawful_trace::TraceAction;

pub type TracedM = Traced<PartiallyApplied>;

/// A traced value with a few steps and notes already in its log
pub fn arb_traced() -> impl Strategy<Value = Traced<i32>> {
    (any::<i32>(), proptest::collection::vec(("[a-z]{1,3}", any::<bool>()), 0..4)).prop_map(
        |(value, entries)| {
            entries
                .into_iter()
                .fold(Traced::new(value), |acc, (label, is_note)| {
                    if is_note {
                        acc.label(label, "note")
                    } else {
                        acc.fuse(Traced::step(label, value))
                    }
                })
        },
    )
}

/// A family of `i32 -> Traced<i32>` arrows, each recording one step under `label`
pub fn kleisli(label: String, offset: i32) -> impl Fn(i32) -> Traced<i32> + Clone {
    move |x| Traced::step(label.clone(), x.wrapping_add(offset))
}

#[cfg(test)]
proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), label in "[a-z]{1,3}", k in any::<i32>()) {
        let (lhs, rhs) = laws::left_identity::<TracedM, _, _>(x, kleisli(label, k));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(mx in arb_traced()) {
        let (lhs, rhs) = laws::right_identity::<TracedM, _>(mx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(
        mx in arb_traced(),
        (l1, k1) in ("[a-z]{1,3}", any::<i32>()),
        (l2, k2) in ("[a-z]{1,3}", any::<i32>())
    ) {
        let (lhs, rhs) = laws::associativity::<TracedM, _, _, _>(mx, kleisli(l1, k1), kleisli(l2, k2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_identity(fx in arb_traced()) {
        let (lhs, rhs) = laws::functor_identity::<TracedM, _>(fx);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_composition(fx in arb_traced(), a in any::<i32>()) {
        let (lhs, rhs) = laws::functor_composition::<TracedM, _, _, _>(
            fx,
            move |x: i32| x.wrapping_sub(a),
            |x: i32| format!("<{}>", x),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_via_flat_map(mx in arb_traced(), a in any::<i32>()) {
        let (lhs, rhs) = laws::map_via_flat_map::<TracedM, _, _>(mx, move |x: i32| x.wrapping_mul(a));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn flatten_via_flat_map(outer in arb_traced(), inner in arb_traced()) {
        let nested = TracedM::map(outer, move |_| inner.clone());
        let (lhs, rhs) = laws::flatten_via_flat_map::<TracedM, _>(nested);
        prop_assert_eq!(lhs, rhs);
    }

    // values in input order, logs concatenated in input order
    #[test]
    fn all_concatenates_logs(monads in proptest::collection::vec(arb_traced(), 0..5)) {
        let expected_values: Vec<i32> = monads.iter().map(|m| *m.value()).collect();
        let expected_actions: Vec<TraceAction> = monads.iter().flat_map(|m| m.actions().to_vec()).collect();

        let (values, actions) = TracedM::all(monads).into_parts();
        prop_assert_eq!(values, expected_values);
        prop_assert_eq!(actions, expected_actions);
    }

    #[test]
    fn all_via_sequence(monads in proptest::collection::vec(arb_traced(), 0..5)) {
        let (lhs, rhs) = laws::all_via_sequence::<TracedM, _>(monads);
        prop_assert_eq!(lhs, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty() {
        let (lhs, rhs) = laws::all_empty::<TracedM, i32>();
        assert_eq!(lhs, rhs);
        assert!(lhs.actions().is_empty());
    }
}
