//! [`Monad`] and [`Filterable`] instances for std containers.
//!
//! Each instance is written over the container applied to [`PartiallyApplied`], eg
//! `Option<PartiallyApplied>` is the token for the `Option` monad.

use crate::{Filterable, Monad, PartiallyApplied};

/// Short-circuits on `None`.
impl Monad for Option<PartiallyApplied> {
    type Layer<X> = Option<X>;

    #[inline(always)]
    fn of<A>(a: A) -> Self::Layer<A> {
        Some(a)
    }

    #[inline(always)]
    fn flat_map<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.and_then(f)
    }

    // same result as the derived fold, without cloning partial results
    fn all<A>(monads: impl IntoIterator<Item = Self::Layer<A>>) -> Self::Layer<Vec<A>>
    where
        A: Clone,
        Self::Layer<A>: Clone,
    {
        monads.into_iter().collect()
    }
}

impl Filterable for Option<PartiallyApplied> {
    #[inline(always)]
    fn empty<A>() -> Self::Layer<A> {
        None
    }

    #[inline(always)]
    fn get<A>(input: Self::Layer<A>) -> Option<A> {
        input
    }
}

/// Short-circuits on the first `Err`. Not [`Filterable`]: there is no error to build `empty` from.
impl<E> Monad for Result<PartiallyApplied, E> {
    type Layer<X> = Result<X, E>;

    #[inline(always)]
    fn of<A>(a: A) -> Self::Layer<A> {
        Ok(a)
    }

    #[inline(always)]
    fn flat_map<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.and_then(f)
    }

    fn all<A>(monads: impl IntoIterator<Item = Self::Layer<A>>) -> Self::Layer<Vec<A>>
    where
        A: Clone,
        Self::Layer<A>: Clone,
    {
        monads.into_iter().collect()
    }
}

/// The list monad: `flat_map` concatenates, `all` is the ordered cartesian product.
impl Monad for Vec<PartiallyApplied> {
    type Layer<X> = Vec<X>;

    #[inline(always)]
    fn of<A>(a: A) -> Self::Layer<A> {
        vec![a]
    }

    fn flat_map<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.into_iter().flat_map(f).collect()
    }
}

impl Filterable for Vec<PartiallyApplied> {
    #[inline(always)]
    fn empty<A>() -> Self::Layer<A> {
        Vec::new()
    }

    fn get<A>(input: Self::Layer<A>) -> Option<A> {
        input.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    type OptionM = Option<PartiallyApplied>;
    type ResultM = Result<PartiallyApplied, String>;
    type VecM = Vec<PartiallyApplied>;

    #[test]
    fn option_map() {
        assert_eq!(<OptionM as Monad>::map(Some(3), |x| x + 1), Some(4));
    }

    #[test]
    fn option_flat_map() {
        let f = |x: i32| if x > 0 { Some(x * 2) } else { None };
        assert_eq!(<OptionM as Monad>::flat_map(Some(3), f), Some(6));
        assert_eq!(<OptionM as Monad>::flat_map(Some(-3), f), None);
        assert_eq!(<OptionM as Monad>::flat_map(None::<i32>, Some), None);
    }

    #[test]
    fn option_all() {
        assert_eq!(
            <OptionM as Monad>::all(vec![Some(1), Some(2), Some(3)]),
            Some(vec![1, 2, 3])
        );
        assert_eq!(<OptionM as Monad>::all(vec![Some(1), None, Some(3)]), None);
        assert_eq!(<OptionM as Monad>::all(Vec::<Option<i32>>::new()), Some(vec![]));
    }

    #[test]
    fn option_all_matches_sequence() {
        let inputs = vec![
            vec![Some(1), Some(2), Some(3)],
            vec![Some(1), None, Some(3)],
            vec![None],
            vec![],
        ];
        for input in inputs {
            assert_eq!(
                <OptionM as Monad>::all(input.clone()),
                sequence::<OptionM, _>(input)
            );
        }
    }

    #[test]
    fn option_filter_get() {
        let filtered = <OptionM as Filterable>::filter(Some(5), |x| *x > 10);
        assert_eq!(<OptionM as Filterable>::get(filtered), None);

        let filtered = <OptionM as Filterable>::filter(Some(15), |x| *x > 10);
        assert_eq!(<OptionM as Filterable>::get(filtered), Some(15));
    }

    #[test]
    fn option_flatten() {
        assert_eq!(<OptionM as Monad>::flatten(Some(Some(1))), Some(1));
        assert_eq!(<OptionM as Monad>::flatten(Some(None::<i32>)), None);
        assert_eq!(<OptionM as Monad>::flatten(None::<Option<i32>>), None);
    }

    #[test]
    fn result_all_keeps_first_err() {
        let input: Vec<Result<i32, String>> =
            vec![Ok(1), Err("first".to_string()), Err("second".to_string())];
        assert_eq!(<ResultM as Monad>::all(input.clone()), Err("first".to_string()));
        assert_eq!(sequence::<ResultM, _>(input), Err("first".to_string()));
    }

    #[test]
    fn result_flat_map_short_circuits() {
        let mut calls = 0;
        let res = <ResultM as Monad>::flat_map(Err::<i32, _>("boom".to_string()), |x| {
            calls += 1;
            Ok(x + 1)
        });
        assert_eq!(res, Err("boom".to_string()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn vec_flat_map_concatenates() {
        let res = VecM::flat_map(vec![1, 2, 3], |x| vec![x; x]);
        assert_eq!(res, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn vec_all_is_ordered_product() {
        let res = VecM::all(vec![vec![1, 2], vec![10, 20]]);
        assert_eq!(res, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);

        // an empty element empties the whole product
        assert_eq!(VecM::all(vec![vec![1, 2], vec![]]), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn vec_find_returns_first_match() {
        assert_eq!(VecM::find(vec![1, 12, 15], |x| *x > 10), Some(12));
        assert_eq!(VecM::find(vec![1, 2, 3], |x| *x > 10), None);
    }
}
