//! The functor and monad laws, written once over any instance.
//!
//! Each function returns both sides of its law as `(lhs, rhs)`; the property suites
//! compare them with `prop_assert_eq!` so a failure shows both values.

use lawful::{sequence, Filterable, Functor, Monad};

pub type Sides<T> = (T, T);

/// `flat_map(of(a), f) == f(a)`
pub fn left_identity<M: Monad, A: Clone, B>(
    a: A,
    mut f: impl FnMut(A) -> M::Layer<B> + Clone,
) -> Sides<M::Layer<B>> {
    let lhs = M::flat_map(M::of(a.clone()), f.clone());
    let rhs = f(a);
    (lhs, rhs)
}

/// `flat_map(mx, of) == mx`
pub fn right_identity<M: Monad, A>(mx: M::Layer<A>) -> Sides<M::Layer<A>>
where
    M::Layer<A>: Clone,
{
    let lhs = M::flat_map(mx.clone(), |a| M::of(a));
    (lhs, mx)
}

/// `flat_map(flat_map(mx, f), g) == flat_map(mx, |x| flat_map(f(x), g))`
pub fn associativity<M: Monad, A, B, C>(
    mx: M::Layer<A>,
    mut f: impl FnMut(A) -> M::Layer<B> + Clone,
    g: impl FnMut(B) -> M::Layer<C> + Clone,
) -> Sides<M::Layer<C>>
where
    M::Layer<A>: Clone,
{
    let lhs = M::flat_map(M::flat_map(mx.clone(), f.clone()), g.clone());
    let rhs = M::flat_map(mx, move |a| M::flat_map(f(a), g.clone()));
    (lhs, rhs)
}

/// `fmap(fx, id) == fx`
pub fn functor_identity<F: Functor, A>(fx: F::Layer<A>) -> Sides<F::Layer<A>>
where
    F::Layer<A>: Clone,
{
    let lhs = F::fmap(fx.clone(), |x| x);
    (lhs, fx)
}

/// `fmap(fx, |x| g(f(x))) == fmap(fmap(fx, f), g)`
pub fn functor_composition<F: Functor, A, B, C>(
    fx: F::Layer<A>,
    f: impl FnMut(A) -> B + Clone,
    g: impl FnMut(B) -> C + Clone,
) -> Sides<F::Layer<C>>
where
    F::Layer<A>: Clone,
{
    let lhs = {
        let mut f = f.clone();
        let mut g = g.clone();
        F::fmap(fx.clone(), move |x| g(f(x)))
    };
    let rhs = F::fmap(F::fmap(fx, f), g);
    (lhs, rhs)
}

/// `map(mx, f) == flat_map(mx, |x| of(f(x)))`
pub fn map_via_flat_map<M: Monad, A, B>(
    mx: M::Layer<A>,
    mut f: impl FnMut(A) -> B + Clone,
) -> Sides<M::Layer<B>>
where
    M::Layer<A>: Clone,
{
    let lhs = M::map(mx.clone(), f.clone());
    let rhs = M::flat_map(mx, move |a| M::of(f(a)));
    (lhs, rhs)
}

/// `flatten(nested) == flat_map(nested, id)`
pub fn flatten_via_flat_map<M: Monad, A>(
    nested: M::Layer<M::Layer<A>>,
) -> Sides<M::Layer<A>>
where
    M::Layer<M::Layer<A>>: Clone,
{
    let lhs = M::flatten(nested.clone());
    let rhs = M::flat_map(nested, |inner| inner);
    (lhs, rhs)
}

/// `all([]) == of([])`
pub fn all_empty<M: Monad, A>() -> Sides<M::Layer<Vec<A>>>
where
    A: Clone,
    M::Layer<A>: Clone,
{
    let lhs = M::all(Vec::<M::Layer<A>>::new());
    let rhs = M::of(Vec::new());
    (lhs, rhs)
}

/// an instance's `all` agrees with the generic left fold
pub fn all_via_sequence<M: Monad, A>(monads: Vec<M::Layer<A>>) -> Sides<M::Layer<Vec<A>>>
where
    A: Clone,
    M::Layer<A>: Clone,
{
    let lhs = M::all(monads.clone());
    let rhs = sequence::<M, A>(monads);
    (lhs, rhs)
}

/// `filter(mx, p) == flat_map(mx, |x| if p(&x) { of(x) } else { empty() })`
pub fn filter_via_flat_map<M: Filterable, A>(
    mx: M::Layer<A>,
    mut predicate: impl FnMut(&A) -> bool + Clone,
) -> Sides<M::Layer<A>>
where
    M::Layer<A>: Clone,
{
    let lhs = M::filter(mx.clone(), predicate.clone());
    let rhs = M::flat_map(mx, move |a| {
        if predicate(&a) {
            M::of(a)
        } else {
            M::empty()
        }
    });
    (lhs, rhs)
}

/// `find(mx, p) == get(filter(mx, p))`
pub fn find_via_filter<M: Filterable, A>(
    mx: M::Layer<A>,
    predicate: impl FnMut(&A) -> bool + Clone,
) -> Sides<Option<A>>
where
    M::Layer<A>: Clone,
{
    let lhs = M::find(mx.clone(), predicate.clone());
    let rhs = M::get(M::filter(mx, predicate));
    (lhs, rhs)
}
