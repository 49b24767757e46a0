/// A layer type supporting `of` (lift a value) and `flat_map` (sequence a dependent computation).
///
/// # Laws
///
/// For every `x`, `mx` and functions `f`, `g`:
///
/// ```text
/// left identity:  flat_map(of(x), f) == f(x)
/// right identity: flat_map(mx, of) == mx
/// associativity:  flat_map(flat_map(mx, f), g) == flat_map(mx, |x| flat_map(f(x), g))
/// ```
///
/// Everything else (`map`, `flatten`, `all`) is derived from those two operations.
/// Implementations may override a derived operation for speed, but the override
/// must agree with the derivation.
///
/// # Implementing this trait
///
/// As with [`crate::Functor`], the trait is implemented for a token type, usually
/// the container applied to [`crate::PartiallyApplied`]:
///
/// ```rust
/// # use lawful::{Monad, PartiallyApplied};
/// #[derive(Clone, Debug, PartialEq, Eq)]
/// enum Maybe<A> {
///     Just(A),
///     Nothing,
/// }
///
/// impl Monad for Maybe<PartiallyApplied> {
///     type Layer<X> = Maybe<X>;
///
///     fn of<A>(a: A) -> Self::Layer<A> {
///         Maybe::Just(a)
///     }
///
///     fn flat_map<A, B>(
///         input: Self::Layer<A>,
///         mut f: impl FnMut(A) -> Self::Layer<B>,
///     ) -> Self::Layer<B> {
///         match input {
///             Maybe::Just(a) => f(a),
///             Maybe::Nothing => Maybe::Nothing,
///         }
///     }
/// }
///
/// type M = Maybe<PartiallyApplied>;
///
/// assert_eq!(M::map(Maybe::Just(3), |x| x + 1), Maybe::Just(4));
/// assert_eq!(M::flatten(Maybe::Just(Maybe::Just(5))), Maybe::Just(5));
/// assert_eq!(
///     M::all(vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)]),
///     Maybe::Just(vec![1, 2, 3])
/// );
/// assert_eq!(M::all(vec![Maybe::Just(1), Maybe::Nothing]), Maybe::Nothing);
/// ```
///
/// Tokens built over std types (`Option`, `Result`) share names with inherent methods,
/// so call them with fully qualified syntax:
///
/// ```rust
/// # use lawful::{Monad, PartiallyApplied};
/// type OptionM = Option<PartiallyApplied>;
///
/// let doubled = <OptionM as Monad>::flat_map(Some(3), |x| if x > 0 { Some(x * 2) } else { None });
/// assert_eq!(doubled, Some(6));
/// ```
pub trait Monad {
    /// the layer type produced by `of` and sequenced by `flat_map`
    type Layer<X>;

    /// Lift a single value into a layer
    fn of<A>(a: A) -> Self::Layer<A>;

    /// Apply `f` to each value held by `input`, flattening the resulting layers into one.
    ///
    /// `f` is `FnMut` because multi-valued layers (eg `Vec`) call it once per element.
    fn flat_map<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>)
        -> Self::Layer<B>;

    /// `map` derived as `flat_map(input, |a| of(f(a)))`
    fn map<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
        Self::flat_map(input, move |a| Self::of(f(a)))
    }

    /// Collapse one level of nesting
    fn flatten<A>(nested: Self::Layer<Self::Layer<A>>) -> Self::Layer<A> {
        Self::flat_map(nested, |inner| inner)
    }

    /// Combine an ordered sequence of layers into one layer holding the ordered values.
    ///
    /// Defaults to [`sequence`]. Short-circuiting (or the lack of it) is inherited from `flat_map`.
    fn all<A>(monads: impl IntoIterator<Item = Self::Layer<A>>) -> Self::Layer<Vec<A>>
    where
        A: Clone,
        Self::Layer<A>: Clone,
    {
        sequence::<Self, A>(monads)
    }
}

/// The generic `all`: a left fold starting from the first layer mapped to a one-element
/// vec, appending each subsequent layer's value via `flat_map` and `map`.
///
/// An empty input yields `of(vec![])`.
///
/// Each layer is cloned once per value the accumulator yields, and each partial result
/// is cloned before it is extended, so multi-valued layers pay for every combination.
pub fn sequence<M: Monad + ?Sized, A>(
    monads: impl IntoIterator<Item = M::Layer<A>>,
) -> M::Layer<Vec<A>>
where
    A: Clone,
    M::Layer<A>: Clone,
{
    let mut monads = monads.into_iter();

    let first = match monads.next() {
        Some(first) => first,
        None => return M::of(Vec::new()),
    };

    monads.fold(M::map(first, |x| vec![x]), |acc, monad| {
        M::flat_map(acc, move |items: Vec<A>| {
            M::map(monad.clone(), move |item| {
                let mut items = items.clone();
                items.push(item);
                items
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartiallyApplied;

    // minimal instance with no overrides, so every derived op is the default one
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Id<A>(A);

    impl Monad for Id<PartiallyApplied> {
        type Layer<X> = Id<X>;

        fn of<A>(a: A) -> Self::Layer<A> {
            Id(a)
        }

        fn flat_map<A, B>(
            input: Self::Layer<A>,
            mut f: impl FnMut(A) -> Self::Layer<B>,
        ) -> Self::Layer<B> {
            f(input.0)
        }
    }

    type IdM = Id<PartiallyApplied>;

    #[test]
    fn derived_map() {
        assert_eq!(IdM::map(Id(3), |x| x + 1), Id(4));
    }

    #[test]
    fn derived_flatten() {
        assert_eq!(IdM::flatten(Id(Id("x"))), Id("x"));
    }

    #[test]
    fn all_empty_is_of_empty_vec() {
        assert_eq!(IdM::all(Vec::<Id<u8>>::new()), Id(Vec::new()));
    }

    #[test]
    fn all_preserves_order() {
        assert_eq!(IdM::all(vec![Id(1), Id(2), Id(3)]), Id(vec![1, 2, 3]));
    }

    #[test]
    fn sequence_accepts_any_iterator() {
        let res = sequence::<IdM, _>((0..4).map(Id));
        assert_eq!(res, Id(vec![0, 1, 2, 3]));
    }
}
