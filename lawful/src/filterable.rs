use crate::monad::Monad;

/// A [`Monad`] refinement for layers that have an empty value and can expose a held value.
///
/// `filter` and `find` are derived:
///
/// ```text
/// filter(mx, p) == flat_map(mx, |x| if p(&x) { of(x) } else { empty() })
/// find(mx, p)   == get(filter(mx, p))
/// ```
///
/// Layers with no natural emptiness (eg `Result<_, E>`, which would need to invent an
/// error) implement [`Monad`] only.
///
/// ```rust
/// # use lawful::{Filterable, PartiallyApplied};
/// type OptionM = Option<PartiallyApplied>;
///
/// assert_eq!(<OptionM as Filterable>::find(Some(5), |x| *x > 10), None);
/// assert_eq!(<OptionM as Filterable>::find(Some(50), |x| *x > 10), Some(50));
/// ```
pub trait Filterable: Monad {
    /// The layer holding no values
    fn empty<A>() -> Self::Layer<A>;

    /// Extract a held value, if any. For multi-valued layers this is the first one.
    fn get<A>(input: Self::Layer<A>) -> Option<A>;

    /// Keep only the values for which `predicate` holds
    fn filter<A>(input: Self::Layer<A>, mut predicate: impl FnMut(&A) -> bool) -> Self::Layer<A> {
        Self::flat_map(input, move |a| {
            if predicate(&a) {
                Self::of(a)
            } else {
                Self::empty()
            }
        })
    }

    /// The first held value for which `predicate` holds
    fn find<A>(input: Self::Layer<A>, predicate: impl FnMut(&A) -> bool) -> Option<A> {
        Self::get(Self::filter(input, predicate))
    }
}
