use crate::monad::Monad;

/// A structure-preserving `fmap` over some layer type `Layer<X>`.
///
/// # Laws
///
/// For every `fx` and functions `f`, `g`:
///
/// ```text
/// fmap(fx, |x| x) == fx
/// fmap(fx, |x| g(f(x))) == fmap(fmap(fx, f), g)
/// ```
///
/// Nothing checks these at runtime; they're exercised by property tests.
///
/// # Implementing this trait
///
/// Every [`Monad`] is already a `Functor`: `fmap` is derived from `flat_map` and `of`.
/// Implement this trait directly only for layers that cannot be monads.
///
/// Rust does not allow implementing a trait for a partially applied type. That is,
/// we can implement a trait for `Labelled<usize>` but not for just `Labelled`.
/// The convention is to implement it for `Labelled<PartiallyApplied>`, using
/// the uninhabited [`PartiallyApplied`] marker as the hole:
///
/// ```rust
/// # use lawful::{Functor, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// struct Labelled<A> {
///     label: &'static str,
///     value: A,
/// }
///
/// impl Functor for Labelled<PartiallyApplied> {
///     type Layer<X> = Labelled<X>;
///
///     fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
///         Labelled {
///             label: input.label,
///             value: f(input.value),
///         }
///     }
/// }
///
/// let fx = Labelled { label: "count", value: 1 };
/// let mapped = Labelled::<PartiallyApplied>::fmap(fx, |n| n + 10);
///
/// assert_eq!(mapped, Labelled { label: "count", value: 11 });
/// ```
pub trait Functor {
    /// the layer type that is mapped over by `fmap`
    type Layer<X>;

    /// Apply some function `f` to each element inside a layer
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B>;
}

impl<M: Monad> Functor for M {
    type Layer<X> = <M as Monad>::Layer<X>;

    #[inline(always)]
    fn fmap<A, B>(input: <M as Monad>::Layer<A>, f: impl FnMut(A) -> B) -> <M as Monad>::Layer<B> {
        M::map(input, f)
    }
}

/// An uninhabited type used to define [`Functor`] and [`Monad`] instances for partially-applied types.
///
/// For example: the `Monad` instance for `Option<A>` cannot be written over the
/// partially-applied type `Option`, so instead we write it over `Option<PartiallyApplied>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartiallyApplied {}
