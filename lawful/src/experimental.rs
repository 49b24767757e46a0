//! Deferred computations as monads.
//!
//! Boxing a future needs `Send + 'a` on everything it captures, which [`crate::Monad`]'s
//! unbounded type parameters can't promise, so deferred layers get their own contract
//! with the same operations and laws.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::PartiallyApplied;

/// [`crate::Monad`] for layers that hold `Send + 'a` values, eg boxed futures.
///
/// `flat_map` is where suspension is chained: the continuation runs once, after the
/// input resolves. Laws are the same as for [`crate::Monad`], compared on the awaited values.
pub trait AsyncMonad {
    /// the deferred layer produced by `of` and sequenced by `flat_map`
    type Layer<'a, X: Send + 'a>: Send + 'a;

    /// Lift a single, already available value into a layer
    fn of<'a, A: Send + 'a>(a: A) -> Self::Layer<'a, A>;

    /// Run `f` on the value once `input` resolves, then wait for the layer it returns
    fn flat_map<'a, A: Send + 'a, B: Send + 'a>(
        input: Self::Layer<'a, A>,
        f: impl FnOnce(A) -> Self::Layer<'a, B> + Send + 'a,
    ) -> Self::Layer<'a, B>;

    /// `map` derived as `flat_map(input, |a| of(f(a)))`
    fn map<'a, A: Send + 'a, B: Send + 'a>(
        input: Self::Layer<'a, A>,
        f: impl FnOnce(A) -> B + Send + 'a,
    ) -> Self::Layer<'a, B> {
        Self::flat_map(input, move |a| Self::of(f(a)))
    }

    /// Collapse one level of deferral
    fn flatten<'a, A: Send + 'a>(
        nested: Self::Layer<'a, Self::Layer<'a, A>>,
    ) -> Self::Layer<'a, A> {
        Self::flat_map(nested, |inner| inner)
    }

    /// The sequential left fold: each layer starts only after the previous one resolved.
    fn sequence<'a, A: Send + 'a>(monads: Vec<Self::Layer<'a, A>>) -> Self::Layer<'a, Vec<A>> {
        let mut monads = monads.into_iter();

        let first = match monads.next() {
            Some(first) => first,
            None => return Self::of(Vec::new()),
        };

        monads.fold(Self::map(first, |x| vec![x]), |acc, monad| {
            Self::flat_map(acc, move |mut items: Vec<A>| {
                Self::map(monad, move |item| {
                    items.push(item);
                    items
                })
            })
        })
    }

    /// Combine layers into one holding the ordered values. Defaults to [`AsyncMonad::sequence`];
    /// instances may run the layers concurrently as long as the result order is kept.
    fn all<'a, A: Send + 'a>(monads: Vec<Self::Layer<'a, A>>) -> Self::Layer<'a, Vec<A>> {
        Self::sequence(monads)
    }
}

/// Token for the boxed future monad, `Layer<'a, X> = BoxFuture<'a, X>`
pub type Task = BoxFuture<'static, PartiallyApplied>;

impl AsyncMonad for BoxFuture<'static, PartiallyApplied> {
    type Layer<'a, X: Send + 'a> = BoxFuture<'a, X>;

    fn of<'a, A: Send + 'a>(a: A) -> Self::Layer<'a, A> {
        futures::future::ready(a).boxed()
    }

    fn flat_map<'a, A: Send + 'a, B: Send + 'a>(
        input: Self::Layer<'a, A>,
        f: impl FnOnce(A) -> Self::Layer<'a, B> + Send + 'a,
    ) -> Self::Layer<'a, B> {
        async move { f(input.await).await }.boxed()
    }

    // polls every input concurrently on the current task; join_all keeps input order
    fn all<'a, A: Send + 'a>(monads: Vec<Self::Layer<'a, A>>) -> Self::Layer<'a, Vec<A>> {
        futures::future::join_all(monads).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    // `FutureExt::map` is also in scope for `Task`, hence the qualified paths
    fn of<A: Send + 'static>(a: A) -> BoxFuture<'static, A> {
        <Task as AsyncMonad>::of(a)
    }

    #[tokio::test]
    async fn map_and_flat_map() {
        let res = <Task as AsyncMonad>::map(of(3), |x| x + 1).await;
        assert_eq!(res, 4);

        let res = <Task as AsyncMonad>::flat_map(of(3), |x| of(x * 2)).await;
        assert_eq!(res, 6);
    }

    #[tokio::test]
    async fn flatten_awaits_both_levels() {
        let nested = of(of("inner"));
        assert_eq!(<Task as AsyncMonad>::flatten(nested).await, "inner");
    }

    #[tokio::test]
    async fn all_keeps_input_order() {
        let empty: Vec<BoxFuture<'static, u8>> = Vec::new();
        assert_eq!(<Task as AsyncMonad>::all(empty).await, Vec::<u8>::new());

        let res = <Task as AsyncMonad>::all(vec![of(1), of(2), of(3)]).await;
        assert_eq!(res, vec![1, 2, 3]);

        let res = <Task as AsyncMonad>::sequence(vec![of(1), of(2), of(3)]).await;
        assert_eq!(res, vec![1, 2, 3]);
    }

    // the first layer can only resolve once the second one has run, which
    // requires the inputs to be polled concurrently
    #[tokio::test]
    async fn all_runs_layers_concurrently() {
        let (tx, rx) = oneshot::channel::<i32>();

        let waits = async move { rx.await.unwrap_or(-1) }.boxed();
        let sends = async move {
            tx.send(2).ok();
            1
        }
        .boxed();

        let res = <Task as AsyncMonad>::all(vec![waits, sends]).await;
        assert_eq!(res, vec![2, 1]);
    }
}
