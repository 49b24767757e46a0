use futures::future::BoxFuture;
use lawful::experimental::{AsyncMonad, Task};
#[cfg(test)]
use proptest::prelude::*;

/// A value that is only available after yielding to the runtime once
pub fn deferred<A: Send + 'static>(a: A) -> BoxFuture<'static, A> {
    Box::pin(async move {
        tokio::task::yield_now().await;
        a
    })
}

/// A family of `i32 -> BoxFuture<i32>` arrows; odd `factor`s resolve immediately, even ones defer
pub fn kleisli(factor: i32) -> impl Fn(i32) -> BoxFuture<'static, i32> + Clone + Send {
    move |x| {
        let out = x.wrapping_mul(factor);
        if factor % 2 == 0 {
            deferred(out)
        } else {
            Task::of(out)
        }
    }
}

/// `x` either already resolved or deferred behind one yield
pub fn layer(x: i32, defer: bool) -> BoxFuture<'static, i32> {
    if defer {
        deferred(x)
    } else {
        Task::of(x)
    }
}

#[cfg(test)]
fn block_on<T>(fut: impl std::future::Future<Output = T>) -> T {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(fut)
}

#[cfg(test)]
proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), k in any::<i32>()) {
        let f = kleisli(k);
        let (lhs, rhs) = block_on(async move {
            (Task::flat_map(Task::of(x), f.clone()).await, f(x).await)
        });
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn right_identity(x in any::<i32>(), defer in any::<bool>()) {
        let lhs = block_on(Task::flat_map(layer(x, defer), |a| Task::of(a)));
        prop_assert_eq!(lhs, x);
    }

    #[test]
    fn functor_identity(x in any::<i32>(), defer in any::<bool>()) {
        let (lhs, rhs) = block_on(async {
            let lhs = Task::map(layer(x, defer), |v| v).await;
            let rhs = layer(x, defer).await;
            (lhs, rhs)
        });
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn functor_composition(x in any::<i32>(), defer in any::<bool>(), a in any::<i32>()) {
        let f = move |v: i32| v.wrapping_mul(a);
        let g = |v: i32| v.to_string();
        let (lhs, rhs) = block_on(async {
            let lhs = Task::map(layer(x, defer), move |v| g(f(v))).await;
            let rhs = Task::map(Task::map(layer(x, defer), f), g).await;
            (lhs, rhs)
        });
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn associativity(x in any::<i32>(), k1 in any::<i32>(), k2 in any::<i32>()) {
        let (f, g) = (kleisli(k1), kleisli(k2));
        let (lhs, rhs) = block_on(async move {
            let lhs = Task::flat_map(Task::flat_map(deferred(x), f.clone()), g.clone()).await;
            let rhs = Task::flat_map(deferred(x), move |a| Task::flat_map(f(a), g)).await;
            (lhs, rhs)
        });
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn map_via_flat_map(x in any::<i32>(), a in any::<i32>()) {
        let (lhs, rhs) = block_on(async {
            let lhs = Task::map(deferred(x), move |v| v.wrapping_add(a)).await;
            let rhs = Task::flat_map(deferred(x), move |v| Task::of(v.wrapping_add(a))).await;
            (lhs, rhs)
        });
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn flatten_via_flat_map(x in any::<i32>()) {
        let (lhs, rhs) = block_on(async {
            let lhs = Task::flatten(deferred(deferred(x))).await;
            let rhs = Task::flat_map(deferred(deferred(x)), |inner| inner).await;
            (lhs, rhs)
        });
        prop_assert_eq!(lhs, rhs);
    }

    // concurrent `all` and the sequential fold resolve to the same ordered values
    #[test]
    fn all_via_sequence(xs in proptest::collection::vec(any::<i32>(), 0..8)) {
        let (all, sequenced) = block_on(async {
            let all = Task::all(xs.iter().copied().map(deferred).collect()).await;
            let sequenced = Task::sequence(xs.iter().copied().map(deferred).collect()).await;
            (all, sequenced)
        });
        prop_assert_eq!(&all, &xs);
        prop_assert_eq!(sequenced, xs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty() {
        let res = block_on(Task::all(Vec::<BoxFuture<'static, i32>>::new()));
        assert_eq!(res, Vec::<i32>::new());
    }
}
