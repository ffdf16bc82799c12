//! Fan-out/fan-in combinators.
//!
//! Every branch is started together and the results are joined
//! positionally: output index `i` always belongs to input task `i`, no
//! matter which branch finished first. The combinators never short-circuit;
//! what to do with a failed branch is decided by the caller, either by
//! substituting a fallback with [`isolate`] or by propagating with `?`.

use std::future::Future;

/// Run all tasks concurrently and return every outcome in input order.
pub async fn settle_all<I, F, T, E>(tasks: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    futures::future::join_all(tasks).await
}

/// Run two heterogeneous tasks concurrently and return both outcomes.
pub async fn settle_pair<A, B, TA, TB, E>(a: A, b: B) -> (Result<TA, E>, Result<TB, E>)
where
    A: Future<Output = Result<TA, E>>,
    B: Future<Output = Result<TB, E>>,
{
    futures::join!(a, b)
}

/// Replace every failed outcome with a fallback value, keeping positions.
///
/// `on_error` receives the branch index and its error, so callers can log
/// which branch failed before the error is dropped.
pub fn isolate<T, E>(
    outcomes: Vec<Result<T, E>>,
    mut on_error: impl FnMut(usize, E) -> T,
) -> Vec<T> {
    outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| match outcome {
            Ok(value) => value,
            Err(err) => on_error(index, err),
        })
        .collect()
}
