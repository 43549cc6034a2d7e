//! Joining independent fetches before a dependent step runs.
//!
//! Every branch runs on its own scoped thread. The join returns only after
//! all branches finished; the first failing branch (in submission order)
//! fails the whole join, and a continuation never runs on failure.

use anyhow::{Context, Result};

use crate::remote::ApiError;

/// Runs two fetches concurrently and returns both results.
pub fn join2<A, B, FA, FB>(fa: FA, fb: FB) -> Result<(A, B)>
where
    A: Send,
    B: Send,
    FA: FnOnce() -> Result<A> + Send,
    FB: FnOnce() -> Result<B> + Send,
{
    std::thread::scope(|s| {
        let ha = s.spawn(fa);
        let hb = s.spawn(fb);
        let a = ha.join().map_err(|_| ApiError::BranchPanicked { branch: 0 });
        let b = hb.join().map_err(|_| ApiError::BranchPanicked { branch: 1 });
        let a = a?.context("preload branch 0")?;
        let b = b?.context("preload branch 1")?;
        Ok((a, b))
    })
}

/// Runs `fetches` concurrently; results keep submission order.
pub fn join_all<T, F>(fetches: Vec<F>) -> Result<Vec<T>>
where
    T: Send,
    F: FnOnce() -> Result<T> + Send,
{
    std::thread::scope(|s| {
        let handles = fetches.into_iter().map(|f| s.spawn(f)).collect::<Vec<_>>();
        // Join every handle before inspecting results so no branch outlives
        // the error path.
        let joined = handles.into_iter().map(|h| h.join()).collect::<Vec<_>>();
        let mut out = Vec::with_capacity(joined.len());
        for (branch, res) in joined.into_iter().enumerate() {
            let res = res.map_err(|_| ApiError::BranchPanicked { branch })?;
            out.push(res.with_context(|| format!("preload branch {}", branch))?);
        }
        Ok(out)
    })
}

/// Joins two fetches, then hands both results to `then` exactly once.
pub fn preload2<A, B, R, FA, FB, C>(fa: FA, fb: FB, then: C) -> Result<R>
where
    A: Send,
    B: Send,
    FA: FnOnce() -> Result<A> + Send,
    FB: FnOnce() -> Result<B> + Send,
    C: FnOnce(A, B) -> Result<R>,
{
    let (a, b) = join2(fa, fb)?;
    then(a, b)
}

#[cfg(test)]
#[path = "../tests/forms/preload_tests.rs"]
mod tests;
