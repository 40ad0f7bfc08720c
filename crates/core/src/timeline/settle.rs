//! Settle-all combinators for independent, fallible fetches
//!
//! Every fetch the aggregator issues goes through one of these helpers. A
//! failed fetch is logged and collapses to "no result"; it never cancels its
//! siblings and never propagates.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;

use futures::future::join_all;
use salestrail_domain::Result;
use tracing::warn;

/// Await one fetch, logging and discarding its error.
pub async fn settle<T, F>(fetch: &'static str, key: impl Display, future: F) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match future.await {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                fetch,
                key = %key,
                error_kind = err.label(),
                error = %err,
                "fetch failed, continuing without it"
            );
            None
        }
    }
}

/// Await one fetch, substituting the type's default on failure.
pub async fn settle_or_default<T, F>(fetch: &'static str, key: impl Display, future: F) -> T
where
    T: Default,
    F: Future<Output = Result<T>>,
{
    settle(fetch, key, future).await.unwrap_or_default()
}

/// Run one fetch per key concurrently and index the settled results by key.
///
/// Keys whose fetch failed are absent from the map. Completion order is
/// irrelevant: each result travels with the key that produced it.
pub async fn settle_keyed<K, T, F, Fut>(
    fetch: &'static str,
    keys: impl IntoIterator<Item = K>,
    mut make: F,
) -> HashMap<K, T>
where
    K: Copy + Eq + Hash + Display,
    F: FnMut(K) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let pending = keys.into_iter().map(|key| {
        let future = make(key);
        async move { (key, settle(fetch, key, future).await) }
    });

    join_all(pending)
        .await
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use salestrail_domain::SalesTrailError;

    use super::*;

    #[tokio::test]
    async fn failure_becomes_default() {
        let failed: Vec<u8> = settle_or_default("history", 1, async {
            Err(SalesTrailError::Network("connection reset".into()))
        })
        .await;
        assert!(failed.is_empty());

        let ok = settle("history", 1, async { Ok::<_, SalesTrailError>(vec![1_u8]) }).await;
        assert_eq!(ok, Some(vec![1]));
    }

    #[tokio::test]
    async fn keyed_results_skip_failures_without_cancelling_siblings() {
        let results = settle_keyed("payments", [1_i64, 2, 3], |key| async move {
            if key == 2 {
                Err(SalesTrailError::Http { status: 500, message: "boom".into() })
            } else {
                Ok(key * 10)
            }
        })
        .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(&1), Some(&10));
        assert_eq!(results.get(&2), None);
        assert_eq!(results.get(&3), Some(&30));
    }
}
