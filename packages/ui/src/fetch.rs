//! Remote collection loading.
//!
//! [`use_remote_collection`] is the read path of every listing screen: it
//! serves cached rows when they are fresh, fetches otherwise, re-runs when
//! the cache entry is invalidated by a mutation, and keeps a background
//! refresh loop going while the consuming component is mounted. Navigating
//! away drops the loop with the component scope; in-flight reads are simply
//! abandoned (they are idempotent and side-effect free).

use dioxus::prelude::*;
use std::future::Future;

use api::{ApiClient, ApiError, LocateRequest, WorkOrder};

use crate::cache::{keys, CollectionCache, REFRESH_INTERVAL_SECS};
use crate::time::{now_secs, sleep_secs};

/// Live view of one remote collection. All fields are signals, so the
/// handle itself is `Copy` and can be moved into event handlers freely.
pub struct RemoteCollection<T: 'static> {
    pub items: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

// Hand-written so the `Copy`/`Clone` bounds don't demand `T: Copy`: every
// field is a `Signal`, which is `Copy` for any `T: 'static`.
impl<T: 'static> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteCollection<T> {}

// Signal identity comparison, so handles can travel through props.
impl<T: 'static> PartialEq for RemoteCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.loading == other.loading && self.error == other.error
    }
}

/// Subscribe to the remote collection behind `cache_key`.
///
/// Requires a `Signal<CollectionCache<T>>` in context (see
/// [`crate::AppProviders`]). On a fetch failure the previously loaded rows
/// are kept and the error is recorded for the screen to surface; malformed
/// payloads therefore render as whatever was last known good — or an empty
/// collection — while the decode error stays visible in the log and in
/// `error`.
pub fn use_remote_collection<T, F, Fut>(cache_key: &'static str, fetch: F) -> RemoteCollection<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let mut cache = use_context::<Signal<CollectionCache<T>>>();
    let mut items = use_signal(Vec::<T>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Initial load. Reading the cache here subscribes the loader, so an
    // invalidation (or a background store) re-runs it; a fresh entry makes
    // the re-run settle without a request.
    let initial_fetch = fetch.clone();
    let _loader = use_resource(move || {
        let generation = cache.read().generation(cache_key);
        let fetch = initial_fetch.clone();
        async move {
            let _ = generation;
            if let Some(cached) = cache.read().fresh_items(cache_key, now_secs()) {
                items.set(cached);
                loading.set(false);
                return;
            }
            loading.set(true);
            match fetch().await {
                Ok(rows) => {
                    cache.write().store(cache_key, rows.clone(), now_secs());
                    items.set(rows);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("fetching {} failed: {}", cache_key, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    // Background refresh while mounted.
    use_effect(move || {
        let fetch = fetch.clone();
        spawn(async move {
            loop {
                sleep_secs(REFRESH_INTERVAL_SECS).await;
                match fetch().await {
                    Ok(rows) => {
                        cache.write().store(cache_key, rows.clone(), now_secs());
                        items.set(rows);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!("refreshing {} failed: {}", cache_key, e);
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
    });

    RemoteCollection { items, loading, error }
}

/// The locate-request feed source (`GET /locates/`).
pub fn use_locate_feed() -> RemoteCollection<LocateRequest> {
    let client = use_context::<ApiClient>();
    use_remote_collection(keys::LOCATES, move || {
        let client = client.clone();
        async move { client.list_locates().await }
    })
}

/// Today's work-order feed source (`GET /work-orders-today/`).
pub fn use_work_order_feed() -> RemoteCollection<WorkOrder> {
    let client = use_context::<ApiClient>();
    use_remote_collection(keys::WORK_ORDERS_TODAY, move || {
        let client = client.clone();
        async move { client.list_work_orders_today().await }
    })
}
