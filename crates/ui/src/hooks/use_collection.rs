//! # Collection Hooks
//!
//! Read records out of the shared cache, fetching on mount when the
//! collection was never loaded, failed last time or was marked stale.
//! - `use_collection`: a whole collection for list pages
//! - `use_record`: one record by id for detail pages (GET by id)

use dioxus::prelude::*;
use haven_client::{ApiClient, LoadState};
use haven_core::{RecordId, Resource as Record};

use crate::services::use_services;
use crate::state::APP_STATE;

// ============================================================================
// Collection
// ============================================================================

/// Snapshot of one collection for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<R> {
    pub records: Vec<R>,
    pub state: LoadState,
}

impl<R> CollectionView<R> {
    /// Nothing to show yet because the first fetch is still running
    pub fn is_loading(&self) -> bool {
        self.records.is_empty() && matches!(self.state, LoadState::Idle | LoadState::Loading)
    }

    /// The last fetch failed
    pub fn is_failed(&self) -> bool {
        self.state == LoadState::Failed
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Subscribe to a collection, fetching it on mount if needed
pub fn use_collection<R: Record>() -> CollectionView<R> {
    let api = use_services().api;
    use_effect(move || fetch_collection::<R>(api.clone(), false));

    let state = APP_STATE.read();
    let view = CollectionView {
        records: state.cache.list::<R>(),
        state: state.cache.state(R::COLLECTION),
    };
    drop(state);
    view
}

/// GET a collection into the cache. Without `force`, a collection that is
/// loading or ready is left alone.
///
/// The task outlives the mounting component so the cache never stays in
/// `Loading`.
pub fn fetch_collection<R: Record>(api: ApiClient, force: bool) {
    {
        let mut state = APP_STATE.write();
        if state.cache.is_loading(R::COLLECTION) {
            return;
        }
        if !force && !state.cache.needs_fetch(R::COLLECTION) {
            return;
        }
        state.cache.mark_loading(R::COLLECTION);
    }

    spawn_forever(async move {
        match api.resource::<R>().list().await {
            Ok(records) => {
                tracing::debug!(collection = %R::COLLECTION, count = records.len(), "collection loaded");
                APP_STATE.write().cache.store_list(&records);
            }
            Err(err) => {
                tracing::error!(collection = %R::COLLECTION, error = %err, "failed to load collection");
                APP_STATE.write().cache.mark_failed(R::COLLECTION);
            }
        }
    });
}

// ============================================================================
// Single record
// ============================================================================

/// One record for a detail page
#[derive(Debug, Clone, PartialEq)]
pub enum RecordView<R> {
    Loading,
    Ready(R),
    /// Lookup failed; carries the user-facing reason
    Missing(String),
}

/// Look a record up by id. The cached copy renders immediately while a
/// fresh GET runs; the answer is written through to the cache.
pub fn use_record<R: Record>(id: RecordId) -> RecordView<R> {
    let api = use_services().api;
    let cached = APP_STATE.read().cache.get::<R>(&id);

    let lookup = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move {
            match api.resource::<R>().get(&id).await {
                Ok(record) => {
                    APP_STATE.write().cache.upsert(&record);
                    Ok(())
                }
                Err(err) => {
                    tracing::warn!(collection = %R::COLLECTION, %id, error = %err, "record lookup failed");
                    Err(err.user_message())
                }
            }
        }
    }));

    let outcome = (*lookup.read()).clone();
    resolve(cached, outcome)
}

fn resolve<R>(cached: Option<R>, outcome: Option<Result<(), String>>) -> RecordView<R> {
    match (cached, outcome) {
        (Some(record), _) => RecordView::Ready(record),
        (None, Some(Err(reason))) => RecordView::Missing(reason),
        (None, Some(Ok(()))) => RecordView::Missing("This page no longer exists.".to_string()),
        (None, None) => RecordView::Loading,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_view_states() {
        let loading: CollectionView<u8> = CollectionView {
            records: vec![],
            state: LoadState::Loading,
        };
        assert!(loading.is_loading());

        let stale_with_data = CollectionView {
            records: vec![1u8],
            state: LoadState::Stale,
        };
        assert!(!stale_with_data.is_loading());

        let failed: CollectionView<u8> = CollectionView {
            records: vec![],
            state: LoadState::Failed,
        };
        assert!(failed.is_failed());
        assert!(failed.is_empty());
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_resolve_prefers_cache() {
        assert_eq!(resolve(Some(7u8), None), RecordView::Ready(7));
        assert_eq!(
            resolve(Some(7u8), Some(Err("offline".into()))),
            RecordView::Ready(7)
        );
        assert_eq!(resolve::<u8>(None, None), RecordView::Loading);
        assert_eq!(
            resolve::<u8>(None, Some(Err("Not found".into()))),
            RecordView::Missing("Not found".into())
        );
    }
}
