//! Shared record cache
//!
//! One cache serves every screen. Records are keyed by collection + id and
//! kept in backend order. Mutations write the server's answer through with
//! [`ResourceCache::upsert`] or drop it with [`ResourceCache::remove`]; a
//! list is only re-fetched when it was never loaded, failed, or has been
//! marked stale with [`ResourceCache::invalidate`].

use std::collections::HashMap;

use haven_core::{Collection, RecordId, Resource};
use serde_json::Value;
use tracing::warn;

/// Fetch state of one collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Stale,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    order: Vec<RecordId>,
    records: HashMap<RecordId, Value>,
    state: LoadState,
}

/// Records of every collection, stored as JSON so one map serves all types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCache {
    slots: HashMap<Collection, Slot>,
    next_local: u64,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, collection: Collection) -> LoadState {
        self.slots
            .get(&collection)
            .map(|slot| slot.state)
            .unwrap_or_default()
    }

    /// Whether a mounting screen should fetch this collection
    pub fn needs_fetch(&self, collection: Collection) -> bool {
        matches!(
            self.state(collection),
            LoadState::Idle | LoadState::Stale | LoadState::Failed
        )
    }

    pub fn is_loading(&self, collection: Collection) -> bool {
        self.state(collection) == LoadState::Loading
    }

    pub fn mark_loading(&mut self, collection: Collection) {
        self.slots.entry(collection).or_default().state = LoadState::Loading;
    }

    /// Record a failed fetch; cached records (if any) are kept for display
    pub fn mark_failed(&mut self, collection: Collection) {
        self.slots.entry(collection).or_default().state = LoadState::Failed;
    }

    /// Mark a collection stale so the next mount refetches it
    pub fn invalidate(&mut self, collection: Collection) {
        if let Some(slot) = self.slots.get_mut(&collection) {
            slot.state = LoadState::Stale;
        }
    }

    /// Replace a whole collection with a freshly fetched list
    pub fn store_list<R: Resource>(&mut self, records: &[R]) {
        let mut slot = Slot {
            state: LoadState::Ready,
            ..Slot::default()
        };
        for record in records {
            let id = match record.id() {
                Some(id) => id.clone(),
                None => {
                    // Kept for display, but never addressable by the backend
                    self.next_local += 1;
                    RecordId::new(format!("local-{}", self.next_local))
                }
            };
            match serde_json::to_value(record) {
                Ok(value) => {
                    if !slot.records.contains_key(&id) {
                        slot.order.push(id.clone());
                    }
                    slot.records.insert(id, value);
                }
                Err(e) => warn!(collection = %R::COLLECTION, error = %e, "record not cached"),
            }
        }
        self.slots.insert(R::COLLECTION, slot);
    }

    /// Cached records of `R`'s collection in backend order
    pub fn list<R: Resource>(&self) -> Vec<R> {
        let Some(slot) = self.slots.get(&R::COLLECTION) else {
            return Vec::new();
        };
        slot.order
            .iter()
            .filter_map(|id| slot.records.get(id))
            .filter_map(|value| serde_json::from_value(value.clone()).ok())
            .collect()
    }

    pub fn get<R: Resource>(&self, id: &RecordId) -> Option<R> {
        self.slots
            .get(&R::COLLECTION)?
            .records
            .get(id)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.slots
            .get(&collection)
            .map(|slot| slot.order.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    /// Write a server-confirmed record through. Existing records are
    /// replaced in place; new ones are appended.
    ///
    /// Returns `false` if the record has no identifier.
    pub fn upsert<R: Resource>(&mut self, record: &R) -> bool {
        let Some(id) = record.id().cloned() else {
            return false;
        };
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                warn!(collection = %R::COLLECTION, error = %e, "record not cached");
                return false;
            }
        };
        let slot = self.slots.entry(R::COLLECTION).or_default();
        if slot.records.insert(id.clone(), value).is_none() {
            slot.order.push(id);
        }
        true
    }

    /// Write a saved record through, or mark its collection stale when the
    /// server never said which id it got
    pub fn store_saved<R: Resource>(&mut self, record: &R) {
        if !self.upsert(record) {
            self.invalidate(R::COLLECTION);
        }
    }

    /// Apply an in-place edit to a cached record
    pub fn update_with<R, F>(&mut self, id: &RecordId, edit: F) -> bool
    where
        R: Resource,
        F: FnOnce(&mut R),
    {
        let Some(mut record) = self.get::<R>(id) else {
            return false;
        };
        edit(&mut record);
        self.upsert(&record)
    }

    /// Drop a record after a confirmed delete
    pub fn remove(&mut self, collection: Collection, id: &RecordId) -> bool {
        let Some(slot) = self.slots.get_mut(&collection) else {
            return false;
        };
        let removed = slot.records.remove(id).is_some();
        if removed {
            slot.order.retain(|other| other != id);
        }
        removed
    }

    /// Forget everything (logout)
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::BookingStatus;
    use haven_model::{Booking, Room};

    fn room(id: &str, title: &str) -> Room {
        Room {
            id: Some(RecordId::new(id)),
            title: title.to_string(),
            ..Room::default()
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut cache = ResourceCache::new();
        assert!(cache.needs_fetch(Collection::Rooms));

        cache.mark_loading(Collection::Rooms);
        assert!(!cache.needs_fetch(Collection::Rooms));

        cache.store_list(&[room("r1", "Ocean Suite")]);
        assert_eq!(cache.state(Collection::Rooms), LoadState::Ready);
        assert!(!cache.needs_fetch(Collection::Rooms));

        cache.invalidate(Collection::Rooms);
        assert!(cache.needs_fetch(Collection::Rooms));
        assert_eq!(cache.len(Collection::Rooms), 1);
    }

    #[test]
    fn test_invalidate_unloaded_is_noop() {
        let mut cache = ResourceCache::new();
        cache.invalidate(Collection::Bookings);
        assert_eq!(cache.state(Collection::Bookings), LoadState::Idle);
    }

    #[test]
    fn test_upsert_keeps_order() {
        let mut cache = ResourceCache::new();
        cache.store_list(&[room("r1", "Ocean Suite"), room("r2", "Garden Villa")]);

        assert!(cache.upsert(&room("r1", "Ocean Suite Deluxe")));
        assert!(cache.upsert(&room("r3", "Penthouse")));

        let titles: Vec<String> = cache.list::<Room>().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Ocean Suite Deluxe", "Garden Villa", "Penthouse"]);
        assert!(!cache.upsert(&Room::default()));
    }

    #[test]
    fn test_store_saved_without_id_marks_stale() {
        let mut cache = ResourceCache::new();
        cache.store_list(&[room("r1", "Ocean Suite")]);

        cache.store_saved(&room("r2", "Garden Villa"));
        assert_eq!(cache.state(Collection::Rooms), LoadState::Ready);
        assert_eq!(cache.len(Collection::Rooms), 2);

        cache.store_saved(&Room {
            title: "Penthouse".into(),
            ..Room::default()
        });
        assert_eq!(cache.state(Collection::Rooms), LoadState::Stale);
        assert_eq!(cache.len(Collection::Rooms), 2);
    }

    #[test]
    fn test_remove() {
        let mut cache = ResourceCache::new();
        cache.store_list(&[room("r1", "Ocean Suite"), room("r2", "Garden Villa")]);
        assert!(cache.remove(Collection::Rooms, &RecordId::new("r1")));
        assert!(!cache.remove(Collection::Rooms, &RecordId::new("r1")));
        assert_eq!(cache.list::<Room>().len(), 1);
    }

    #[test]
    fn test_update_with_patches_one_record() {
        let mut cache = ResourceCache::new();
        let booking = Booking {
            id: Some(RecordId::new("b1")),
            guest_name: "A. Rahman".into(),
            ..Booking::default()
        };
        cache.store_list(&[booking]);

        let id = RecordId::new("b1");
        assert!(cache.update_with::<Booking, _>(&id, |b| b.status = BookingStatus::Confirmed));
        let cached = cache.get::<Booking>(&id).unwrap();
        assert_eq!(cached.status, BookingStatus::Confirmed);
        assert_eq!(cached.guest_name, "A. Rahman");
    }

    #[test]
    fn test_records_without_id_are_listed() {
        let mut cache = ResourceCache::new();
        cache.store_list(&[Room {
            title: "Draft room".into(),
            ..Room::default()
        }]);
        let rooms = cache.list::<Room>();
        assert_eq!(rooms.len(), 1);
        assert!(rooms[0].id.is_none());
    }
}
