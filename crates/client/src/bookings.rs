//! Booking administration
//!
//! Status changes and deletes run as async calls that return a small
//! outcome value; the caller applies it to the shared cache afterwards, so
//! no cache borrow is held across an await.

use haven_core::{BookingStatus, Collection, RecordId, StatusAction};
use haven_model::Booking;
use tracing::info;

use crate::cache::ResourceCache;
use crate::error::ClientError;
use crate::resource::ResourceClient;

/// Result of a successful status PATCH
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub id: RecordId,
    pub status: BookingStatus,
    /// Record echoed by the server, when it sent one
    pub record: Option<Booking>,
}

impl StatusChange {
    /// Patch the cached booking without re-fetching the list
    pub fn apply(&self, cache: &mut ResourceCache) {
        let written = match &self.record {
            Some(record) if record.id.as_ref() == Some(&self.id) => cache.upsert(record),
            _ => false,
        };
        if !written {
            let status = self.status;
            cache.update_with::<Booking, _>(&self.id, |b| b.status = status);
        }
    }
}

/// Send one admin status action. The PATCH is unconditional: re-applying the
/// current status is allowed.
pub async fn change_status(
    client: &ResourceClient<Booking>,
    id: &RecordId,
    action: StatusAction,
) -> Result<StatusChange, ClientError> {
    let status = action.target();
    let record = client.patch_status(id, status).await?;
    info!(%id, %status, "booking status changed");
    Ok(StatusChange {
        id: id.clone(),
        status,
        record,
    })
}

/// Delete a booking after the admin confirmed
pub async fn delete_booking(
    client: &ResourceClient<Booking>,
    id: &RecordId,
) -> Result<RecordId, ClientError> {
    client.delete(id).await?;
    info!(%id, "booking deleted");
    Ok(id.clone())
}

/// Drop a deleted booking from the cache
pub fn apply_delete(cache: &mut ResourceCache, id: &RecordId) {
    cache.remove(Collection::Bookings, id);
}

/// POST a public booking request (reservation wizard or inquiry form)
pub async fn submit_booking(
    client: &ResourceClient<Booking>,
    booking: &Booking,
    idempotency_key: &str,
) -> Result<Booking, ClientError> {
    let created = client.create(booking, Some(idempotency_key)).await?;
    info!(guest = %created.guest_name, room = %created.room_title, "booking request submitted");
    Ok(created)
}

/// After a public submission the admin list is out of date
pub fn apply_submitted(cache: &mut ResourceCache) {
    cache.invalidate(Collection::Bookings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::transport::{Method, MockTransport};
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (MockTransport, ResourceClient<Booking>, ResourceCache) {
        let mock = MockTransport::new();
        let api = ApiClient::with_transport(Arc::new(mock.clone()), "http://api.test");
        let mut cache = ResourceCache::new();
        cache.store_list(&[
            Booking {
                id: Some("b1".into()),
                guest_name: "A. Rahman".into(),
                room_title: "Ocean Suite".into(),
                ..Booking::default()
            },
            Booking {
                id: Some("b2".into()),
                guest_name: "J. Doe".into(),
                ..Booking::default()
            },
        ]);
        (mock, api.bookings(), cache)
    }

    #[tokio::test]
    async fn test_status_change_patches_cache_without_refetch() {
        let (mock, client, mut cache) = setup();
        mock.respond_json(200, &json!({"modifiedCount": 1}));

        let id = RecordId::new("b1");
        let change = change_status(&client, &id, StatusAction::Confirm).await.unwrap();
        change.apply(&mut cache);

        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.last_request().unwrap().method, Method::Patch);
        let cached = cache.get::<Booking>(&id).unwrap();
        assert_eq!(cached.status, BookingStatus::Confirmed);
        assert_eq!(cached.guest_name, "A. Rahman");
    }

    #[tokio::test]
    async fn test_status_change_uses_echoed_record() {
        let (mock, client, mut cache) = setup();
        mock.respond_json(
            200,
            &json!({"_id": "b2", "guestName": "J. Doe", "status": "cancelled", "totalPrice": 90}),
        );

        let id = RecordId::new("b2");
        change_status(&client, &id, StatusAction::Cancel)
            .await
            .unwrap()
            .apply(&mut cache);

        let cached = cache.get::<Booking>(&id).unwrap();
        assert_eq!(cached.status, BookingStatus::Cancelled);
        assert_eq!(cached.total_price, Some(90.0));
    }

    #[tokio::test]
    async fn test_same_status_twice_is_allowed() {
        let (mock, client, mut cache) = setup();
        mock.respond(200, "{}").respond(200, "{}");

        let id = RecordId::new("b1");
        for _ in 0..2 {
            change_status(&client, &id, StatusAction::Confirm)
                .await
                .unwrap()
                .apply(&mut cache);
        }
        assert_eq!(mock.request_count(), 2);
        assert_eq!(
            cache.get::<Booking>(&id).unwrap().status,
            BookingStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn test_failed_patch_leaves_cache() {
        let (mock, client, cache) = setup();
        mock.respond(500, "");
        let id = RecordId::new("b1");
        assert!(change_status(&client, &id, StatusAction::Cancel).await.is_err());
        assert_eq!(cache.get::<Booking>(&id).unwrap().status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_delete_removes_from_cache() {
        let (mock, client, mut cache) = setup();
        mock.respond(200, r#"{"deletedCount":1}"#);

        let id = delete_booking(&client, &RecordId::new("b2")).await.unwrap();
        apply_delete(&mut cache, &id);

        assert_eq!(mock.request_count(), 1);
        assert_eq!(cache.list::<Booking>().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_marks_bookings_stale() {
        let (mock, client, mut cache) = setup();
        mock.respond_json(200, &json!({"insertedId": "b3"}));

        let booking = Booking {
            guest_name: "New Guest".into(),
            ..Booking::default()
        };
        let created = submit_booking(&client, &booking, "k-1").await.unwrap();
        apply_submitted(&mut cache);

        assert_eq!(created.id, Some(RecordId::new("b3")));
        assert!(cache.needs_fetch(Collection::Bookings));
    }
}
