//! Generic CRUD client for one backend collection
//!
//! `ResourceClient<R>` talks to `<base>/api/<collection>` and
//! `<base>/api/<collection>/<id>`. The backend's write responses are not
//! uniform: some routes echo the stored document, others answer with a
//! driver acknowledgement (`{"insertedId": ...}`, `{"modifiedCount": 1}`).
//! Both shapes are folded back into a full record here. Any 2xx is a
//! success: when the reply names no identifier at all, the sent record comes
//! back without one and the caller marks the collection stale.

use std::marker::PhantomData;
use std::sync::Arc;

use haven_core::{BookingStatus, RecordId, Resource};
use haven_model::{Draft, StatusPatch};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::ClientError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Header carrying the per-form idempotency key on create
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Typed CRUD operations for the records of one collection
pub struct ResourceClient<R> {
    transport: Arc<dyn Transport>,
    base: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base: self.base.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base", &self.base)
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Client for `R`'s collection under `api_base`
    pub fn new(transport: Arc<dyn Transport>, api_base: &str) -> Self {
        Self {
            transport,
            base: format!(
                "{}/api/{}",
                api_base.trim_end_matches('/'),
                R::COLLECTION.path()
            ),
            _record: PhantomData,
        }
    }

    /// `<base>/api/<collection>`
    pub fn collection_url(&self) -> &str {
        &self.base
    }

    /// `<base>/api/<collection>/<id>`
    pub fn record_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.base, id)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.send(request).await?.error_for_status()
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// GET the whole collection in backend order
    pub async fn list(&self) -> Result<Vec<R>, ClientError> {
        let response = self.send(HttpRequest::get(self.base.clone())).await?;
        let value: Value = serde_json::from_str(&response.body)?;
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => return Err(ClientError::Decode("expected a JSON array".to_string())),
            },
            _ => return Err(ClientError::Decode("expected a JSON array".to_string())),
        };
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ClientError::from))
            .collect()
    }

    /// Like [`list`](Self::list), but a failure is logged and yields an
    /// empty list so read-only screens render their empty state
    pub async fn list_or_empty(&self) -> Vec<R> {
        match self.list().await {
            Ok(records) => records,
            Err(e) => {
                error!(collection = %R::COLLECTION, error = %e, "failed to load collection");
                Vec::new()
            }
        }
    }

    /// GET one record for a detail page
    pub async fn get(&self, id: &RecordId) -> Result<R, ClientError> {
        let response = self.send(HttpRequest::get(self.record_url(id))).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    // ========================================================================
    // Write
    // ========================================================================

    /// POST a new record (sent without identifier)
    pub async fn create(&self, record: &R, idempotency_key: Option<&str>) -> Result<R, ClientError> {
        let mut request = HttpRequest::new(Method::Post, self.base.clone()).json(record)?;
        strip_id(&mut request);
        if let Some(key) = idempotency_key {
            request = request.header(IDEMPOTENCY_HEADER, key);
        }
        let response = self.send(request).await?;
        let created = reconcile(record, None, &response.body)?;
        if created.id().is_none() {
            warn!(collection = %R::COLLECTION, status = response.status, "create reply carried no identifier");
        }
        debug!(collection = %R::COLLECTION, label = %created.label(), "record created");
        Ok(created)
    }

    /// PUT a full replacement
    pub async fn update(&self, id: &RecordId, record: &R) -> Result<R, ClientError> {
        let mut request = HttpRequest::new(Method::Put, self.record_url(id)).json(record)?;
        strip_id(&mut request);
        let response = self.send(request).await?;
        reconcile(record, Some(id), &response.body)
    }

    /// PATCH `{ "status": ... }`.
    ///
    /// Returns the updated record when the server echoes one, `None` when it
    /// only acknowledges.
    pub async fn patch_status(
        &self,
        id: &RecordId,
        status: BookingStatus,
    ) -> Result<Option<R>, ClientError> {
        let request =
            HttpRequest::new(Method::Patch, self.record_url(id)).json(&StatusPatch { status })?;
        let response = self.send(request).await?;
        Ok(echoed_record(&response.body))
    }

    /// DELETE one record
    pub async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        self.send(HttpRequest::new(Method::Delete, self.record_url(id)))
            .await?;
        debug!(collection = %R::COLLECTION, %id, "record deleted");
        Ok(())
    }

    // ========================================================================
    // Drafts
    // ========================================================================

    /// Validate a draft, then create. Nothing is sent if validation fails.
    pub async fn create_from_draft<D>(
        &self,
        draft: &D,
        idempotency_key: Option<&str>,
    ) -> Result<R, ClientError>
    where
        D: Draft<Record = R>,
    {
        let record = draft.build().map_err(ClientError::Rejected)?;
        self.create(&record, idempotency_key).await
    }

    /// Validate a draft, then replace the record. Nothing is sent if
    /// validation fails.
    pub async fn update_from_draft<D>(&self, id: &RecordId, draft: &D) -> Result<R, ClientError>
    where
        D: Draft<Record = R>,
    {
        let record = draft.build().map_err(ClientError::Rejected)?;
        self.update(id, &record).await
    }
}

// ============================================================================
// Response folding
// ============================================================================

fn strip_id(request: &mut HttpRequest) {
    if let crate::transport::Body::Json(Value::Object(map)) = &mut request.body {
        map.remove("_id");
        map.remove("id");
    }
}

/// Decode a body that holds a full record (has `_id` or `id`)
fn echoed_record<R: Resource>(body: &str) -> Option<R> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if object.contains_key("_id") || object.contains_key("id") {
        serde_json::from_value(value).ok()
    } else {
        None
    }
}

/// Build the stored record from what was sent and what came back
fn reconcile<R: Resource>(sent: &R, id: Option<&RecordId>, body: &str) -> Result<R, ClientError> {
    if let Some(record) = echoed_record::<R>(body) {
        return Ok(record);
    }
    let inserted = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("insertedId").cloned())
        .and_then(|v| serde_json::from_value::<RecordId>(v).ok());
    match inserted.as_ref().or(id) {
        Some(id) => with_id(sent, id),
        None => Ok(sent.clone()),
    }
}

/// Copy of `record` carrying `id`
pub(crate) fn with_id<R: Resource>(record: &R, id: &RecordId) -> Result<R, ClientError> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.insert("_id".to_string(), Value::String(id.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use haven_model::{Booking, GalleryDraft, GalleryImage, Room, RoomDraft};
    use serde_json::json;

    fn client<R: Resource>(mock: &MockTransport) -> ResourceClient<R> {
        ResourceClient::new(Arc::new(mock.clone()), "http://api.test/")
    }

    #[tokio::test]
    async fn test_list_in_backend_order() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            &json!([
                {"_id": "r2", "title": "Garden Villa", "price": 180},
                {"_id": "r1", "title": "Ocean Suite", "price": "240"}
            ]),
        );

        let rooms = client::<Room>(&mock).list().await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].title, "Garden Villa");
        assert_eq!(rooms[1].price, Some(240.0));

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://api.test/api/rooms");
    }

    #[tokio::test]
    async fn test_list_or_empty_swallows_failure() {
        let mock = MockTransport::new();
        mock.respond(500, "boom");
        assert!(client::<Room>(&mock).list_or_empty().await.is_empty());

        mock.fail("offline");
        assert!(client::<Room>(&mock).list_or_empty().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_acknowledgement_body() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"acknowledged": true, "insertedId": "b9"}));

        let booking = Booking {
            guest_name: "A. Rahman".into(),
            room_title: "Ocean Suite".into(),
            ..Booking::default()
        };
        let created = client::<Booking>(&mock)
            .create(&booking, Some("key-1"))
            .await
            .unwrap();

        assert_eq!(created.id, Some(RecordId::new("b9")));
        assert_eq!(created.guest_name, "A. Rahman");

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.header_value(IDEMPOTENCY_HEADER), Some("key-1"));
        let body = request.json_body().unwrap();
        assert_eq!(body["guestName"], "A. Rahman");
        assert!(body.get("_id").is_none());
    }

    #[tokio::test]
    async fn test_create_without_identifier_is_success() {
        let mock = MockTransport::new();
        mock.respond(201, "");
        mock.respond_json(200, &json!({"acknowledged": true}));

        let booking = Booking {
            guest_name: "A. Rahman".into(),
            ..Booking::default()
        };
        let bookings = client::<Booking>(&mock);

        let empty = bookings.create(&booking, Some("key-1")).await.unwrap();
        assert_eq!(empty.id, None);
        assert_eq!(empty.guest_name, "A. Rahman");

        let acknowledged = bookings.create(&booking, Some("key-1")).await.unwrap();
        assert_eq!(acknowledged.id, None);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_create_with_echoed_record() {
        let mock = MockTransport::new();
        mock.respond_json(201, &json!({"_id": "g1", "title": "Lobby", "image": "https://i/x.jpg"}));

        let image = GalleryImage {
            title: "Lobby".into(),
            image: "https://i/x.jpg".into(),
            ..GalleryImage::default()
        };
        let created = client::<GalleryImage>(&mock).create(&image, None).await.unwrap();
        assert_eq!(created.id, Some(RecordId::new("g1")));
        assert!(mock.last_request().unwrap().header_value(IDEMPOTENCY_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_update_puts_full_record() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"modifiedCount": 1}));

        let id = RecordId::new("r1");
        let room = Room {
            id: Some(id.clone()),
            title: "Ocean Suite".into(),
            price: Some(260.0),
            ..Room::default()
        };
        let updated = client::<Room>(&mock).update(&id, &room).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.price, Some(260.0));

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/api/rooms/r1");
        assert!(request.json_body().unwrap().get("_id").is_none());
    }

    #[tokio::test]
    async fn test_patch_status_body_and_echo() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"modifiedCount": 1}));
        mock.respond_json(200, &json!({"_id": "b1", "status": "confirmed"}));

        let bookings = client::<Booking>(&mock);
        let id = RecordId::new("b1");
        assert!(bookings.patch_status(&id, BookingStatus::Confirmed).await.unwrap().is_none());

        let echoed = bookings
            .patch_status(&id, BookingStatus::Confirmed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(echoed.status, BookingStatus::Confirmed);

        let request = mock.requests()[0].clone();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.json_body(), Some(&json!({"status": "Confirmed"})));
    }

    #[tokio::test]
    async fn test_delete_issues_one_request() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"deletedCount":1}"#);

        client::<Room>(&mock).delete(&RecordId::new("r1")).await.unwrap();
        assert_eq!(mock.request_count(), 1);
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "http://api.test/api/rooms/r1");
    }

    #[tokio::test]
    async fn test_failed_status_is_error() {
        let mock = MockTransport::new();
        mock.respond(404, "");
        let err = client::<Room>(&mock).get(&RecordId::new("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_draft_sends_nothing() {
        let mock = MockTransport::new();
        let draft = RoomDraft {
            title: "Ocean Suite".into(),
            price: "240".into(),
            description: "Sea view".into(),
            ..RoomDraft::default()
        };
        let err = client::<Room>(&mock)
            .create_from_draft(&draft, None)
            .await
            .unwrap_err();
        assert!(err.is_rejected());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_draft_with_pending_upload_sends_nothing() {
        let mock = MockTransport::new();
        let mut draft = GalleryDraft::from_record(&GalleryImage {
            title: "Lobby".into(),
            image: "https://i/old.jpg".into(),
            ..GalleryImage::default()
        });
        draft.image.begin_upload();

        let err = client::<GalleryImage>(&mock)
            .update_from_draft(&RecordId::new("g1"), &draft)
            .await
            .unwrap_err();
        assert!(err.is_rejected());
        assert_eq!(mock.request_count(), 0);
    }
}
