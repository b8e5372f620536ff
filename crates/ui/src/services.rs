//! External services shared with every component
//!
//! Built once at launch from [`HavenConfig`] and handed to the Dioxus
//! runtime as a root context.

use std::sync::Arc;

use dioxus::prelude::*;
use haven_client::bookings::{apply_delete, delete_booking};
use haven_client::{
    ApiClient, Authenticator, ClientError, HavenConfig, ImageHost, ResourceCache, Transport,
    authenticator, image_host,
};
use haven_core::{Collection, RecordId};
use haven_model::Draft;

use crate::state::DeleteTarget;

/// Backend client, image host and authenticator
#[derive(Debug, Clone)]
pub struct Services {
    pub api: ApiClient,
    pub images: Arc<dyn ImageHost>,
    pub auth: Arc<dyn Authenticator>,
}

impl Services {
    /// Production services over `reqwest`
    pub fn from_config(config: &HavenConfig) -> Result<Self, ClientError> {
        let api = ApiClient::new(config)?;
        Ok(Self::assemble(api, config))
    }

    /// Services over a given transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: &HavenConfig) -> Self {
        let api = ApiClient::with_transport(transport, config.api_base_url.clone());
        Self::assemble(api, config)
    }

    fn assemble(api: ApiClient, config: &HavenConfig) -> Self {
        let images = image_host(&config.upload, api.transport());
        let auth = authenticator(&config.auth, api.transport());
        tracing::info!(
            api = api.base_url(),
            images = images.name(),
            auth = auth.kind(),
            "services ready"
        );
        Self { api, images, auth }
    }
}

/// Hook to access the services context
pub fn use_services() -> Services {
    use_context::<Services>()
}

// ============================================================================
// Writes
// ============================================================================

/// Create a record from a draft, or replace `editing` with it
pub async fn save_draft<D: Draft>(
    api: &ApiClient,
    editing: Option<&RecordId>,
    draft: &D,
) -> Result<D::Record, ClientError> {
    let client = api.resource::<D::Record>();
    match editing {
        Some(id) => client.update_from_draft(id, draft).await,
        None => client.create_from_draft(draft, None).await,
    }
}

/// DELETE the record a confirmation dialog was opened for
pub async fn delete_record(api: &ApiClient, target: &DeleteTarget) -> Result<(), ClientError> {
    let id = &target.id;
    match target.collection {
        Collection::Rooms => api.rooms().delete(id).await,
        Collection::Bookings => delete_booking(&api.bookings(), id).await.map(|_| ()),
        Collection::Packages => api.packages().delete(id).await,
        Collection::Offers => api.offers().delete(id).await,
        Collection::Blogs => api.blogs().delete(id).await,
        Collection::Gallery => api.gallery().delete(id).await,
    }
}

/// Drop a deleted record from the cache
pub fn forget_record(cache: &mut ResourceCache, target: &DeleteTarget) {
    match target.collection {
        Collection::Bookings => apply_delete(cache, &target.id),
        collection => {
            cache.remove(collection, &target.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use haven_client::{Method, MockTransport};
    use haven_model::{GalleryDraft, ImageSlot, Offer, Room};

    fn config() -> HavenConfig {
        HavenConfig::from_lookup(|key| match key {
            "API_BASE_URL" => Some("http://api.test".to_string()),
            "IMGBB_API_KEY" => Some("img-key".to_string()),
            "ADMIN_USERNAME" => Some("admin".to_string()),
            "ADMIN_PASSWORD" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_services_follow_config() {
        let services = Services::with_transport(Arc::new(MockTransport::new()), &config());
        assert_eq!(services.api.base_url(), "http://api.test");
        assert_eq!(services.images.name(), "imgbb");
        assert_eq!(services.auth.kind(), "static");
    }

    #[test]
    fn test_delete_record_targets_collection() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"deletedCount":1}"#);
        let services = Services::with_transport(Arc::new(mock.clone()), &config());

        let target = DeleteTarget::new(Collection::Offers, "o1".into(), "Spring Escape");
        tokio_test::block_on(delete_record(&services.api, &target)).unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "http://api.test/api/offers/o1");
    }

    #[test]
    fn test_failed_delete_is_reported() {
        let mock = MockTransport::new();
        mock.respond(404, r#"{"message":"Not found"}"#);
        let services = Services::with_transport(Arc::new(mock), &config());

        let target = DeleteTarget::new(Collection::Rooms, "r9".into(), "Garden Room");
        let err = tokio_test::block_on(delete_record(&services.api, &target)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_draft_creates_then_updates() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"insertedId":"g1"}"#)
            .respond(200, r#"{"modifiedCount":1}"#);
        let services = Services::with_transport(Arc::new(mock.clone()), &config());

        let draft = GalleryDraft {
            title: "Lobby".into(),
            image: ImageSlot::with_url("https://i.ibb.co/lobby.jpg"),
        };
        let created = tokio_test::block_on(save_draft(&services.api, None, &draft)).unwrap();
        assert_eq!(created.id, Some(RecordId::new("g1")));
        assert_eq!(mock.last_request().unwrap().method, Method::Post);

        let id = RecordId::new("g1");
        let updated = tokio_test::block_on(save_draft(&services.api, Some(&id), &draft)).unwrap();
        assert_eq!(updated.title, "Lobby");
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/api/gallery/g1");
    }

    #[test]
    fn test_save_draft_rejects_missing_image() {
        let mock = MockTransport::new();
        let services = Services::with_transport(Arc::new(mock.clone()), &config());

        let draft = GalleryDraft {
            title: "Lobby".into(),
            image: ImageSlot::empty(),
        };
        let err = tokio_test::block_on(save_draft(&services.api, None, &draft)).unwrap_err();
        assert!(err.is_rejected());
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_forget_record() {
        let mut cache = ResourceCache::new();
        cache.store_list(&[
            Room {
                id: Some("r1".into()),
                title: "Ocean Suite".into(),
                ..Room::default()
            },
            Room {
                id: Some("r2".into()),
                title: "Garden Room".into(),
                ..Room::default()
            },
        ]);
        cache.store_list(&[Offer {
            id: Some("o1".into()),
            ..Offer::default()
        }]);

        forget_record(
            &mut cache,
            &DeleteTarget::new(Collection::Rooms, "r1".into(), "Ocean Suite"),
        );

        let rooms = cache.list::<Room>();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].title, "Garden Room");
        assert_eq!(cache.list::<Offer>().len(), 1);
    }
}
