//! Backend client facade

use std::sync::Arc;

use haven_core::Resource;
use haven_model::{BlogPost, Booking, GalleryImage, Offer, Package, Room};

use crate::config::HavenConfig;
use crate::error::ClientError;
use crate::resource::ResourceClient;
use crate::transport::{ReqwestTransport, Transport};

/// Entry point to the backend REST API.
///
/// Cheap to clone; every clone shares one transport.
///
/// # Example
///
/// ```rust,ignore
/// let api = ApiClient::new(&config)?;
/// let rooms = api.rooms().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ApiClient {
    /// Client over `reqwest` with the configured base URL and timeout
    pub fn new(config: &HavenConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            config.api_base_url.clone(),
        ))
    }

    /// Client over any transport (tests, previews)
    pub fn with_transport(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared transport, reused by the upload and auth adapters
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// CRUD client for any record type
    pub fn resource<R: Resource>(&self) -> ResourceClient<R> {
        ResourceClient::new(Arc::clone(&self.transport), &self.base_url)
    }

    pub fn rooms(&self) -> ResourceClient<Room> {
        self.resource()
    }

    pub fn bookings(&self) -> ResourceClient<Booking> {
        self.resource()
    }

    pub fn packages(&self) -> ResourceClient<Package> {
        self.resource()
    }

    pub fn offers(&self) -> ResourceClient<Offer> {
        self.resource()
    }

    pub fn blogs(&self) -> ResourceClient<BlogPost> {
        self.resource()
    }

    pub fn gallery(&self) -> ResourceClient<GalleryImage> {
        self.resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    #[test]
    fn test_collection_urls() {
        let api = ApiClient::with_transport(Arc::new(MockTransport::new()), "http://api.test/");
        assert_eq!(api.rooms().collection_url(), "http://api.test/api/rooms");
        assert_eq!(api.blogs().collection_url(), "http://api.test/api/blogs");
        assert_eq!(api.gallery().collection_url(), "http://api.test/api/gallery");
        assert_eq!(
            api.bookings().record_url(&"b1".into()),
            "http://api.test/api/bookings/b1"
        );
    }
}
