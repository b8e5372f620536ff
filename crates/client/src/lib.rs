//! # Haven Client
//!
//! Everything that leaves the process: the backend REST API, the two image
//! hosts and the federated sign-in provider, plus the shared record cache
//! those calls feed.
//!
//! ## Modules
//!
//! - [`transport`]: the `Transport` seam, `reqwest` in production and a
//!   scripted mock in tests
//! - [`resource`] / [`api`]: typed CRUD per collection
//! - [`upload`]: image host adapters
//! - [`cache`]: collection + id keyed record cache
//! - [`auth`]: operator sign-in and sessions
//! - [`bookings`] / [`dashboard`]: admin workflows built on the above
//! - [`config`]: environment configuration
//!

pub mod api;
pub mod auth;
pub mod bookings;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod resource;
pub mod transport;
pub mod upload;

pub use api::ApiClient;
pub use auth::{AuthError, Authenticator, FederatedAuth, Session, StaticCredentials, authenticator};
pub use bookings::{StatusChange, change_status, delete_booking, submit_booking};
pub use cache::{LoadState, ResourceCache};
pub use config::{AuthConfig, HavenConfig, UploadConfig};
pub use dashboard::{DashboardData, load_dashboard};
pub use error::ClientError;
pub use resource::{IDEMPOTENCY_HEADER, ResourceClient};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
pub use upload::{CloudinaryHost, IMAGE_EXTENSIONS, ImageFile, ImageHost, ImgbbHost, image_host};

#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
