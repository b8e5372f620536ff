//! Page Components for Haven
//!
//! Every route target in `app.rs` lives here.
//!
//! ## Public Pages
//!
//! - **HomePage**: hero plus previews of rooms, offers, gallery and posts
//! - **AllRoomsPage / RoomDetailPage**: room catalog, room by title slug
//! - **ReservationPage**: the three-step booking wizard
//! - **OffersPage / OfferDetailPage**, **PackagesPage / PackageDetailPage**:
//!   catalog plus the shared inquiry form
//! - **BlogsPage / BlogDetailPage**, **GalleryPage**, **AboutPage**
//!
//! ## Admin Pages
//!
//! - **AdminLoginPage**: operator sign-in
//! - **AdminShell**: tabbed back-office behind the session check

pub mod about;
pub mod admin;
pub mod blogs;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod offers;
pub mod packages;
pub mod reservation;
pub mod rooms;

// Re-export page components for convenience
pub use about::AboutPage;
pub use admin::{AdminLoginPage, AdminShell};
pub use blogs::{BlogDetailPage, BlogsPage};
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use offers::{OfferDetailPage, OffersPage};
pub use packages::{PackageDetailPage, PackagesPage};
pub use reservation::ReservationPage;
pub use rooms::{AllRoomsPage, RoomDetailPage};
