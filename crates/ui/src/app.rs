//! Main Application Component for Haven
//!
//! This module contains the root Dioxus component and the route table.
//! Public pages render inside [`PublicLayout`] (navigation bar, page,
//! footer); the admin login and the admin shell render full-window.
//! The blocking dialog and the status toast sit above every route.

use std::time::Duration;

use dioxus::prelude::*;
use haven_client::Session;

use crate::components::dialogs::{AlertDialog, ConfirmDeleteDialog};
use crate::components::{Footer, Navbar};
use crate::pages::{
    AboutPage, AdminLoginPage, AdminShell, AllRoomsPage, BlogDetailPage, BlogsPage, GalleryPage,
    HomePage, NotFoundPage, OfferDetailPage, OffersPage, PackageDetailPage, PackagesPage,
    ReservationPage, RoomDetailPage,
};
use crate::state::{APP_STATE, Dialog, StatusMessage};

/// How long a status toast stays up
const TOAST_DURATION: Duration = Duration::from_secs(4);

// ============================================================================
// Routes
// ============================================================================

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/", HomePage)]
        Home {},
        #[route("/room/:slug", RoomDetailPage)]
        RoomDetail { slug: String },
        #[route("/all-rooms", AllRoomsPage)]
        AllRooms {},
        #[route("/reservation", ReservationPage)]
        Reservation {},
        #[route("/about", AboutPage)]
        About {},
        #[route("/gallery", GalleryPage)]
        Gallery {},
        #[route("/offers", OffersPage)]
        Offers {},
        #[route("/offers/:id", OfferDetailPage)]
        OfferDetail { id: String },
        #[route("/blogs", BlogsPage)]
        Blogs {},
        #[route("/blogs/:id", BlogDetailPage)]
        BlogDetail { id: String },
        #[route("/packages", PackagesPage)]
        Packages {},
        #[route("/packages/:id", PackageDetailPage)]
        PackageDetail { id: String },
    #[end_layout]

    #[route("/admin/login", AdminLoginPage)]
    AdminLogin {},
    #[route("/admin", AdminShell)]
    Admin {},

    #[route("/:..segments", NotFoundPage)]
    NotFound { segments: Vec<String> },
}

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // Operator session, shared with the admin routes
    use_context_provider(|| Signal::new(None::<Session>));

    use_effect(|| {
        tracing::info!("Haven UI initialized");
    });

    rsx! {
        div {
            class: "app-container min-h-screen w-screen bg-slate-900 text-slate-100",

            Router::<Route> {}

            // Status toast
            StatusToast {}

            // Dialog overlay (if active)
            DialogOverlay {}
        }
    }
}

// ============================================================================
// Public Layout
// ============================================================================

/// Navigation bar, page, footer
#[component]
fn PublicLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col",
            Navbar {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

// ============================================================================
// Status Toast
// ============================================================================

/// Transient success/info message, cleared after a few seconds
#[component]
fn StatusToast() -> Element {
    let status = APP_STATE.read().ui.status_message.clone();

    use_effect(use_reactive!(|(status,)| {
        if status.is_some() {
            spawn(async move {
                tokio::time::sleep(TOAST_DURATION).await;
                clear_if_unchanged(&status);
            });
        }
    }));

    let Some(msg) = status else {
        return rsx! {};
    };
    let class = msg.level.class();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-40 px-4 py-2 rounded-lg shadow-lg text-sm text-white {class}",
            "{msg.text}"
        }
    }
}

/// A newer message restarts the countdown instead of being cut short
fn clear_if_unchanged(shown: &Option<StatusMessage>) {
    let mut state = APP_STATE.write();
    if &state.ui.status_message == shown {
        state.ui.clear_status();
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let state = APP_STATE.read();
    let dialog = state.ui.active_dialog.clone();
    drop(state);

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| {
                    APP_STATE.write().ui.close_dialog();
                }
            }

            // Dialog content
            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 max-w-lg w-full",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::Alert { title, message } => rsx! {
                        AlertDialog { title, message }
                    },
                    Dialog::ConfirmDelete(target) => rsx! {
                        ConfirmDeleteDialog { target }
                    },
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_render_to_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::AllRooms {}.to_string(), "/all-rooms");
        assert_eq!(
            Route::RoomDetail { slug: "ocean-suite".into() }.to_string(),
            "/room/ocean-suite"
        );
        assert_eq!(Route::OfferDetail { id: "o1".into() }.to_string(), "/offers/o1");
        assert_eq!(Route::PackageDetail { id: "p1".into() }.to_string(), "/packages/p1");
        assert_eq!(Route::BlogDetail { id: "b1".into() }.to_string(), "/blogs/b1");
    }

    #[test]
    fn test_admin_routes() {
        assert_eq!(Route::AdminLogin {}.to_string(), "/admin/login");
        assert_eq!(Route::Admin {}.to_string(), "/admin");
    }

    #[test]
    fn test_paths_parse_to_routes() {
        let route: Route = "/room/garden-view".parse().unwrap();
        assert_eq!(route, Route::RoomDetail { slug: "garden-view".into() });

        let route: Route = "/reservation".parse().unwrap();
        assert_eq!(route, Route::Reservation {});
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
