//! # Dashboard Hook
//!
//! Loads the stats tab on every mount. Non-empty lists fetched for the
//! summary are written through to the shared cache as well; an empty one
//! may stand for a failed fetch, so it never replaces cached records.

use dioxus::prelude::*;
use haven_client::{DashboardData, load_dashboard};

use crate::services::use_services;
use crate::state::APP_STATE;

/// Dashboard data, `None` while loading
pub fn use_dashboard() -> Option<DashboardData> {
    let api = use_services().api;

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let data = load_dashboard(&api).await;
            tracing::info!(
                rooms = data.summary.total_rooms,
                bookings = data.summary.total_bookings,
                "dashboard loaded"
            );
            let mut state = APP_STATE.write();
            if !data.rooms.is_empty() {
                state.cache.store_list(&data.rooms);
            }
            if !data.bookings.is_empty() {
                state.cache.store_list(&data.bookings);
            }
            if !data.packages.is_empty() {
                state.cache.store_list(&data.packages);
            }
            drop(state);
            data
        }
    });

    (*data.read()).clone()
}
