//! # Admin Back-Office
//!
//! `/admin/login` signs the operator in; `/admin` is the tabbed shell.
//! Tabs switch through [`AdminTab`] in the UI state, without navigation.
//!
//! The shell checks the session on every render. A missing or expired
//! session sends the operator back to the login page.

mod blogs;
mod bookings;
mod form;
mod gallery;
mod login;
mod offers;
mod packages;
mod rooms;
mod stats;

pub use login::AdminLoginPage;

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Loading;
use crate::state::{APP_STATE, AdminTab, active_session, use_session};

use blogs::BlogsTab;
use bookings::BookingsTab;
use gallery::GalleryTab;
use offers::OffersTab;
use packages::PackagesTab;
use rooms::{AddRoomTab, ManageRoomsTab};
use stats::StatsTab;

// ============================================================================
// Admin Shell
// ============================================================================

#[component]
pub fn AdminShell() -> Element {
    let mut session = use_session();
    let nav = navigator();

    let operator = active_session(&session.read()).map(|s| s.operator.clone());
    let signed_in = operator.is_some();

    use_effect(use_reactive!(|(signed_in,)| {
        if !signed_in {
            tracing::info!("no active session, redirecting to login");
            nav.replace(Route::AdminLogin {});
        }
    }));

    let Some(operator) = operator else {
        return rsx! { Loading { label: "Redirecting to sign-in…" } };
    };

    let tab = APP_STATE.read().ui.admin_tab;

    let logout = move |_| {
        if let Some(old) = session.write().take() {
            tracing::info!(operator = %old.operator, "operator signed out");
        }
        let mut state = APP_STATE.write();
        state.cache.clear();
        state.ui.select_tab(AdminTab::default());
        drop(state);
        nav.replace(Route::AdminLogin {});
    };

    rsx! {
        div {
            class: "h-screen flex overflow-hidden",

            // Sidebar
            aside {
                class: "sidebar w-56 shrink-0 bg-slate-800 border-r border-slate-700 flex flex-col",

                div {
                    class: "h-12 flex items-center gap-2 px-4 border-b border-slate-700",
                    span { class: "text-xl", "🏨" }
                    span { class: "font-semibold text-sm", "Haven admin" }
                }

                nav {
                    class: "flex-1 py-4 overflow-y-auto",
                    for item in AdminTab::ALL {
                        SidebarItem { key: "{item.display_name()}", tab: item, current: tab }
                    }
                }

                div {
                    class: "border-t border-slate-700 p-3 flex flex-col gap-2 text-sm",
                    span { class: "text-slate-400 truncate", "👤 {operator}" }
                    Link {
                        class: "text-slate-400 hover:text-slate-200",
                        to: Route::Home {},
                        "🌐 View website"
                    }
                    button {
                        class: "text-left text-slate-400 hover:text-rose-400",
                        onclick: logout,
                        "🚪 Sign out"
                    }
                }
            }

            // Tab content
            main {
                class: "flex-1 overflow-y-auto p-8",
                h1 { class: "text-2xl font-bold mb-6", "{tab.icon()} {tab.display_name()}" }

                match tab {
                    AdminTab::Stats => rsx! { StatsTab {} },
                    AdminTab::AddRoom => rsx! { AddRoomTab {} },
                    AdminTab::ManageRooms => rsx! { ManageRoomsTab {} },
                    AdminTab::Bookings => rsx! { BookingsTab {} },
                    AdminTab::Gallery => rsx! { GalleryTab {} },
                    AdminTab::Offers => rsx! { OffersTab {} },
                    AdminTab::Blogs => rsx! { BlogsTab {} },
                    AdminTab::Packages => rsx! { PackagesTab {} },
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(tab: AdminTab, current: AdminTab) -> Element {
    let is_active = tab == current;

    rsx! {
        button {
            class: if is_active {
                "w-full flex items-center gap-3 px-4 py-2 text-sm bg-indigo-600 text-white"
            } else {
                "w-full flex items-center gap-3 px-4 py-2 text-sm text-slate-300 hover:bg-slate-700"
            },
            onclick: move |_| {
                APP_STATE.write().ui.select_tab(tab);
            },
            span { "{tab.icon()}" }
            span { "{tab.display_name()}" }
        }
    }
}
