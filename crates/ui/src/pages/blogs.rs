//! Blog Pages
//!
//! `/blogs` lists posts newest first with a category filter; `/blogs/:id`
//! renders one post.

use dioxus::prelude::*;
use haven_core::{BlogCategory, RecordId};
use haven_model::BlogPost;

use crate::app::Route;
use crate::components::{BlogCard, EmptyState, Loading};
use crate::hooks::{RecordView, use_collection, use_record};

// ============================================================================
// Blog List
// ============================================================================

#[component]
pub fn BlogsPage() -> Element {
    let blogs = use_collection::<BlogPost>();
    let mut category: Signal<Option<BlogCategory>> = use_signal(|| None);

    let selected = category.read().clone();
    let posts = newest_first(&blogs.records, selected.as_ref());

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-6", "Journal" }

            div {
                class: "flex flex-wrap gap-2 mb-8",
                button {
                    class: if selected.is_none() { "px-3 py-1 rounded-full text-sm bg-amber-500 text-slate-900" } else { "px-3 py-1 rounded-full text-sm bg-slate-800 text-slate-300 hover:bg-slate-700" },
                    onclick: move |_| category.set(None),
                    "All"
                }
                for known in BlogCategory::KNOWN {
                    button {
                        key: "{known}",
                        class: if selected.as_ref() == Some(known) { "px-3 py-1 rounded-full text-sm bg-amber-500 text-slate-900" } else { "px-3 py-1 rounded-full text-sm bg-slate-800 text-slate-300 hover:bg-slate-700" },
                        onclick: move |_| category.set(Some(known.clone())),
                        "{known}"
                    }
                }
            }

            if blogs.is_loading() {
                Loading {}
            } else if posts.is_empty() {
                EmptyState { icon: "📝", title: "No posts yet" }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for post in posts {
                        BlogCard { key: "{post.title}", post }
                    }
                }
            }
        }
    }
}

/// Posts in one category (or all), newest first; undated posts last
fn newest_first(posts: &[BlogPost], category: Option<&BlogCategory>) -> Vec<BlogPost> {
    let mut shown: Vec<BlogPost> = posts
        .iter()
        .filter(|post| category.is_none_or(|c| &post.category == c))
        .cloned()
        .collect();
    shown.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    shown
}

// ============================================================================
// Blog Detail
// ============================================================================

#[component]
pub fn BlogDetailPage(id: String) -> Element {
    let view = use_record::<BlogPost>(RecordId::new(id));

    let post = match view {
        RecordView::Loading => return rsx! { Loading {} },
        RecordView::Missing(reason) => {
            return rsx! {
                EmptyState { icon: "📝", title: "Post not available", hint: reason }
            };
        }
        RecordView::Ready(post) => post,
    };

    let published = post.published_label();

    rsx! {
        article {
            class: "max-w-3xl mx-auto px-6 py-12",
            Link {
                class: "text-sm text-amber-300 hover:text-amber-200",
                to: Route::Blogs {},
                "← All posts"
            }
            div {
                class: "flex items-center gap-2 text-xs text-slate-500 mt-6 mb-2",
                span { class: "px-2 py-0.5 rounded bg-slate-700 text-slate-300", "{post.category}" }
                span { "{published}" }
            }
            h1 { class: "font-serif text-4xl mb-6", "{post.title}" }
            img { class: "w-full h-80 object-cover rounded-xl mb-8", src: "{post.image}", alt: "{post.title}" }
            div {
                class: "text-slate-300 leading-relaxed whitespace-pre-line",
                "{post.description}"
            }
        }
    }
}
