//! # Custom Hooks
//!
//! Data hooks shared by the pages.
//!
//! - `use_collection` / `use_record`: cached reads with fetch-on-mount
//! - `use_dashboard`: the admin summary
//! - `use_record_form`: admin create/edit form state

mod use_collection;
mod use_dashboard;
mod use_record_form;

pub use use_collection::{CollectionView, RecordView, fetch_collection, use_collection, use_record};
pub use use_dashboard::use_dashboard;
pub use use_record_form::{RecordForm, use_record_form};
