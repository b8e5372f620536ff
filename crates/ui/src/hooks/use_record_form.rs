//! # Record Form Hook
//!
//! State behind every admin create/edit form: the draft being typed, its
//! inline errors, the id being edited (none while creating) and whether a
//! save is in flight.
//!
//! A failed save keeps the draft untouched and opens the blocking alert. A
//! successful one writes the server's record into the cache and resets the
//! form to an empty create form.

use dioxus::prelude::*;
use haven_client::ApiClient;
use haven_core::{RecordId, Resource as Record};
use haven_model::{Draft, ValidationResult};

use crate::services::save_draft;
use crate::state::{APP_STATE, notify, report_failure};

/// Signals of one admin form
pub struct RecordForm<D: 'static> {
    pub draft: Signal<D>,
    pub errors: Signal<ValidationResult>,
    pub editing: Signal<Option<RecordId>>,
    pub saving: Signal<bool>,
}

impl<D: 'static> Clone for RecordForm<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for RecordForm<D> {}

impl<D: 'static> PartialEq for RecordForm<D> {
    fn eq(&self, other: &Self) -> bool {
        self.draft == other.draft && self.editing == other.editing
    }
}

impl<D> RecordForm<D>
where
    D: Draft + Clone + Default + 'static,
{
    /// Whether the form is editing an existing record
    pub fn is_editing(&self) -> bool {
        self.editing.read().is_some()
    }

    /// Load an existing record into the form
    pub fn edit(&mut self, id: RecordId, draft: D) {
        self.draft.set(draft);
        self.editing.set(Some(id));
        self.errors.set(ValidationResult::ok());
    }

    /// Drop the current input and go back to an empty create form
    pub fn reset(&mut self) {
        self.draft.set(D::default());
        self.editing.set(None);
        self.errors.set(ValidationResult::ok());
    }

    /// Validate and send the draft: PUT when editing, POST otherwise
    pub fn save(&mut self, api: ApiClient) {
        if *self.saving.peek() {
            return;
        }
        let check = self.draft.read().check();
        if !check.is_valid() {
            self.errors.set(check);
            return;
        }
        self.errors.set(ValidationResult::ok());
        self.saving.set(true);

        let draft = self.draft.read().clone();
        let editing = self.editing.read().clone();
        let mut form = *self;

        spawn(async move {
            let noun = D::Record::COLLECTION.noun();
            match save_draft(&api, editing.as_ref(), &draft).await {
                Ok(record) => {
                    APP_STATE.write().cache.store_saved(&record);
                    form.saving.set(false);
                    form.reset();
                    notify(format!("Saved {noun} \"{}\"", record.label()));
                }
                Err(err) => {
                    form.saving.set(false);
                    report_failure(&format!("Saving {noun}"), &err);
                }
            }
        });
    }
}

/// Signals for one admin form, starting as an empty create form
pub fn use_record_form<D>() -> RecordForm<D>
where
    D: Draft + Clone + Default + 'static,
{
    RecordForm {
        draft: use_signal(D::default),
        errors: use_signal(ValidationResult::ok),
        editing: use_signal(|| None),
        saving: use_signal(|| false),
    }
}
