//! Reservation Page Component
//!
//! Public three-step booking wizard. The state machine lives in
//! [`ReservationWizard`]; this page binds it to inputs, shows the errors of
//! the current step once the guest tried to move on, and sends the booking.
//! A failed submit leaves the guest on step 3 with everything they typed.

use dioxus::prelude::*;
use haven_client::bookings::apply_submitted;
use haven_client::submit_booking;
use haven_model::{
    MEMBER_OPTIONS, ReservationDraft, ReservationWizard, Room, ValidationResult, WizardPhase,
    WizardStep,
};

use crate::app::Route;
use crate::components::{Select, SelectOption, TextInput, field_error};
use crate::hooks::use_collection;
use crate::services::use_services;
use crate::state::{APP_STATE, report_failure};

// ============================================================================
// Reservation Page Component
// ============================================================================

#[component]
pub fn ReservationPage() -> Element {
    let services = use_services();
    let rooms = use_collection::<Room>();
    let mut wizard = use_signal(ReservationWizard::new);
    let mut errors = use_signal(ValidationResult::ok);

    // Room choices follow the cached collection
    let room_records = rooms.records.clone();
    use_effect(use_reactive!(|(room_records,)| {
        wizard.write().set_rooms(&room_records);
    }));

    let go_next = move |_| {
        let result = wizard.write().next();
        match result {
            Ok(step) => {
                tracing::debug!(step = step.number(), "reservation step completed");
                errors.set(ValidationResult::ok());
            }
            Err(_) => errors.set(wizard.read().current_errors()),
        }
    };

    let go_back = move |_| {
        wizard.write().back();
        errors.set(ValidationResult::ok());
    };

    let submit = move |_| {
        let attempt = wizard.write().begin_submit();
        let booking = match attempt {
            Ok(booking) => booking,
            Err(_) => {
                errors.set(wizard.read().current_errors());
                return;
            }
        };
        errors.set(ValidationResult::ok());
        let key = wizard.read().idempotency_key();
        let api = services.api.clone();

        spawn(async move {
            match submit_booking(&api.bookings(), &booking, &key).await {
                Ok(created) => {
                    apply_submitted(&mut APP_STATE.write().cache);
                    wizard.write().complete(created);
                }
                Err(err) => {
                    wizard.write().fail();
                    report_failure("Sending your reservation", &err);
                }
            }
        });
    };

    let current = wizard.read().clone();

    if let Some(message) = current.thank_you() {
        return rsx! {
            ThankYou { message }
        };
    }

    let step = current.step();
    let submitting = current.phase() == WizardPhase::Submitting;
    let errs = errors.read().clone();

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-12",
            h1 { class: "font-serif text-4xl mb-2", "Reserve your stay" }
            p { class: "text-slate-400 mb-8", "No payment now. You settle the bill on arrival." }

            StepHeader { current: step }

            div {
                class: "bg-slate-800 rounded-xl border border-slate-700 p-6 flex flex-col gap-4",

                match step {
                    WizardStep::SuiteAndDates => rsx! {
                        SuiteAndDates {
                            draft: current.draft().clone(),
                            titles: current.room_titles().to_vec(),
                            errors: errs.clone(),
                            on_edit: move |edit: DraftEdit| apply_edit(wizard, edit),
                        }
                    },
                    WizardStep::GuestIdentity => rsx! {
                        GuestIdentity {
                            draft: current.draft().clone(),
                            errors: errs.clone(),
                            on_edit: move |edit: DraftEdit| apply_edit(wizard, edit),
                        }
                    },
                    WizardStep::ContactAndParty => rsx! {
                        ContactAndParty {
                            draft: current.draft().clone(),
                            errors: errs.clone(),
                            on_edit: move |edit: DraftEdit| apply_edit(wizard, edit),
                        }
                    },
                }

                // Navigation
                div {
                    class: "flex justify-between pt-2",
                    if step != WizardStep::SuiteAndDates {
                        button {
                            class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors disabled:opacity-50",
                            disabled: submitting,
                            onclick: go_back,
                            "← Back"
                        }
                    } else {
                        span {}
                    }

                    if step == WizardStep::ContactAndParty {
                        button {
                            class: "px-5 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: submitting,
                            onclick: submit,
                            if submitting { "Sending…" } else { "Confirm reservation" }
                        }
                    } else {
                        button {
                            class: "px-5 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                            onclick: go_next,
                            "Next →"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Draft edits
// ============================================================================

/// One input change on the wizard draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    RoomTitle(String),
    CheckIn(String),
    CheckOut(String),
    GuestName(String),
    Email(String),
    Phone(String),
    Address(String),
    Members(String),
}

impl DraftEdit {
    fn apply(self, draft: &mut ReservationDraft) {
        match self {
            DraftEdit::RoomTitle(v) => draft.room_title = v,
            DraftEdit::CheckIn(v) => draft.check_in = v,
            DraftEdit::CheckOut(v) => draft.check_out = v,
            DraftEdit::GuestName(v) => draft.guest_name = v,
            DraftEdit::Email(v) => draft.email = v,
            DraftEdit::Phone(v) => draft.phone = v,
            DraftEdit::Address(v) => draft.address = v,
            DraftEdit::Members(v) => draft.members = v,
        }
    }
}

/// Edits are dropped once the wizard left the editing phase
fn apply_edit(mut wizard: Signal<ReservationWizard>, edit: DraftEdit) {
    if let Some(draft) = wizard.write().draft_mut() {
        edit.apply(draft);
    }
}

// ============================================================================
// Step Components
// ============================================================================

#[component]
fn StepHeader(current: WizardStep) -> Element {
    rsx! {
        ol {
            class: "flex gap-2 mb-6",
            for step in WizardStep::ALL {
                li {
                    key: "{step.number()}",
                    class: if step == current {
                        "flex-1 px-3 py-2 rounded-lg bg-amber-500/20 border border-amber-500/50 text-amber-200 text-sm"
                    } else if step < current {
                        "flex-1 px-3 py-2 rounded-lg bg-slate-800 border border-emerald-600/50 text-emerald-300 text-sm"
                    } else {
                        "flex-1 px-3 py-2 rounded-lg bg-slate-800 border border-slate-700 text-slate-500 text-sm"
                    },
                    span { class: "font-semibold mr-1", "{step.number()}." }
                    "{step.title()}"
                }
            }
        }
    }
}

#[component]
fn SuiteAndDates(
    draft: ReservationDraft,
    titles: Vec<String>,
    errors: ValidationResult,
    on_edit: EventHandler<DraftEdit>,
) -> Element {
    let options: Vec<SelectOption> = titles.iter().map(|t| SelectOption::plain(t.as_str())).collect();

    rsx! {
        if options.is_empty() {
            div {
                class: "p-4 rounded-lg bg-slate-700/50 border border-slate-600 text-sm text-slate-300",
                "No rooms are available to choose right now. Leave your dates and we will suggest one."
            }
        } else {
            Select {
                label: "Suite",
                value: draft.room_title.clone(),
                options,
                on_change: move |v: String| on_edit.call(DraftEdit::RoomTitle(v)),
            }
        }
        div {
            class: "grid grid-cols-2 gap-4",
            TextInput {
                label: "Check-in",
                input_type: "date",
                value: draft.check_in.clone(),
                required: true,
                error: field_error(&errors, "checkIn"),
                on_change: move |v: String| on_edit.call(DraftEdit::CheckIn(v)),
            }
            TextInput {
                label: "Check-out",
                input_type: "date",
                value: draft.check_out.clone(),
                required: true,
                error: field_error(&errors, "checkOut"),
                on_change: move |v: String| on_edit.call(DraftEdit::CheckOut(v)),
            }
        }
    }
}

#[component]
fn GuestIdentity(
    draft: ReservationDraft,
    errors: ValidationResult,
    on_edit: EventHandler<DraftEdit>,
) -> Element {
    rsx! {
        TextInput {
            label: "Full name",
            value: draft.guest_name.clone(),
            required: true,
            error: field_error(&errors, "guestName"),
            on_change: move |v: String| on_edit.call(DraftEdit::GuestName(v)),
        }
        TextInput {
            label: "Email",
            input_type: "email",
            value: draft.email.clone(),
            required: true,
            error: field_error(&errors, "email"),
            on_change: move |v: String| on_edit.call(DraftEdit::Email(v)),
        }
    }
}

#[component]
fn ContactAndParty(
    draft: ReservationDraft,
    errors: ValidationResult,
    on_edit: EventHandler<DraftEdit>,
) -> Element {
    let members: Vec<SelectOption> = MEMBER_OPTIONS.iter().map(|m| SelectOption::plain(*m)).collect();

    rsx! {
        TextInput {
            label: "Phone",
            input_type: "tel",
            value: draft.phone.clone(),
            required: true,
            error: field_error(&errors, "phone"),
            on_change: move |v: String| on_edit.call(DraftEdit::Phone(v)),
        }
        TextInput {
            label: "Address",
            value: draft.address.clone(),
            required: true,
            error: field_error(&errors, "address"),
            on_change: move |v: String| on_edit.call(DraftEdit::Address(v)),
        }
        Select {
            label: "Party",
            value: draft.members.clone(),
            options: members,
            on_change: move |v: String| on_edit.call(DraftEdit::Members(v)),
        }
    }
}

#[component]
fn ThankYou(message: String) -> Element {
    rsx! {
        div {
            class: "max-w-xl mx-auto px-6 py-20 text-center",
            span { class: "text-5xl", "🎉" }
            h1 { class: "font-serif text-3xl mt-4 mb-3", "Request received" }
            p { class: "text-slate-300 mb-8", "{message}" }
            Link {
                class: "px-5 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold",
                to: Route::Home {},
                "Back to home"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_edit_sets_one_field() {
        let mut draft = ReservationDraft::default();
        DraftEdit::GuestName("Ada".to_string()).apply(&mut draft);
        DraftEdit::CheckIn("2026-11-02".to_string()).apply(&mut draft);

        assert_eq!(draft.guest_name, "Ada");
        assert_eq!(draft.check_in, "2026-11-02");
        assert!(draft.email.is_empty());
    }

    #[test]
    fn test_edits_keep_other_steps() {
        let mut draft = ReservationDraft::default();
        DraftEdit::Email("ada@example.com".to_string()).apply(&mut draft);
        DraftEdit::Members("2 Adults".to_string()).apply(&mut draft);
        DraftEdit::Email("ada@haven.test".to_string()).apply(&mut draft);

        assert_eq!(draft.email, "ada@haven.test");
        assert_eq!(draft.members, "2 Adults");
    }
}
