//! # Inquiry Form
//!
//! Shared by the offer and package detail pages. The inquiry is stored as a
//! booking (see `haven_model::inquiry`), so it lands in the admin bookings
//! tab alongside wizard reservations.

use dioxus::prelude::*;
use haven_client::bookings::apply_submitted;
use haven_client::submit_booking;
use haven_model::{InquiryForm, InquirySubject, MEMBER_OPTIONS, ValidationResult};

use crate::components::inputs::{Select, SelectOption, TextArea, TextInput, field_error};
use crate::services::use_services;
use crate::state::{APP_STATE, report_failure};

#[component]
pub fn InquiryPanel(subject: InquirySubject) -> Element {
    let services = use_services();
    let mut form = use_signal(|| InquiryForm::new(subject.clone()));
    let mut errors = use_signal(ValidationResult::ok);

    let send = move |_| {
        let attempt = form.write().begin_send();
        let booking = match attempt {
            Ok(booking) => booking,
            Err(_) => {
                errors.set(form.read().draft.check());
                return;
            }
        };
        errors.set(ValidationResult::ok());
        let key = form.read().idempotency_key();
        let api = services.api.clone();

        spawn(async move {
            match submit_booking(&api.bookings(), &booking, &key).await {
                Ok(_) => {
                    apply_submitted(&mut APP_STATE.write().cache);
                    form.write().complete();
                }
                Err(err) => {
                    form.write().fail();
                    report_failure("Sending your inquiry", &err);
                }
            }
        });
    };

    let current = form.read().clone();
    let errs = errors.read().clone();
    let guests: Vec<SelectOption> = MEMBER_OPTIONS.iter().map(|m| SelectOption::plain(*m)).collect();

    if current.is_sent() {
        return rsx! {
            div {
                class: "bg-emerald-500/10 border border-emerald-500/40 rounded-xl p-6",
                h3 { class: "text-lg font-semibold text-emerald-300", "Inquiry sent" }
                p {
                    class: "text-sm text-slate-300 mt-1",
                    "Thank you {current.draft.name}. Our team will contact you about {current.subject.title} shortly."
                }
            }
        };
    }

    let draft = current.draft.clone();
    let sending = current.is_sending();

    rsx! {
        div {
            class: "bg-slate-800 rounded-xl border border-slate-700 p-6 flex flex-col gap-4",
            h3 { class: "text-lg font-semibold", "Enquire about {current.subject.title}" }

            TextInput {
                label: "Full name",
                value: draft.name.clone(),
                required: true,
                error: field_error(&errs, "name"),
                on_change: move |v: String| form.write().draft.name = v,
            }
            div {
                class: "grid grid-cols-2 gap-4",
                TextInput {
                    label: "Email",
                    input_type: "email",
                    value: draft.email.clone(),
                    required: true,
                    error: field_error(&errs, "email"),
                    on_change: move |v: String| form.write().draft.email = v,
                }
                TextInput {
                    label: "Phone",
                    value: draft.phone.clone(),
                    required: true,
                    error: field_error(&errs, "phone"),
                    on_change: move |v: String| form.write().draft.phone = v,
                }
                TextInput {
                    label: "Check-in",
                    input_type: "date",
                    value: draft.check_in.clone(),
                    required: true,
                    error: field_error(&errs, "checkIn"),
                    on_change: move |v: String| form.write().draft.check_in = v,
                }
                TextInput {
                    label: "Check-out",
                    input_type: "date",
                    value: draft.check_out.clone(),
                    required: true,
                    error: field_error(&errs, "checkOut"),
                    on_change: move |v: String| form.write().draft.check_out = v,
                }
            }
            Select {
                label: "Guests",
                value: draft.guests.clone(),
                options: guests,
                on_change: move |v: String| form.write().draft.guests = v,
            }
            TextArea {
                label: "Message",
                value: draft.message.clone(),
                rows: 3,
                placeholder: "Anything we should know?",
                on_change: move |v: String| form.write().draft.message = v,
            }

            button {
                class: "self-start px-5 py-2 rounded-lg bg-amber-500 hover:bg-amber-400 text-slate-900 font-semibold disabled:opacity-50",
                disabled: sending,
                onclick: send,
                if sending { "Sending…" } else { "Send inquiry" }
            }
        }
    }
}
