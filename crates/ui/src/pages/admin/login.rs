//! Admin Login Page
//!
//! Signs the operator in through the configured [`Authenticator`] and
//! stores the session in the context signal provided by `App`.
//!
//! [`Authenticator`]: haven_client::Authenticator

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::TextInput;
use crate::services::use_services;
use crate::state::{active_session, use_session};

#[component]
pub fn AdminLoginPage() -> Element {
    let services = use_services();
    let mut session = use_session();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut signing_in = use_signal(|| false);

    let mut do_sign_in = move || {
        if *signing_in.peek() {
            return;
        }
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Enter your username and password".to_string()));
            return;
        }
        error.set(None);
        signing_in.set(true);

        let auth = services.auth.clone();
        spawn(async move {
            match auth.sign_in(&user, &pass).await {
                Ok(new_session) => {
                    tracing::info!(operator = %new_session.operator, provider = auth.kind(), "operator signed in");
                    session.set(Some(new_session));
                    signing_in.set(false);
                    nav.push(Route::Admin {});
                }
                Err(err) => {
                    tracing::warn!(provider = auth.kind(), error = %err, "sign-in failed");
                    signing_in.set(false);
                    password.set(String::new());
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let already_signed_in = active_session(&session.read()).map(|s| s.operator.clone());
    let busy = *signing_in.read();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center px-6",

            form {
                class: "w-full max-w-sm bg-slate-800 rounded-xl border border-slate-700 p-8 flex flex-col gap-4",
                onsubmit: move |e| {
                    e.prevent_default();
                    do_sign_in();
                },

                div {
                    class: "text-center mb-2",
                    span { class: "text-3xl", "🏨" }
                    h1 { class: "text-xl font-bold mt-2", "Haven back-office" }
                    p { class: "text-sm text-slate-400", "Staff sign-in" }
                }

                if let Some(operator) = already_signed_in {
                    div {
                        class: "p-3 rounded-lg bg-emerald-500/10 border border-emerald-500/30 text-sm text-emerald-300",
                        "Signed in as {operator}. "
                        Link { class: "underline", to: Route::Admin {}, "Open the dashboard" }
                    }
                }

                TextInput {
                    label: "Username",
                    value: username.read().clone(),
                    placeholder: "admin or you@haven.test",
                    disabled: busy,
                    on_change: move |v: String| username.set(v),
                }
                TextInput {
                    label: "Password",
                    input_type: "password",
                    value: password.read().clone(),
                    disabled: busy,
                    on_change: move |v: String| password.set(v),
                }

                if let Some(message) = error.read().clone() {
                    p { class: "text-sm text-rose-400", "{message}" }
                }

                button {
                    r#type: "submit",
                    class: "mt-2 px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-500 disabled:opacity-50 font-semibold",
                    disabled: busy,
                    if busy { "Signing in…" } else { "Sign in" }
                }

                Link {
                    class: "text-center text-xs text-slate-500 hover:text-slate-300",
                    to: Route::Home {},
                    "← Back to the website"
                }
            }
        }
    }
}
