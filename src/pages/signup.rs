//! Signup Page
//!
//! Account creation form; success shows a banner and then moves to the
//! login page after a short delay.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{StatusBanner, SubmitStatus};

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (status, set_status) = create_signal(SubmitStatus::Idle);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_status.set(SubmitStatus::Submitting);

        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&email_value, &password_value).await {
                Ok(()) => {
                    set_status.set(SubmitStatus::Success(
                        "Account created! Taking you to sign in.".to_string(),
                    ));

                    gloo_timers::callback::Timeout::new(1500, move || {
                        navigate("/login", Default::default());
                    })
                    .forget();
                }
                Err(e) => {
                    set_status.set(SubmitStatus::Error(e));
                }
            }
        });
    };

    view! {
        <div class="min-h-[80vh] flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-gray-800 rounded-xl p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold">"Sign Up"</h1>
                    <p class="text-gray-400 mt-2 text-sm">"Join Converse today."</p>
                </div>

                <form on:submit=on_submit class="space-y-6">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email Address"</label>
                        <input
                            type="email"
                            required
                            placeholder="alex@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <StatusBanner status=status />

                    <button
                        type="submit"
                        disabled=move || status.get() == SubmitStatus::Submitting
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if status.get() == SubmitStatus::Submitting {
                            "Creating account..."
                        } else {
                            "Create Account"
                        }}
                    </button>
                </form>

                <div class="mt-8 text-center text-sm">
                    <span class="text-gray-400">"Already a member? "</span>
                    <a href="/login" class="font-semibold text-primary-400 hover:text-primary-300 transition-colors">
                        "Sign In"
                    </a>
                </div>
            </div>
        </div>
    }
}
