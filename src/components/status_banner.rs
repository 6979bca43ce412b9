//! Status Banner Component
//!
//! Inline submit feedback for the auth forms.

use leptos::*;

/// Outcome of a form submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

/// Inline banner reflecting the current submission state. Renders nothing
/// while idle.
#[component]
pub fn StatusBanner(
    #[prop(into)]
    status: Signal<SubmitStatus>,
) -> impl IntoView {
    view! {
        {move || {
            let (icon, text, bg_class) = match status.get() {
                SubmitStatus::Idle => return view! {}.into_view(),
                SubmitStatus::Submitting => {
                    ("…", "Submitting".to_string(), "bg-gray-700 text-gray-300")
                }
                SubmitStatus::Success(message) => ("✓", message, "bg-green-600 text-white"),
                SubmitStatus::Error(message) => ("✕", message, "bg-red-600 text-white"),
            };

            view! {
                <div class=format!(
                    "flex items-center space-x-3 {} px-4 py-3 rounded-lg text-sm font-medium",
                    bg_class
                )>
                    <span class="text-lg">{icon}</span>
                    <span>{text}</span>
                </div>
            }
            .into_view()
        }}
    }
}
