//! Loading Component
//!
//! Assistant-typing indicator.

use leptos::*;

/// Three-dot indicator shown while a reply is pending.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="flex items-center space-x-1 bg-gray-800 rounded-2xl px-4 py-3">
                <span class="w-2 h-2 bg-gray-500 rounded-full animate-bounce" />
                <span
                    class="w-2 h-2 bg-gray-500 rounded-full animate-bounce"
                    style="animation-delay: 0.15s"
                />
                <span
                    class="w-2 h-2 bg-gray-500 rounded-full animate-bounce"
                    style="animation-delay: 0.3s"
                />
            </div>
        </div>
    }
}
