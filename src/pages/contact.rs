//! Contact Page
//!
//! Static contact form. There is no backend endpoint for it; submission
//! only acknowledges locally.

use leptos::*;

/// Contact page component
#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (sent, set_sent) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
        set_sent.set(true);
    };

    view! {
        <div class="container mx-auto px-4 py-16 max-w-xl">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">"Contact"</h1>
                <p class="text-gray-400 mt-2">"Questions or feedback? We read everything."</p>
            </div>

            <form on:submit=on_submit class="space-y-6 bg-gray-800 rounded-xl p-8">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email Address"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Message"</label>
                    <textarea
                        required
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               resize-none"
                    />
                </div>

                {move || sent.get().then(|| view! {
                    <p class="text-sm text-green-400">"Thanks! We'll get back to you soon."</p>
                })}

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
