//! About Page

use leptos::*;

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 max-w-3xl space-y-12">
            <div>
                <h1 class="text-3xl font-bold">"About Converse"</h1>
                <p class="text-gray-400 mt-4 leading-relaxed">
                    "Converse is a lightweight front door to your AI assistant. The app runs
                     entirely in your browser and talks to a backend you control, so your
                     conversations stay on your own infrastructure."
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-4xl mb-2">"🔒"</div>
                    <h3 class="font-medium mb-1">"Your backend"</h3>
                    <p class="text-sm text-gray-400">
                        "Messages are proxied to the service you run; nothing is sent anywhere else."
                    </p>
                </div>

                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-4xl mb-2">"⚡"</div>
                    <h3 class="font-medium mb-1">"Instant UI"</h3>
                    <p class="text-sm text-gray-400">
                        "Your message appears the moment you hit send, while the reply streams in
                         behind it."
                    </p>
                </div>

                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-4xl mb-2">"🗂"</div>
                    <h3 class="font-medium mb-1">"Full history"</h3>
                    <p class="text-sm text-gray-400">
                        "Past sessions are listed by title and reopen with their complete
                         transcript."
                    </p>
                </div>
            </div>
        </div>
    }
}
