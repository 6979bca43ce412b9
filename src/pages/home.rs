//! Home Page
//!
//! Marketing landing page.

use leptos::*;
use leptos_router::*;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 space-y-20">
            // Hero
            <section class="text-center max-w-3xl mx-auto">
                <h1 class="text-5xl font-bold leading-tight">
                    "Your assistant, one conversation away"
                </h1>
                <p class="text-gray-400 mt-6 text-lg">
                    "Converse keeps every chat in one place: ask anything, pick up old
                     conversations where you left them, and dictate instead of typing."
                </p>
                <div class="mt-10 flex items-center justify-center space-x-4">
                    <A
                        href="/signup"
                        class="px-8 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                    >
                        "Get Started"
                    </A>
                    <A
                        href="/login"
                        class="px-8 py-3 bg-gray-800 hover:bg-gray-700 rounded-lg font-semibold transition-colors"
                    >
                        "Sign In"
                    </A>
                </div>
            </section>

            // Feature cards
            <section class="grid md:grid-cols-3 gap-8">
                <FeatureCard
                    icon="💬"
                    title="Chat that remembers"
                    body="Every exchange is saved to your account, so context never gets lost
                          between visits."
                />
                <FeatureCard
                    icon="📚"
                    title="Resume any conversation"
                    body="Your history sits one click away in the sidebar. Open a past session
                          and keep going."
                />
                <FeatureCard
                    icon="🎤"
                    title="Speak instead of type"
                    body="On supported browsers, tap the mic and dictate your message. The
                          transcript lands straight in the composer."
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-sm text-gray-400 leading-relaxed">{body}</p>
        </div>
    }
}
