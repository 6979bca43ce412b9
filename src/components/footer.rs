//! Footer Component
//!
//! Marketing-shell footer. Hidden on the dashboard route.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between text-sm text-gray-400">
                <div class="flex items-center space-x-2">
                    <span class="text-lg">"💬"</span>
                    <span>"Converse. Talk to your assistant anywhere."</span>
                </div>

                <div class="flex items-center space-x-4 mt-4 md:mt-0">
                    <A href="/about" class="hover:text-white transition-colors">"About"</A>
                    <A href="/contact" class="hover:text-white transition-colors">"Contact"</A>
                    <A href="/signup" class="hover:text-white transition-colors">"Get Started"</A>
                </div>
            </div>
        </footer>
    }
}
