//! Header Component
//!
//! Marketing-shell navigation bar. Hidden on the dashboard route.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"Converse"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/about" label="About" />
                        <NavLink href="/contact" label="Contact" />
                    </div>

                    // Auth actions
                    <div class="flex items-center space-x-2">
                        <A
                            href="/login"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Sign In"
                        </A>
                        <A
                            href="/signup"
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium transition-colors"
                        >
                            "Sign Up"
                        </A>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
