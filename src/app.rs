//! App Root Component
//!
//! Routing shell; the marketing chrome is hidden on the dashboard route.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Header};
use crate::pages::{About, Contact, Dashboard, Home, Login, Signup};
use crate::state::session::Session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One session context for the whole tree; pages read and write stored
    // credentials only through it.
    provide_context(Session::browser());

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Everything that needs the router context. Header and footer visibility
/// depends on the current path: the dashboard owns the full viewport.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let chrome_hidden = create_memo(move |_| location.pathname.get() == "/dashboard");

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            {move || (!chrome_hidden.get()).then(|| view! { <Header /> })}

            <main class="flex-1">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/about" view=About />
                    <Route path="/contact" view=Contact />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            {move || (!chrome_hidden.get()).then(|| view! { <Footer /> })}
        </div>
    }
}

/// 404 fallback for unmatched paths.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🤷"</div>
            <h1 class="text-3xl font-bold mb-2">"Nothing here"</h1>
            <p class="text-gray-400 mb-6">"That page doesn't exist, or it moved."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back Home"
            </A>
        </div>
    }
}
