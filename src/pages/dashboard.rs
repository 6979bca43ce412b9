//! Dashboard Page
//!
//! The chat workspace: history sidebar, transcript, and composer with
//! optional speech input. All async orchestration lives here; the pure
//! turn transitions live in `state::chat`.

use leptos::*;
use leptos_router::{use_navigate, Redirect};

use crate::api;
use crate::components::TypingIndicator;
use crate::state::chat::{ChatState, Message, Role, TurnOutcome};
use crate::state::session::{Identity, Session};
use crate::state::speech::{init_speech, SpeechCapability};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    // Signed-out visitors never see chat content.
    match session.email() {
        None => view! { <Redirect path="/login" /> }.into_view(),
        Some(email) => view! { <ChatWorkspace email=email /> }.into_view(),
    }
}

/// The signed-in chat workspace. Owns every piece of transient chat state;
/// navigating away drops and therefore resets all of it.
#[component]
fn ChatWorkspace(email: String) -> impl IntoView {
    let identity = Identity::from_email(&email);
    let state = ChatState::new();
    let speech = store_value(init_speech(state));

    // Initial history fetch. Failure only loses the sidebar list.
    {
        let email = email.clone();
        create_effect(move |_| {
            let email = email.clone();
            spawn_local(async move {
                refresh_history(state, &email).await;
            });
        });
    }

    view! {
        <div class="h-screen bg-gray-900 text-white flex overflow-hidden">
            <Sidebar state=state />
            <div class="flex-1 flex flex-col min-w-0">
                <Topbar state=state identity=identity.clone() />
                <Transcript state=state identity=identity />
                <Composer state=state speech=speech email=email />
            </div>
        </div>
    }
}

async fn refresh_history(state: ChatState, email: &str) {
    match api::fetch_chat_history(email).await {
        Ok(history) => state.history.set(history),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch chat history: {}", e).into());
        }
    }
}

/// Runs one send turn against the backend. A turn already in flight makes
/// this a no-op; New Chat or Load Session racing the reply is resolved by
/// the conversation's generation counter.
fn send_current_message(state: ChatState, email: String) {
    if state.loading.get_untracked() {
        return;
    }

    let input = state.input.get_untracked();
    let mut pending = None;
    state.conversation.update(|conversation| pending = conversation.begin_send(&input));
    let Some(pending) = pending else {
        return;
    };

    state.input.set(String::new());
    state.loading.set(true);

    spawn_local(async move {
        let request = api::AskRequest {
            message: pending.text,
            user_email: email.clone(),
            session_id: pending.session_id,
            system_prompt: api::SYSTEM_PROMPT.to_string(),
        };

        let mut outcome = TurnOutcome::Stale;
        match api::ask(&request).await {
            Ok(reply) => {
                state.conversation.update(|conversation| {
                    outcome =
                        conversation.complete_send(pending.generation, reply.response, reply.session_id);
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Message exchange failed: {}", e).into());
                state.conversation.update(|conversation| {
                    outcome = conversation.fail_send(pending.generation);
                });
            }
        }
        state.loading.set(false);

        // A first exchange was just persisted server-side; pick up its
        // history entry.
        if outcome == TurnOutcome::SessionAssigned {
            refresh_history(state, &email).await;
        }
    });
}

/// Fetches a stored session and swaps it in wholesale. Failure leaves the
/// current transcript untouched.
fn load_session(state: ChatState, session_id: String) {
    let mut generation = 0;
    state.conversation.update(|conversation| generation = conversation.begin_load());
    state.loading.set(true);

    spawn_local(async move {
        match api::fetch_session(&session_id).await {
            Ok(messages) => {
                state.conversation.update(|conversation| {
                    conversation.complete_load(generation, session_id.clone(), messages);
                });
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to load session {}: {}", session_id, e).into(),
                );
            }
        }
        state.loading.set(false);
    });
}

/// History sidebar with New Chat and Logout.
#[component]
fn Sidebar(state: ChatState) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    let new_chat = move |_| {
        state.conversation.update(|conversation| conversation.reset());
        state.input.set(String::new());
    };

    view! {
        <aside class=move || {
            let base = "bg-gray-800 border-r border-gray-700 flex flex-col transition-all duration-300";
            if state.sidebar_open.get() {
                format!("w-64 {}", base)
            } else {
                format!("w-0 overflow-hidden {}", base)
            }
        }>
            // Brand
            <div class="p-4 flex items-center space-x-2">
                <span class="text-2xl">"💬"</span>
                <span class="font-bold text-lg">"Converse"</span>
            </div>

            <div class="px-3">
                <button
                    on:click=new_chat
                    class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium text-left transition-colors"
                >
                    "+ New Chat"
                </button>
            </div>

            // History list
            <nav class="flex-1 overflow-y-auto px-3 py-4 space-y-1">
                {move || {
                    let entries = state.history.get();
                    if entries.is_empty() {
                        view! {
                            <p class="text-sm text-gray-500 px-1">"No conversations yet"</p>
                        }
                        .into_view()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id.clone();
                                let id_for_class = entry.id.clone();
                                view! {
                                    <button
                                        on:click=move |_| load_session(state, id.clone())
                                        class=move || {
                                            let base = "w-full text-left px-3 py-2 rounded-lg text-sm truncate transition-colors";
                                            let active = state.conversation.with(|conversation| {
                                                conversation.session_id() == Some(id_for_class.as_str())
                                            });
                                            if active {
                                                format!("{} bg-gray-700 text-white", base)
                                            } else {
                                                format!("{} text-gray-300 hover:bg-gray-700 hover:text-white", base)
                                            }
                                        }
                                    >
                                        {entry.title}
                                    </button>
                                }
                            })
                            .collect_view()
                    }
                }}
            </nav>

            <div class="p-3 border-t border-gray-700">
                <button
                    on:click=logout
                    class="w-full px-4 py-2 rounded-lg text-gray-300 hover:bg-red-600
                           hover:text-white text-left transition-colors"
                >
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

/// Top bar with sidebar toggle and the signed-in identity.
#[component]
fn Topbar(state: ChatState, identity: Identity) -> impl IntoView {
    view! {
        <header class="h-16 bg-gray-800 border-b border-gray-700 flex items-center justify-between px-6">
            <button
                on:click=move |_| state.sidebar_open.update(|open| *open = !*open)
                class="text-gray-400 hover:text-white transition-colors text-xl"
            >
                "☰"
            </button>

            <div class="flex items-center space-x-3">
                <span class="text-sm text-gray-300">{identity.email.clone()}</span>
                <div class="h-10 w-10 rounded-full bg-primary-600 flex items-center justify-center font-bold">
                    {identity.initials.clone()}
                </div>
            </div>
        </header>
    }
}

/// The conversation transcript.
#[component]
fn Transcript(state: ChatState, identity: Identity) -> impl IntoView {
    let name = identity.name;

    view! {
        <div class="flex-1 overflow-y-auto px-6 py-8 space-y-4">
            {move || {
                let messages = state.conversation.with(|conversation| conversation.messages().to_vec());
                if messages.is_empty() {
                    view! {
                        <div class="h-full flex flex-col items-center justify-center text-center">
                            <div class="text-5xl mb-4">"👋"</div>
                            <h2 class="text-2xl font-semibold">
                                {format!("Hi {}, what can I help with?", name)}
                            </h2>
                            <p class="text-gray-400 mt-2">
                                "Ask a question below, or pick up an old conversation from the sidebar."
                            </p>
                        </div>
                    }
                    .into_view()
                } else {
                    messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message /> })
                        .collect_view()
                }
            }}

            {move || state.loading.get().then(|| view! { <TypingIndicator /> })}
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let from_user = message.role == Role::User;

    view! {
        <div class=move || if from_user { "flex justify-end" } else { "flex justify-start" }>
            <div class=move || format!(
                "max-w-xl px-4 py-3 rounded-2xl {}",
                if from_user { "bg-primary-600 text-white" } else { "bg-gray-800 text-gray-100" }
            )>
                <p class="whitespace-pre-wrap leading-relaxed">{message.content}</p>
            </div>
        </div>
    }
}

/// Message composer with mic toggle and send button.
#[component]
fn Composer(
    state: ChatState,
    speech: StoredValue<SpeechCapability>,
    email: String,
) -> impl IntoView {
    let submit_email = email.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send_current_message(state, submit_email.clone());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_current_message(state, email.clone());
        }
    };

    let speech_available = speech.with_value(|capability| capability.is_available());

    let toggle_listening = move |_| {
        speech.with_value(|capability| {
            let SpeechCapability::Available(recognizer) = capability else {
                return;
            };
            if state.listening.get_untracked() {
                recognizer.stop();
            } else if recognizer.start() {
                state.listening.set(true);
            }
        });
    };

    view! {
        <form on:submit=on_submit class="border-t border-gray-700 bg-gray-800 px-6 py-4">
            <div class="flex items-end space-x-3">
                <button
                    type="button"
                    on:click=toggle_listening
                    disabled=!speech_available
                    title=move || {
                        if !speech_available {
                            "Speech recognition is not supported in this browser"
                        } else if state.listening.get() {
                            "Stop listening"
                        } else {
                            "Start voice input"
                        }
                    }
                    class=move || {
                        let base = "px-3 py-3 rounded-lg text-xl transition-colors";
                        if !speech_available {
                            format!("{} bg-gray-700 text-gray-500 cursor-not-allowed", base)
                        } else if state.listening.get() {
                            format!("{} bg-red-600 text-white animate-pulse", base)
                        } else {
                            format!("{} bg-gray-700 hover:bg-gray-600", base)
                        }
                    }
                >
                    "🎤"
                </button>

                <textarea
                    placeholder="Type a message"
                    rows="1"
                    prop:value=move || state.input.get()
                    on:input=move |ev| state.input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none"
                />

                <button
                    type="submit"
                    disabled=move || state.loading.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                >
                    {move || if state.loading.get() { "Sending" } else { "Send" }}
                </button>
            </div>

            {move || state.listening.get().then(|| view! {
                <p class="mt-2 text-sm text-primary-400">"Listening for your voice"</p>
            })}
        </form>
    }
}
