//! Conversation State
//!
//! The chat dashboard's client-side state machine: the message transcript,
//! active-session tracking, and the turn lifecycle for exchanges with the
//! backend.

use leptos::*;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript. Never mutated after append.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// One resumable conversation in the history sidebar.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
}

/// Fixed assistant-role text inserted when an exchange fails.
pub const CONNECTION_ERROR: &str = "Connection error. Ensure your backend is running.";

/// Handle for one in-flight send: what to post, plus the generation that
/// decides whether the eventual completion still applies.
#[derive(Clone, Debug)]
pub struct PendingSend {
    pub generation: u64,
    pub text: String,
    pub session_id: Option<String>,
}

/// What happened when a turn completion was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The completion was applied to the current conversation.
    Applied,
    /// Applied, and the backend assigned a session id to a previously
    /// unsaved conversation. The history list should be re-fetched.
    SessionAssigned,
    /// A newer send, load, or reset superseded this turn; nothing changed.
    Stale,
}

/// The active conversation: ordered transcript plus session identity.
///
/// Every operation that starts an asynchronous turn bumps the generation
/// counter and captures it; a completion is applied only while its captured
/// generation is still current. Overlapping turns therefore resolve to
/// "latest wins" instead of racing on the transcript.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    session_id: Option<String>,
    generation: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// `None` until the backend persists the conversation and assigns an id.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Begins a send turn: appends the user message optimistically and
    /// returns the request handle. Empty or whitespace-only input is
    /// rejected and leaves the transcript untouched.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingSend> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.generation += 1;
        self.messages.push(Message {
            role: Role::User,
            content: text.to_string(),
        });

        Some(PendingSend {
            generation: self.generation,
            text: text.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Applies a successful reply for the turn started at `generation`.
    pub fn complete_send(
        &mut self,
        generation: u64,
        response: String,
        session_id: Option<String>,
    ) -> TurnOutcome {
        if generation != self.generation {
            return TurnOutcome::Stale;
        }

        self.messages.push(Message {
            role: Role::Assistant,
            content: response,
        });

        if self.session_id.is_none() {
            if let Some(id) = session_id {
                self.session_id = Some(id);
                return TurnOutcome::SessionAssigned;
            }
        }
        TurnOutcome::Applied
    }

    /// Records a failed exchange as a fixed assistant-role error message in
    /// place of the reply.
    pub fn fail_send(&mut self, generation: u64) -> TurnOutcome {
        if generation != self.generation {
            return TurnOutcome::Stale;
        }

        self.messages.push(Message {
            role: Role::Assistant,
            content: CONNECTION_ERROR.to_string(),
        });
        TurnOutcome::Applied
    }

    /// Starts a fresh unsaved conversation. Invalidates in-flight turns.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.messages.clear();
        self.session_id = None;
    }

    /// Begins loading a stored session, returning the captured generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replaces the transcript wholesale with a fetched session. A failed
    /// fetch never reaches this point, leaving prior state unchanged.
    pub fn complete_load(
        &mut self,
        generation: u64,
        session_id: String,
        messages: Vec<Message>,
    ) -> TurnOutcome {
        if generation != self.generation {
            return TurnOutcome::Stale;
        }

        self.messages = messages;
        self.session_id = Some(session_id);
        TurnOutcome::Applied
    }
}

/// Reactive state owned by the dashboard page. Dropped, and therefore
/// reset, when the user navigates away.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub conversation: RwSignal<Conversation>,
    pub history: RwSignal<Vec<ConversationSummary>>,
    pub input: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub listening: RwSignal<bool>,
    pub sidebar_open: RwSignal<bool>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            conversation: create_rw_signal(Conversation::new()),
            history: create_rw_signal(Vec::new()),
            input: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            listening: create_rw_signal(false),
            sidebar_open: create_rw_signal(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(
        conversation: &mut Conversation,
        send: &PendingSend,
        text: &str,
        session: Option<&str>,
    ) -> TurnOutcome {
        conversation.complete_send(send.generation, text.to_string(), session.map(String::from))
    }

    #[test]
    fn successful_round_trip_appends_user_then_assistant() {
        let mut conversation = Conversation::new();

        let send = conversation.begin_send("Hello").unwrap();
        assert_eq!(
            conversation.messages(),
            [Message {
                role: Role::User,
                content: "Hello".to_string()
            }]
        );

        let outcome = reply(&mut conversation, &send, "Hi there!", Some("s1"));
        assert_eq!(outcome, TurnOutcome::SessionAssigned);
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].role, Role::Assistant);
        assert_eq!(conversation.messages()[1].content, "Hi there!");
        assert_eq!(conversation.session_id(), Some("s1"));
    }

    #[test]
    fn empty_and_whitespace_input_are_rejected() {
        let mut conversation = Conversation::new();
        assert!(conversation.begin_send("").is_none());
        assert!(conversation.begin_send("   \n\t").is_none());
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn input_is_trimmed_before_sending() {
        let mut conversation = Conversation::new();
        let send = conversation.begin_send("  Hello  ").unwrap();
        assert_eq!(send.text, "Hello");
        assert_eq!(conversation.messages()[0].content, "Hello");
    }

    #[test]
    fn failed_round_trip_inserts_fixed_error_text() {
        let mut conversation = Conversation::new();
        let send = conversation.begin_send("Hello").unwrap();

        assert_eq!(conversation.fail_send(send.generation), TurnOutcome::Applied);
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(
            conversation.messages()[1],
            Message {
                role: Role::Assistant,
                content: CONNECTION_ERROR.to_string()
            }
        );
        assert_eq!(conversation.session_id(), None);
    }

    #[test]
    fn existing_session_is_kept_on_reply() {
        let mut conversation = Conversation::new();
        let generation = conversation.begin_load();
        conversation.complete_load(generation, "s1".to_string(), Vec::new());

        let send = conversation.begin_send("More").unwrap();
        assert_eq!(send.session_id.as_deref(), Some("s1"));

        let outcome = reply(&mut conversation, &send, "Sure.", Some("s1"));
        assert_eq!(outcome, TurnOutcome::Applied);
        assert_eq!(conversation.session_id(), Some("s1"));
    }

    #[test]
    fn reset_clears_transcript_and_session() {
        let mut conversation = Conversation::new();
        let send = conversation.begin_send("Hello").unwrap();
        reply(&mut conversation, &send, "Hi!", Some("s1"));

        conversation.reset();
        assert!(conversation.messages().is_empty());
        assert_eq!(conversation.session_id(), None);
    }

    #[test]
    fn reply_arriving_after_reset_is_discarded() {
        let mut conversation = Conversation::new();
        let send = conversation.begin_send("Hello").unwrap();

        conversation.reset();
        assert_eq!(
            reply(&mut conversation, &send, "too late", Some("s1")),
            TurnOutcome::Stale
        );
        assert!(conversation.messages().is_empty());
        assert_eq!(conversation.session_id(), None);
    }

    #[test]
    fn load_replaces_transcript_wholesale() {
        let mut conversation = Conversation::new();
        conversation.begin_send("draft question").unwrap();

        let fetched = vec![
            Message {
                role: Role::User,
                content: "old question".to_string(),
            },
            Message {
                role: Role::Assistant,
                content: "old answer".to_string(),
            },
        ];

        let generation = conversation.begin_load();
        let outcome = conversation.complete_load(generation, "s7".to_string(), fetched.clone());
        assert_eq!(outcome, TurnOutcome::Applied);
        assert_eq!(conversation.messages(), fetched.as_slice());
        assert_eq!(conversation.session_id(), Some("s7"));
    }

    #[test]
    fn load_supersedes_in_flight_send() {
        let mut conversation = Conversation::new();
        let send = conversation.begin_send("Hello").unwrap();
        let generation = conversation.begin_load();

        // The older send resolves first but no longer applies.
        assert_eq!(
            reply(&mut conversation, &send, "late reply", None),
            TurnOutcome::Stale
        );

        let outcome = conversation.complete_load(generation, "s2".to_string(), Vec::new());
        assert_eq!(outcome, TurnOutcome::Applied);
        assert_eq!(conversation.session_id(), Some("s2"));
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn stale_load_does_not_clobber_newer_load() {
        let mut conversation = Conversation::new();
        let first = conversation.begin_load();
        let second = conversation.begin_load();

        let stale = vec![Message {
            role: Role::User,
            content: "stale".to_string(),
        }];
        assert_eq!(
            conversation.complete_load(first, "old".to_string(), stale),
            TurnOutcome::Stale
        );

        assert_eq!(
            conversation.complete_load(second, "new".to_string(), Vec::new()),
            TurnOutcome::Applied
        );
        assert_eq!(conversation.session_id(), Some("new"));
        assert!(conversation.messages().is_empty());
    }
}
