//! State Management
//!
//! Session context, conversation state, and speech input capability.

pub mod chat;
pub mod session;
pub mod speech;

pub use chat::{ChatState, Conversation, ConversationSummary, Message, Role};
pub use session::{Identity, Session};
pub use speech::{init_speech, SpeechCapability};
