//! Conversation domain module.
//!
//! Models the drafting dialogue: immutable chat messages, the
//! idle/processing turn state machine, and the session aggregate that owns
//! the append-only message log and the current-draft slot.

mod message;
mod session;
mod state;

pub use message::{Message, Role};
pub use session::{ConversationSession, EXAMPLE_PROMPTS, GREETING};
pub use state::SessionState;
