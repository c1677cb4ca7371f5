//! Conversation session aggregate.
//!
//! A session owns an append-only message log and a single current-draft
//! slot. The turn guards live here so they hold for any caller: a
//! submission is only accepted while idle and with non-empty text, and a
//! rejected submission leaves the session untouched.

use crate::domain::conversation::{Message, SessionState};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StateMachine, Timestamp};
use crate::domain::rfp::RfpDraft;

/// Greeting the assistant opens every session with.
pub const GREETING: &str = "Hi! I'm your AI assistant for creating RFPs. Describe what you \
     need to procure, including details like quantities, specifications, budget, and \
     timeline. I'll help structure it into a professional RFP.";

/// Canned starter prompts a host can offer on an empty chat.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "I need to procure laptops and monitors for our new office. Budget is $50,000 total. \
     Need delivery within 30 days.",
    "Looking for office furniture - 20 ergonomic chairs and 10 standing desks. Budget \
     around $15,000.",
    "We need cloud hosting services for our startup. Looking for enterprise tier with \
     99.9% uptime guarantee.",
];

/// One buyer's drafting conversation.
///
/// Sessions are independent value objects: each owns its log and draft
/// slot exclusively, so hosts running several sessions share nothing.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: SessionId,
    messages: Vec<Message>,
    state: SessionState,
    current_draft: Option<RfpDraft>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ConversationSession {
    /// Creates a new idle session, seeded with the assistant greeting so
    /// the log renders as chat history immediately.
    pub fn new() -> Self {
        let now = Timestamp::now();
        let greeting = Message::assistant(GREETING).expect("greeting is non-empty");
        Self {
            id: SessionId::new(),
            messages: vec![greeting],
            state: SessionState::Idle,
            current_draft: None,
            created_at: now,
            updated_at: now,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The full message log, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The latest structured interpretation, if a turn has completed.
    pub fn current_draft(&self) -> Option<&RfpDraft> {
        self.current_draft.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    // === Turn management ===

    /// Accepts a submission: appends the user message and transitions to
    /// `Processing`.
    ///
    /// Rejection leaves the session exactly as it was - no message is
    /// appended and the state does not change.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is empty or whitespace-only
    /// - `InvalidStateTransition` if a submission is already processing
    pub fn begin_turn(&mut self, content: impl Into<String>) -> Result<&Message, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                "content",
                "Submission text cannot be empty",
            ));
        }
        if !self.state.can_transition_to(&SessionState::Processing) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot accept a submission while {:?}", self.state),
            ));
        }

        let message = Message::user(content)?;
        self.messages.push(message);
        self.state = SessionState::Processing;
        self.updated_at = Timestamp::now();
        Ok(self.messages.last().expect("message was just appended"))
    }

    /// Completes the current turn: stores the draft (replacing any prior
    /// draft in full), appends the assistant summary message, and
    /// transitions back to `Idle`.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no submission is being processed
    pub fn complete_turn(&mut self, draft: RfpDraft) -> Result<&Message, DomainError> {
        if !self.state.can_transition_to(&SessionState::Idle) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No submission is being processed",
            ));
        }

        let summary = draft.confirmation_summary();
        self.current_draft = Some(draft);

        let message = Message::assistant(summary)?;
        self.messages.push(message);
        self.state = SessionState::Idle;
        self.updated_at = Timestamp::now();
        Ok(self.messages.last().expect("message was just appended"))
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
