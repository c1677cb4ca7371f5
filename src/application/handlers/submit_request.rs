//! SubmitRequest command handler - the conversation orchestrator.
//!
//! Drives one turn: append the user message, wait out the processing
//! delay, compile the draft, store it, and append the assistant summary.
//! The session lock is released for the duration of the delay; the
//! session's `Processing` state is what rejects concurrent turns.

use std::sync::Mutex;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

use crate::domain::conversation::ConversationSession;
use crate::domain::foundation::{DomainError, ErrorCode, MessageId};
use crate::domain::rfp::{RequestCompiler, RfpDraft};

/// Configuration for the conversation orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Simulated interpretation latency per turn. A pacing device, not
    /// computation cost; tests set it to zero.
    pub processing_delay: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(1500),
        }
    }
}

impl OrchestratorConfig {
    /// Sets the processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }
}

/// Command to submit one turn of request text.
#[derive(Debug, Clone)]
pub struct SubmitRequestCommand {
    /// The raw free-form request text.
    pub content: String,
}

impl SubmitRequestCommand {
    /// Creates a new submit command.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Errors that can occur when submitting a turn.
///
/// A rejected submission leaves the session untouched; callers that want
/// the original silent no-op behavior simply discard the error.
#[derive(Debug, Clone, Error)]
pub enum SubmitRequestError {
    /// Submission text is empty or whitespace only.
    #[error("Validation error: submission text cannot be empty")]
    EmptyContent,

    /// A previous submission is still being interpreted.
    #[error("A submission is already being processed")]
    AlreadyProcessing,

    /// Domain error outside the two expected rejections.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<DomainError> for SubmitRequestError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SubmitRequestError::EmptyContent,
            ErrorCode::InvalidStateTransition => SubmitRequestError::AlreadyProcessing,
            _ => SubmitRequestError::Domain(err.to_string()),
        }
    }
}

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct SubmitRequestResult {
    /// ID of the appended user message.
    pub user_message_id: MessageId,
    /// ID of the appended assistant summary message.
    pub assistant_message_id: MessageId,
    /// The draft now stored as the session's current draft.
    pub draft: RfpDraft,
}

/// Handler for SubmitRequest commands.
#[derive(Debug, Clone)]
pub struct SubmitRequestHandler {
    compiler: RequestCompiler,
    config: OrchestratorConfig,
}

impl SubmitRequestHandler {
    /// Creates a handler with the given orchestration config.
    pub fn new(config: OrchestratorConfig) -> Self {
        Self {
            compiler: RequestCompiler::new(),
            config,
        }
    }

    /// Handles one submission against the given session.
    ///
    /// The user message is appended synchronously before the delay starts,
    /// so observers see the turn immediately. At most one submission is in
    /// flight per session; a second one is rejected with
    /// [`SubmitRequestError::AlreadyProcessing`] and leaves no trace.
    ///
    /// # Panics
    ///
    /// Panics if the session lock is poisoned.
    pub async fn handle(
        &self,
        session: &Mutex<ConversationSession>,
        cmd: SubmitRequestCommand,
    ) -> Result<SubmitRequestResult, SubmitRequestError> {
        let content = cmd.content;

        let (session_id, user_message_id) = {
            let mut session = session.lock().expect("session lock poisoned");
            let message = session.begin_turn(content.as_str())?;
            let id = *message.id();
            (session.id(), id)
        };
        tracing::debug!("session {}: submission accepted, interpreting", session_id);

        if !self.config.processing_delay.is_zero() {
            sleep(self.config.processing_delay).await;
        }

        let draft = self.compiler.compile(&content);

        let assistant_message_id = {
            let mut session = session.lock().expect("session lock poisoned");
            let message = session
                .complete_turn(draft.clone())
                .map_err(|e| SubmitRequestError::Domain(e.to_string()))?;
            *message.id()
        };
        tracing::info!("session {}: draft compiled: {}", session_id, draft.title);

        Ok(SubmitRequestResult {
            user_message_id,
            assistant_message_id,
            draft,
        })
    }
}
