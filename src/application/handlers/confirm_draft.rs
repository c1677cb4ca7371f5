//! ConfirmDraft command handler.
//!
//! On explicit confirmation, forwards the session's current draft verbatim
//! to the external persistence service and returns the identity it minted.
//! No retry and no re-validation beyond what the compiler already
//! guarantees.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::domain::conversation::ConversationSession;
use crate::ports::{CreatedRfp, RfpRepository};

/// Errors that can occur when confirming a draft.
#[derive(Debug, Clone, Error)]
pub enum ConfirmDraftError {
    /// No extraction has completed yet.
    #[error("No draft is ready to confirm")]
    DraftMissing,

    /// A submission is still being interpreted.
    #[error("A submission is still being processed")]
    StillProcessing,

    /// The persistence service failed; surfaced, never retried here.
    #[error("Persistence service error: {0}")]
    Repository(String),
}

/// Handler for ConfirmDraft commands.
pub struct ConfirmDraftHandler<R: RfpRepository> {
    repository: Arc<R>,
}

impl<R: RfpRepository> ConfirmDraftHandler<R> {
    /// Creates a handler forwarding to the given persistence port.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Confirms the session's current draft.
    ///
    /// # Panics
    ///
    /// Panics if the session lock is poisoned.
    pub async fn handle(
        &self,
        session: &Mutex<ConversationSession>,
    ) -> Result<CreatedRfp, ConfirmDraftError> {
        let (session_id, draft) = {
            let session = session.lock().expect("session lock poisoned");
            if session.state().is_processing() {
                return Err(ConfirmDraftError::StillProcessing);
            }
            let draft = session
                .current_draft()
                .cloned()
                .ok_or(ConfirmDraftError::DraftMissing)?;
            (session.id(), draft)
        };

        let created = self
            .repository
            .create_draft(&draft)
            .await
            .map_err(|e| ConfirmDraftError::Repository(e.to_string()))?;

        tracing::info!(
            "session {}: draft confirmed as RFP {} ({})",
            session_id,
            created.id,
            draft.title
        );
        Ok(created)
    }
}
