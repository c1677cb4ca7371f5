//! PreviewDraft query handler.
//!
//! Exposes the session's current draft to the confirmation surface, or an
//! empty state when no extraction has completed yet.

use std::sync::Mutex;

use serde::Serialize;

use crate::domain::conversation::ConversationSession;
use crate::domain::rfp::RfpDraft;

/// The current draft as seen by the confirmation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DraftPreview {
    /// No extraction has completed yet.
    Empty,

    /// A draft is ready for confirmation.
    Ready { draft: RfpDraft },
}

impl DraftPreview {
    /// Returns true if a draft is ready.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Returns the draft, if ready.
    pub fn draft(&self) -> Option<&RfpDraft> {
        match self {
            Self::Ready { draft } => Some(draft),
            Self::Empty => None,
        }
    }
}

/// Handler for draft preview queries.
#[derive(Debug, Clone, Default)]
pub struct PreviewDraftHandler;

impl PreviewDraftHandler {
    /// Creates a new handler.
    pub fn new() -> Self {
        Self
    }

    /// Returns the session's current draft state.
    ///
    /// # Panics
    ///
    /// Panics if the session lock is poisoned.
    pub fn handle(&self, session: &Mutex<ConversationSession>) -> DraftPreview {
        let session = session.lock().expect("session lock poisoned");
        match session.current_draft() {
            Some(draft) => DraftPreview::Ready {
                draft: draft.clone(),
            },
            None => DraftPreview::Empty,
        }
    }
}
