//! Application layer - use-case handlers over the domain.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! One handler per use case: submitting a turn, previewing the draft, and
//! confirming it to the persistence service.

pub mod handlers;

pub use handlers::{
    ConfirmDraftError, ConfirmDraftHandler, DraftPreview, OrchestratorConfig,
    PreviewDraftHandler, SubmitRequestCommand, SubmitRequestError, SubmitRequestHandler,
    SubmitRequestResult,
};
