//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod confirm_draft;
mod preview_draft;
mod submit_request;

pub use confirm_draft::{ConfirmDraftError, ConfirmDraftHandler};
pub use preview_draft::{DraftPreview, PreviewDraftHandler};
pub use submit_request::{
    OrchestratorConfig, SubmitRequestCommand, SubmitRequestError, SubmitRequestHandler,
    SubmitRequestResult,
};
