//! RFP persistence port.
//!
//! The external service owns identity assignment and the RFP lifecycle;
//! the interpreter only hands over finished drafts on confirmation.

use crate::domain::foundation::{DomainError, RfpId, Timestamp};
use crate::domain::rfp::RfpDraft;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Lifecycle state the persistence service assigns to an RFP.
///
/// A freshly confirmed draft starts as `Draft`; the rest of the lifecycle
/// advances on the service's side as the RFP is sent out and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfpStatus {
    Draft,
    Sent,
    ReceivingResponses,
    Completed,
}

/// The persistence service's acknowledgement of a confirmed draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRfp {
    /// Identity minted by the service.
    pub id: RfpId,
    /// Assigned lifecycle state.
    pub status: RfpStatus,
    /// When the service recorded the RFP.
    pub created_at: Timestamp,
}

/// Port for the external RFP persistence service.
#[async_trait]
pub trait RfpRepository: Send + Sync {
    /// Accepts a finished draft verbatim and mints its identity and
    /// lifecycle state.
    ///
    /// # Errors
    ///
    /// - `RepositoryError` on persistence failure
    async fn create_draft(&self, draft: &RfpDraft) -> Result<CreatedRfp, DomainError>;
}
