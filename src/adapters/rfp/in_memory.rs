//! In-memory RFP repository for testing.
//!
//! Stands in for the external persistence service: mints identities,
//! assigns the `Draft` lifecycle state, and keeps what it received for
//! assertions.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RfpId, Timestamp};
use crate::domain::rfp::RfpDraft;
use crate::ports::{CreatedRfp, RfpRepository, RfpStatus};

/// In-memory stand-in for the RFP persistence service.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemoryRfpRepository {
    created: RwLock<Vec<(CreatedRfp, RfpDraft)>>,
    fail: bool,
}

impl InMemoryRfpRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            created: RwLock::new(Vec::new()),
            fail: false,
        }
    }

    /// Creates a repository whose every call fails, for error-path tests.
    pub fn failing() -> Self {
        Self {
            created: RwLock::new(Vec::new()),
            fail: true,
        }
    }

    // === Test Helpers ===

    /// Returns the number of drafts received.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn created_count(&self) -> usize {
        self.created
            .read()
            .expect("InMemoryRfpRepository: lock poisoned")
            .len()
    }

    /// Returns all received drafts, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn drafts(&self) -> Vec<RfpDraft> {
        self.created
            .read()
            .expect("InMemoryRfpRepository: lock poisoned")
            .iter()
            .map(|(_, draft)| draft.clone())
            .collect()
    }

    /// Returns the acknowledgement for the most recent draft.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn last_created(&self) -> Option<CreatedRfp> {
        self.created
            .read()
            .expect("InMemoryRfpRepository: lock poisoned")
            .last()
            .map(|(created, _)| created.clone())
    }

    /// Checks whether a draft with the given title was received.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn has_draft_titled(&self, title: &str) -> bool {
        self.created
            .read()
            .expect("InMemoryRfpRepository: lock poisoned")
            .iter()
            .any(|(_, draft)| draft.title == title)
    }

    /// Clears everything received (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.created
            .write()
            .expect("InMemoryRfpRepository: lock poisoned")
            .clear();
    }
}

impl Default for InMemoryRfpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RfpRepository for InMemoryRfpRepository {
    async fn create_draft(&self, draft: &RfpDraft) -> Result<CreatedRfp, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::RepositoryError,
                "simulated persistence failure",
            ));
        }

        let created = CreatedRfp {
            id: RfpId::new(),
            status: RfpStatus::Draft,
            created_at: Timestamp::now(),
        };
        self.created
            .write()
            .expect("InMemoryRfpRepository: lock poisoned")
            .push((created.clone(), draft.clone()));
        Ok(created)
    }
}
