//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the interpreter core and the outside world. The core persists nothing
//! itself: the RFP persistence service sits behind `RfpRepository`.

mod rfp_repository;

pub use rfp_repository::{CreatedRfp, RfpRepository, RfpStatus};
