//! RFP Drafter - Procurement Request Interpreter
//!
//! This crate turns free-form descriptions of procurement needs into
//! structured RFP drafts through a short conversational exchange:
//! pattern-based field extraction, a default-value policy that keeps every
//! draft fully populated, and the turn-taking orchestration around it.
//!
//! Persistence, vendor management, and proposal scoring are external
//! collaborators reached through the `ports` layer; this crate never
//! stores anything itself.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
