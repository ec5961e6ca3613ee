// crates/posture-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Posture Gate Runtime
// Description: Connection record and message synthesis logic.
// Purpose: Turn accumulated evidence into localized, wire-ready messages.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime side of Posture Gate owns the mutable per-connection record
//! and the deterministic synthesis paths: language negotiation, reason
//! building, and remediation building. All work is in-memory and completes
//! synchronously.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod connection;
pub mod language;
pub mod reason;
pub mod remediation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use connection::ConnectionState;
pub use language::negotiate_language;
pub use reason::build_reason;
pub use reason::has_findings;
pub use remediation::RemediationError;
pub use remediation::build_remediation;
