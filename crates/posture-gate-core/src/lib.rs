// crates/posture-gate-core/src/lib.rs
// ============================================================================
// Module: Posture Gate Core Library
// Description: Public API surface for the Posture Gate core.
// Purpose: Expose the per-connection assessment-state engine.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Posture Gate core is the per-connection assessment-state engine of an
//! endpoint-posture verifier in a NAC handshake. It accumulates package and
//! OS-settings violation evidence for one connection, tracks the current
//! access recommendation, and synthesizes localized reason and remediation
//! messages for the enforcement point. It performs no I/O and integrates
//! through explicit types rather than embedding into the transport layer.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use runtime::ConnectionState;
pub use runtime::RemediationError;
pub use runtime::has_findings;
pub use runtime::negotiate_language;
