// crates/posture-gate-config/src/lib.rs
// ============================================================================
// Module: Posture Gate Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for posture-gate.toml semantics.
// Dependencies: posture-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `posture-gate-config` defines the canonical configuration model for the
//! posture verifier process: the remediation URI handed to endpoints and the
//! message catalog defaults. Loading is strict and fail-closed with hard
//! limits on path and file size.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CatalogConfig;
pub use config::ConfigError;
pub use config::PostureGateConfig;
pub use config::RemediationConfig;
