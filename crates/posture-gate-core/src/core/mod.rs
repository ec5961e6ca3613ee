// crates/posture-gate-core/src/core/mod.rs
// ============================================================================
// Module: Posture Gate Core Types
// Description: Canonical assessment-state data structures.
// Purpose: Provide stable, serializable types for the per-connection record.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Posture Gate core types define the per-connection assessment evidence:
//! identifiers, the recommendation pair, OS identity, the package ledger,
//! the settings violation mask, the localized message catalog, and the
//! synthesized message records. These types are the canonical source of
//! truth for anything the enforcement layer consumes.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod identifiers;
pub mod ledger;
pub mod messages;
pub mod os;
pub mod recommendation;
pub mod settings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::LangTag;
pub use catalog::LocalizedText;
pub use catalog::MessageCatalog;
pub use catalog::MessageKey;
pub use identifiers::ConnectionId;
pub use identifiers::DeviceId;
pub use ledger::PackageCounts;
pub use ledger::PackageLedger;
pub use ledger::PackageState;
pub use messages::ReasonString;
pub use messages::RemediationInstruction;
pub use messages::RemediationString;
pub use os::ConnectionPhase;
pub use os::OsIdentity;
pub use os::OsType;
pub use recommendation::ActionRecommendation;
pub use recommendation::EvaluationResult;
pub use recommendation::Recommendation;
pub use settings::SettingsViolation;
pub use settings::SettingsViolations;
