// crates/posture-gate-core/src/runtime/reason.rs
// ============================================================================
// Module: Posture Gate Reason Builder
// Description: Synthesis of the localized reason message.
// Purpose: Turn accumulated violation evidence into one encoded reason string.
// Dependencies: crate::core::{catalog, ledger, messages, settings}
// ============================================================================

//! ## Overview
//! The reason builder condenses the package counters and the settings
//! violation mask into at most two localized fragments: one for package
//! findings, one for settings findings. Fragments are encoded in append
//! order, joined by a single newline. A cycle without findings yields no
//! message; that is a valid negative outcome, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::CatalogError;
use crate::core::catalog::LangTag;
use crate::core::catalog::MessageCatalog;
use crate::core::catalog::MessageKey;
use crate::core::ledger::PackageCounts;
use crate::core::messages::ReasonString;
use crate::core::settings::SettingsViolations;

// ============================================================================
// SECTION: Trigger Condition
// ============================================================================

/// Returns true when the accumulated evidence warrants a reason or
/// remediation message.
#[must_use]
pub const fn has_findings(counts: PackageCounts, settings: SettingsViolations) -> bool {
    counts.update > 0 || counts.blacklist > 0 || !settings.is_empty()
}

// ============================================================================
// SECTION: Reason Synthesis
// ============================================================================

/// Builds the localized reason message for the accumulated evidence.
///
/// Returns `None` when there is nothing to report.
///
/// # Errors
///
/// Returns [`CatalogError`] when a required message table is missing from
/// the catalog.
pub fn build_reason(
    catalog: &MessageCatalog,
    language: &LangTag,
    counts: PackageCounts,
    settings: SettingsViolations,
) -> Result<Option<ReasonString>, CatalogError> {
    if !has_findings(counts, settings) {
        return Ok(None);
    }

    let mut fragments = Vec::new();
    if counts.update > 0 || counts.blacklist > 0 {
        fragments.push(catalog.text(MessageKey::ReasonPackages, language)?.to_string());
    }
    if !settings.is_empty() {
        fragments.push(catalog.text(MessageKey::ReasonSettings, language)?.to_string());
    }

    let encoding = encode_fragments(&fragments);
    Ok(Some(ReasonString::new(language.clone(), fragments, encoding)))
}

/// Encodes reason fragments in append order, newline-joined UTF-8.
fn encode_fragments(fragments: &[String]) -> Vec<u8> {
    fragments.join("\n").into_bytes()
}
