// crates/posture-gate-core/src/runtime/remediation.rs
// ============================================================================
// Module: Posture Gate Remediation Builder
// Description: Synthesis of the localized remediation message.
// Purpose: Turn accumulated violations into ordered, encoded repair steps.
// Dependencies: crate::core::{catalog, ledger, messages, os, settings},
// serde_json, thiserror
// ============================================================================

//! ## Overview
//! The remediation builder emits instruction blocks in a fixed order: the
//! blacklisted-package removal block, the package update block, then one
//! title/description block per recorded settings violation in the documented
//! violation order. Package names are carried verbatim as action items.
//!
//! Encoding is OS-type-sensitive: mobile endpoints receive the structured
//! JSON action format, everything else receives the line-oriented plain-text
//! format. The externally configured remediation URI is attached as-is;
//! absence is a legal value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::catalog::CatalogError;
use crate::core::catalog::LangTag;
use crate::core::catalog::MessageCatalog;
use crate::core::catalog::MessageKey;
use crate::core::ledger::PackageLedger;
use crate::core::messages::RemediationInstruction;
use crate::core::messages::RemediationString;
use crate::core::os::OsType;
use crate::core::settings::SettingsViolation;
use crate::core::settings::SettingsViolations;
use crate::runtime::reason::has_findings;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Remediation synthesis errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// A required message table is missing from the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Structured encoding failed.
    #[error("remediation encoding error: {0}")]
    Encode(String),
}

// ============================================================================
// SECTION: Remediation Synthesis
// ============================================================================

/// Builds the localized remediation message for the accumulated evidence.
///
/// Returns `None` when there is nothing to report.
///
/// # Errors
///
/// Returns [`RemediationError`] when a required message table is missing or
/// the structured encoding fails.
pub fn build_remediation(
    catalog: &MessageCatalog,
    language: &LangTag,
    ledger: &PackageLedger,
    settings: SettingsViolations,
    os_type: OsType,
    uri: Option<&str>,
) -> Result<Option<RemediationString>, RemediationError> {
    let counts = ledger.counts();
    if !has_findings(counts, settings) {
        return Ok(None);
    }

    let mut instructions = Vec::new();

    // Blacklisted packages to be removed, if any.
    if counts.blacklist > 0 {
        instructions.push(RemediationInstruction::with_items(
            catalog.text(MessageKey::RemovePackagesTitle, language)?,
            catalog.text(MessageKey::RemovePackagesDescription, language)?,
            catalog.text(MessageKey::RemovePackagesHeader, language)?,
            ledger.removal_packages().to_vec(),
        ));
    }

    // Packages in need of an update, if any.
    if counts.update > 0 {
        instructions.push(RemediationInstruction::with_items(
            catalog.text(MessageKey::UpdatePackagesTitle, language)?,
            catalog.text(MessageKey::UpdatePackagesDescription, language)?,
            catalog.text(MessageKey::UpdatePackagesHeader, language)?,
            ledger.update_packages().to_vec(),
        ));
    }

    // Settings violations in the fixed documented order.
    for violation in settings.iter() {
        let (title_key, description_key) = settings_keys(violation);
        instructions.push(RemediationInstruction::plain(
            catalog.text(title_key, language)?,
            catalog.text(description_key, language)?,
        ));
    }

    let encoding = if os_type.is_mobile() {
        encode_structured(&instructions)?
    } else {
        encode_plain(&instructions)
    };
    Ok(Some(RemediationString::new(
        language.clone(),
        instructions,
        encoding,
        uri.map(str::to_string),
    )))
}

/// Maps a settings violation to its title and description message keys.
const fn settings_keys(violation: SettingsViolation) -> (MessageKey, MessageKey) {
    match violation {
        SettingsViolation::ForwardingEnabled => {
            (MessageKey::ForwardingTitle, MessageKey::ForwardingDescription)
        }
        SettingsViolation::DefaultPassword => {
            (MessageKey::DefaultPasswordTitle, MessageKey::DefaultPasswordDescription)
        }
        SettingsViolation::UnknownSources => {
            (MessageKey::UnknownSourcesTitle, MessageKey::UnknownSourcesDescription)
        }
    }
}

// ============================================================================
// SECTION: Encoders
// ============================================================================

/// Encodes instructions in the structured JSON action format for mobile
/// endpoints.
fn encode_structured(instructions: &[RemediationInstruction]) -> Result<Vec<u8>, RemediationError> {
    serde_json::to_vec(instructions).map_err(|err| RemediationError::Encode(err.to_string()))
}

/// Encodes instructions in the line-oriented plain-text format.
///
/// Blocks are separated by one blank line; items are indented two spaces
/// beneath the items header.
fn encode_plain(instructions: &[RemediationInstruction]) -> Vec<u8> {
    let mut blocks = Vec::with_capacity(instructions.len());
    for instruction in instructions {
        let mut lines = vec![instruction.title.clone(), instruction.description.clone()];
        if let Some(header) = &instruction.items_header {
            lines.push(header.clone());
            for item in &instruction.items {
                lines.push(format!("  {item}"));
            }
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n").into_bytes()
}
