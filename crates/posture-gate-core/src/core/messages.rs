// crates/posture-gate-core/src/core/messages.rs
// ============================================================================
// Module: Posture Gate Message Records
// Description: Synthesized reason and remediation message records.
// Purpose: Hold the resolved language, fragments, and wire-ready encodings.
// Dependencies: crate::core::catalog, serde
// ============================================================================

//! ## Overview
//! Reason and remediation messages are transient records built on a finalize
//! request. Each holds the negotiated language, the ordered fragments or
//! instruction blocks it was built from, and the final encoded byte sequence
//! ready for transmission. A connection keeps at most one of each alive;
//! requesting a new one replaces the previous record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::catalog::LangTag;

// ============================================================================
// SECTION: Reason Message
// ============================================================================

/// Localized reason message explaining the current recommendation.
///
/// # Invariants
/// - Fragments appear in append order; the encoding covers exactly those
///   fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonString {
    /// Negotiated rendering language.
    language: LangTag,
    /// Reason fragments in append order.
    fragments: Vec<String>,
    /// Wire-ready encoded bytes.
    encoding: Vec<u8>,
}

impl ReasonString {
    /// Creates a reason message from its parts.
    #[must_use]
    pub const fn new(language: LangTag, fragments: Vec<String>, encoding: Vec<u8>) -> Self {
        Self {
            language,
            fragments,
            encoding,
        }
    }

    /// Returns the negotiated language.
    #[must_use]
    pub const fn language(&self) -> &LangTag {
        &self.language
    }

    /// Returns the reason fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Returns the wire-ready encoded bytes.
    #[must_use]
    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }
}

// ============================================================================
// SECTION: Remediation Message
// ============================================================================

/// One structured remediation instruction block.
///
/// # Invariants
/// - `items` is empty exactly when `items_header` is absent (settings
///   instructions carry no item list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationInstruction {
    /// Localized instruction title.
    pub title: String,
    /// Localized instruction description.
    pub description: String,
    /// Localized header preceding the item list, when items are present.
    pub items_header: Option<String>,
    /// Action items (package names verbatim, arrival order).
    pub items: Vec<String>,
}

impl RemediationInstruction {
    /// Creates an instruction block with an item list.
    #[must_use]
    pub fn with_items(
        title: impl Into<String>,
        description: impl Into<String>,
        items_header: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            items_header: Some(items_header.into()),
            items,
        }
    }

    /// Creates a title/description-only instruction block.
    #[must_use]
    pub fn plain(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            items_header: None,
            items: Vec::new(),
        }
    }
}

/// Localized remediation message with wire-ready encoding and URI.
///
/// # Invariants
/// - Instruction blocks appear in append order; the encoding covers exactly
///   those blocks.
/// - An absent URI is a legal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationString {
    /// Negotiated rendering language.
    language: LangTag,
    /// Instruction blocks in append order.
    instructions: Vec<RemediationInstruction>,
    /// Wire-ready encoded bytes.
    encoding: Vec<u8>,
    /// Externally configured remediation URI, when set.
    uri: Option<String>,
}

impl RemediationString {
    /// Creates a remediation message from its parts.
    #[must_use]
    pub const fn new(
        language: LangTag,
        instructions: Vec<RemediationInstruction>,
        encoding: Vec<u8>,
        uri: Option<String>,
    ) -> Self {
        Self {
            language,
            instructions,
            encoding,
            uri,
        }
    }

    /// Returns the negotiated language.
    #[must_use]
    pub const fn language(&self) -> &LangTag {
        &self.language
    }

    /// Returns the instruction blocks in append order.
    #[must_use]
    pub fn instructions(&self) -> &[RemediationInstruction] {
        &self.instructions
    }

    /// Returns the wire-ready encoded bytes.
    #[must_use]
    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }

    /// Returns the remediation URI, when configured.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
