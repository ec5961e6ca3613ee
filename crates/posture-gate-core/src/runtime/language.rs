// crates/posture-gate-core/src/runtime/language.rs
// ============================================================================
// Module: Posture Gate Language Negotiation
// Description: Deterministic selection of a rendering language.
// Purpose: Match peer language preferences against the catalog's supported set.
// Dependencies: crate::core::catalog
// ============================================================================

//! ## Overview
//! The peer supplies an ordered accepted-language preference list with each
//! finalize request. Negotiation scans that list in order and returns the
//! first tag that exactly matches a supported catalog tag; when nothing
//! matches, the catalog default (its first supported tag) wins. The result is
//! deterministic and recomputed per request, since the peer may change its
//! preferences between messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::LangTag;
use crate::core::catalog::MessageCatalog;

// ============================================================================
// SECTION: Negotiation
// ============================================================================

/// Selects the rendering language for a finalize request.
///
/// Returns the first preference that exactly matches a supported tag, or the
/// catalog default when none match.
#[must_use]
pub fn negotiate_language<'a>(
    catalog: &'a MessageCatalog,
    preferences: &[LangTag],
) -> &'a LangTag {
    for preference in preferences {
        if let Some(supported) = catalog.supported().iter().find(|tag| *tag == preference) {
            return supported;
        }
    }
    catalog.default_language()
}
