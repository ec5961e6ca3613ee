// crates/posture-gate-core/src/core/os.rs
// ============================================================================
// Module: Posture Gate OS Identity
// Description: Endpoint operating system identity and handshake phase labels.
// Purpose: Hold the OS evidence that steers remediation encoding and display.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The endpoint reports its operating system identity as a type tag plus raw
//! name and version strings. The identity derives a display string used in
//! logs and reports, and the type tag decides which remediation encoding the
//! endpoint can consume. The handshake phase is a label recorded on behalf of
//! the external driver; this crate never enforces transition legality.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: OS Type
// ============================================================================

/// Operating system family reported by the endpoint.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsType {
    /// OS family could not be determined.
    #[default]
    Unknown,
    /// Debian-family or other desktop/server Linux.
    Linux,
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Apple iOS.
    Ios,
    /// Android.
    Android,
}

impl OsType {
    /// Returns true for mobile OS families that consume the structured
    /// remediation action format.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Android | Self::Ios)
    }
}

// ============================================================================
// SECTION: OS Identity
// ============================================================================

/// Operating system identity reported by the endpoint.
///
/// # Invariants
/// - `name` and `version` are stored verbatim; no normalization is applied.
/// - The display string is always `"<name> <version>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsIdentity {
    /// OS family tag.
    pub os_type: OsType,
    /// Raw OS name as reported.
    pub name: String,
    /// Raw OS version as reported.
    pub version: String,
}

impl OsIdentity {
    /// Creates an OS identity from reported name and version strings.
    #[must_use]
    pub fn new(os_type: OsType, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            os_type,
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns the derived display string, `"<name> <version>"`.
    #[must_use]
    pub fn display_string(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

impl fmt::Display for OsIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

// ============================================================================
// SECTION: Handshake Phase
// ============================================================================

/// Phase of the enclosing NAC handshake.
///
/// # Invariants
/// - This is a label recorded for the external driver; transition legality is
///   not enforced by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionPhase {
    /// Connection record has been created.
    #[default]
    Created,
    /// Assessment handshake is in progress.
    Handshaking,
    /// Endpoint has been granted full access.
    Allowed,
    /// Endpoint has been quarantined.
    Isolated,
    /// Endpoint has been denied access.
    Blocked,
    /// Connection is being torn down.
    Deleted,
}

