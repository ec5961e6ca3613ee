// crates/posture-gate-core/src/core/settings.rs
// ============================================================================
// Module: Posture Gate Settings Violations
// Description: OR-accumulating bit set of OS configuration violations.
// Purpose: Track independent Boolean violation flags for one assessment cycle.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! OS configuration violations are independent Boolean findings delivered by
//! the assessment logic. Within one cycle the set only gains bits; nothing
//! ever clears a recorded violation. Iteration order is fixed so message
//! synthesis stays deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Violation Kinds
// ============================================================================

/// A single OS configuration violation.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
/// - [`SettingsViolation::ORDERED`] fixes the order used everywhere
///   violations are iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsViolation {
    /// IP packet forwarding is enabled.
    ForwardingEnabled,
    /// A factory default password is still active.
    DefaultPassword,
    /// Installation of apps from unverified sources is allowed.
    UnknownSources,
}

impl SettingsViolation {
    /// Fixed iteration order for deterministic message synthesis.
    pub const ORDERED: [Self; 3] =
        [Self::ForwardingEnabled, Self::DefaultPassword, Self::UnknownSources];

    /// Returns the bit assigned to this violation.
    const fn bit(self) -> u32 {
        match self {
            Self::ForwardingEnabled => 1,
            Self::DefaultPassword => 1 << 1,
            Self::UnknownSources => 1 << 2,
        }
    }
}

// ============================================================================
// SECTION: Violation Set
// ============================================================================

/// OR-accumulating set of OS configuration violations.
///
/// # Invariants
/// - Bits are only ever added within one assessment cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsViolations(u32);

impl SettingsViolations {
    /// Creates an empty violation set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set holding a single violation.
    #[must_use]
    pub const fn only(violation: SettingsViolation) -> Self {
        Self(violation.bit())
    }

    /// Adds a single violation to the set.
    pub const fn record(&mut self, violation: SettingsViolation) {
        self.0 |= violation.bit();
    }

    /// Merges another set into this one.
    pub const fn merge(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Returns true when the violation is present.
    #[must_use]
    pub const fn contains(self, violation: SettingsViolation) -> bool {
        self.0 & violation.bit() != 0
    }

    /// Returns true when no violation has been recorded.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the recorded violations in the fixed documented order.
    pub fn iter(self) -> impl Iterator<Item = SettingsViolation> {
        SettingsViolation::ORDERED.into_iter().filter(move |violation| self.contains(*violation))
    }
}

impl FromIterator<SettingsViolation> for SettingsViolations {
    fn from_iter<I: IntoIterator<Item = SettingsViolation>>(iter: I) -> Self {
        let mut set = Self::empty();
        for violation in iter {
            set.record(violation);
        }
        set
    }
}
