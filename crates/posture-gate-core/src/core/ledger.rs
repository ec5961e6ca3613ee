// crates/posture-gate-core/src/core/ledger.rs
// ============================================================================
// Module: Posture Gate Package Ledger
// Description: Violating-package lists and running assessment counters.
// Purpose: Accumulate package evidence across protocol rounds without loss.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The package ledger records the package-level outcome of an assessment:
//! two arrival-ordered name lists (blacklisted packages to remove, vulnerable
//! packages to update) and four running counters. Evidence arrives in partial
//! deltas across protocol rounds; counters only accumulate and lists are
//! never reordered or deduplicated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Package State
// ============================================================================

/// Assessment outcome for a single installed package.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageState {
    /// Package is explicitly forbidden and must be removed.
    Blacklisted,
    /// Package carries known vulnerabilities and must be updated.
    Vulnerable,
    /// Package version could not be assessed.
    Unknown,
}

// ============================================================================
// SECTION: Package Counters
// ============================================================================

/// Running totals for one assessment cycle.
///
/// # Invariants
/// - Totals are monotonically non-decreasing; accumulation saturates rather
///   than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCounts {
    /// Packages processed in total.
    pub processed: u64,
    /// Packages in need of an update.
    pub update: u64,
    /// Blacklisted packages.
    pub blacklist: u64,
    /// Packages found compliant.
    pub ok: u64,
}

impl PackageCounts {
    /// Creates a counter delta.
    #[must_use]
    pub const fn new(processed: u64, update: u64, blacklist: u64, ok: u64) -> Self {
        Self {
            processed,
            update,
            blacklist,
            ok,
        }
    }

    /// Adds a delta into the running totals.
    pub const fn accumulate(&mut self, delta: Self) {
        self.processed = self.processed.saturating_add(delta.processed);
        self.update = self.update.saturating_add(delta.update);
        self.blacklist = self.blacklist.saturating_add(delta.blacklist);
        self.ok = self.ok.saturating_add(delta.ok);
    }
}

// ============================================================================
// SECTION: Package Ledger
// ============================================================================

/// Ledger of violating packages and running counters for one connection.
///
/// # Invariants
/// - Lists hold names in arrival order, verbatim, without deduplication.
/// - Each name is owned by exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageLedger {
    /// Blacklisted packages that must be removed.
    removal: Vec<String>,
    /// Vulnerable packages that must be updated.
    update: Vec<String>,
    /// Running totals for the current assessment cycle.
    counts: PackageCounts,
}

impl PackageLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violating package under the list selected by its state.
    ///
    /// Blacklisted packages join the removal list; every other state joins
    /// the update list. The name is taken verbatim.
    pub fn add_bad_package(&mut self, name: impl Into<String>, state: PackageState) {
        let name = name.into();
        match state {
            PackageState::Blacklisted => self.removal.push(name),
            PackageState::Vulnerable | PackageState::Unknown => self.update.push(name),
        }
    }

    /// Adds a counter delta into the running totals.
    pub const fn add_counts(&mut self, delta: PackageCounts) {
        self.counts.accumulate(delta);
    }

    /// Returns the current running totals.
    #[must_use]
    pub const fn counts(&self) -> PackageCounts {
        self.counts
    }

    /// Returns the blacklisted packages in arrival order.
    #[must_use]
    pub fn removal_packages(&self) -> &[String] {
        &self.removal
    }

    /// Returns the packages needing an update in arrival order.
    #[must_use]
    pub fn update_packages(&self) -> &[String] {
        &self.update
    }
}
