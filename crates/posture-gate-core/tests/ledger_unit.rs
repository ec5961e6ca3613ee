// crates/posture-gate-core/tests/ledger_unit.rs
// ============================================================================
// Module: Package Ledger Tests
// Description: Validate counter accumulation and package classification.
// Purpose: Ensure evidence across protocol rounds is accumulated without loss.
// Dependencies: posture-gate-core
// ============================================================================

//! Ledger behavior tests for counters and violating-package lists.

use posture_gate_core::PackageCounts;
use posture_gate_core::PackageLedger;
use posture_gate_core::PackageState;

/// Test result alias keeping assertions message-bearing.
type TestResult = Result<(), String>;

#[test]
fn counts_accumulate_across_rounds() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_counts(PackageCounts::new(10, 2, 1, 7));
    ledger.add_counts(PackageCounts::new(5, 0, 3, 2));
    ledger.add_counts(PackageCounts::new(0, 1, 0, 0));
    let totals = ledger.counts();
    if totals != PackageCounts::new(15, 3, 4, 9) {
        return Err(format!("unexpected totals: {totals:?}"));
    }
    Ok(())
}

#[test]
fn accumulation_saturates_instead_of_wrapping() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_counts(PackageCounts::new(u64::MAX, 0, 0, 0));
    ledger.add_counts(PackageCounts::new(1, 0, 0, 0));
    if ledger.counts().processed != u64::MAX {
        return Err("processed total must saturate at the maximum".to_string());
    }
    Ok(())
}

#[test]
fn blacklisted_packages_join_only_the_removal_list() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_bad_package("netcat", PackageState::Blacklisted);
    if ledger.removal_packages() != ["netcat"] {
        return Err(format!("unexpected removal list: {:?}", ledger.removal_packages()));
    }
    if !ledger.update_packages().is_empty() {
        return Err("update list must stay empty".to_string());
    }
    Ok(())
}

#[test]
fn other_states_join_only_the_update_list() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_bad_package("openssl", PackageState::Vulnerable);
    ledger.add_bad_package("zlib", PackageState::Unknown);
    if ledger.update_packages() != ["openssl", "zlib"] {
        return Err(format!("unexpected update list: {:?}", ledger.update_packages()));
    }
    if !ledger.removal_packages().is_empty() {
        return Err("removal list must stay empty".to_string());
    }
    Ok(())
}

#[test]
fn lists_preserve_arrival_order_and_duplicates() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_bad_package("b-pkg", PackageState::Vulnerable);
    ledger.add_bad_package("a-pkg", PackageState::Vulnerable);
    ledger.add_bad_package("b-pkg", PackageState::Vulnerable);
    if ledger.update_packages() != ["b-pkg", "a-pkg", "b-pkg"] {
        return Err(format!("arrival order lost: {:?}", ledger.update_packages()));
    }
    Ok(())
}

#[test]
fn package_names_are_kept_verbatim() -> TestResult {
    let mut ledger = PackageLedger::new();
    ledger.add_bad_package("  spaced name 1.2-3~rc1  ", PackageState::Blacklisted);
    if ledger.removal_packages() != ["  spaced name 1.2-3~rc1  "] {
        return Err("names must not be trimmed or normalized".to_string());
    }
    Ok(())
}
