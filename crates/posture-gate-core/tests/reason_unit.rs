// crates/posture-gate-core/tests/reason_unit.rs
// ============================================================================
// Module: Reason Builder Tests
// Description: Validate reason message synthesis and encoding.
// Purpose: Ensure reason fragments follow evidence and append order exactly.
// Dependencies: posture-gate-core
// ============================================================================

//! Reason synthesis tests covering the trigger condition, fragment order,
//! localization, and the replace-on-request pattern.

use posture_gate_core::ConnectionId;
use posture_gate_core::ConnectionState;
use posture_gate_core::LangTag;
use posture_gate_core::MessageCatalog;
use posture_gate_core::PackageCounts;
use posture_gate_core::PackageState;
use posture_gate_core::SettingsViolation;
use posture_gate_core::SettingsViolations;

/// Test result alias keeping assertions message-bearing.
type TestResult = Result<(), String>;

/// English packages-reason text from the builtin catalog.
const REASON_PACKAGES_EN: &str = "Vulnerable or blacklisted software packages were found";
/// English settings-reason text from the builtin catalog.
const REASON_SETTINGS_EN: &str = "Improper OS settings were detected";

/// Builds a preference list from string tags.
fn prefs(tags: &[&str]) -> Vec<LangTag> {
    tags.iter().map(|tag| LangTag::new(*tag)).collect()
}

#[test]
fn no_findings_yield_no_reason() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    let built = state.build_reason(&catalog, &prefs(&["en"])).map_err(|err| err.to_string())?;
    if built.is_some() {
        return Err("expected no reason for a clean assessment".to_string());
    }
    if state.reason().is_some() {
        return Err("no message must be retained for a clean assessment".to_string());
    }
    Ok(())
}

#[test]
fn processed_and_ok_counts_alone_do_not_trigger() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.add_package_counts(PackageCounts::new(25, 0, 0, 25));
    let built = state.build_reason(&catalog, &prefs(&["en"])).map_err(|err| err.to_string())?;
    if built.is_some() {
        return Err("compliant counters must not trigger a reason".to_string());
    }
    Ok(())
}

#[test]
fn blacklist_count_triggers_packages_fragment() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.add_package_counts(PackageCounts::new(1, 0, 1, 0));
    state.add_bad_package("netcat", PackageState::Blacklisted);
    let built = state
        .build_reason(&catalog, &prefs(&["en"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    if built.fragments() != [REASON_PACKAGES_EN] {
        return Err(format!("unexpected fragments: {:?}", built.fragments()));
    }
    if built.encoding().is_empty() {
        return Err("encoding must be non-empty".to_string());
    }
    Ok(())
}

#[test]
fn settings_mask_triggers_settings_fragment() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.record_settings_violations(SettingsViolations::only(
        SettingsViolation::ForwardingEnabled,
    ));
    let built = state
        .build_reason(&catalog, &prefs(&["en"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    if built.fragments() != [REASON_SETTINGS_EN] {
        return Err(format!("unexpected fragments: {:?}", built.fragments()));
    }
    Ok(())
}

#[test]
fn fragments_follow_append_order_and_newline_encoding() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.add_package_counts(PackageCounts::new(3, 2, 0, 1));
    state.record_settings_violations(SettingsViolations::only(SettingsViolation::DefaultPassword));
    let built = state
        .build_reason(&catalog, &prefs(&["en"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    if built.fragments() != [REASON_PACKAGES_EN, REASON_SETTINGS_EN] {
        return Err(format!("unexpected fragment order: {:?}", built.fragments()));
    }
    let expected = format!("{REASON_PACKAGES_EN}\n{REASON_SETTINGS_EN}");
    if built.encoding() != expected.as_bytes() {
        return Err("encoding must join fragments with one newline".to_string());
    }
    Ok(())
}

#[test]
fn language_is_negotiated_per_request() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.add_package_counts(PackageCounts::new(1, 1, 0, 0));

    let first = state
        .build_reason(&catalog, &prefs(&["fr", "de"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    if first.language().as_str() != "de" {
        return Err(format!("expected de, got {}", first.language()));
    }

    // The peer changed its preferences; the next request replaces the
    // previous message in the newly negotiated language.
    let second = state
        .build_reason(&catalog, &prefs(&["pl"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    if second.language().as_str() != "pl" {
        return Err(format!("expected pl, got {}", second.language()));
    }
    let live = state.reason().ok_or("expected a live reason message")?;
    if live.language().as_str() != "pl" {
        return Err("the live message must be the most recent build".to_string());
    }
    Ok(())
}

#[test]
fn german_rendering_uses_german_tables() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    state.add_package_counts(PackageCounts::new(1, 0, 1, 0));
    let built = state
        .build_reason(&catalog, &prefs(&["de"]))
        .map_err(|err| err.to_string())?
        .ok_or("expected a reason message")?;
    let text = String::from_utf8(built.encoding().to_vec()).map_err(|err| err.to_string())?;
    if !text.contains("Softwarepakete") {
        return Err(format!("expected German text, got {text}"));
    }
    Ok(())
}
