// crates/posture-gate-core/tests/remediation_unit.rs
// ============================================================================
// Module: Remediation Builder Tests
// Description: Validate remediation instruction ordering and encodings.
// Purpose: Ensure instruction blocks, OS-sensitive encoding, and URI attach.
// Dependencies: posture-gate-core, serde_json
// ============================================================================

//! Remediation synthesis tests covering block ordering, the plain and
//! structured encodings, verbatim package items, and URI attachment.

use posture_gate_core::ConnectionId;
use posture_gate_core::ConnectionState;
use posture_gate_core::LangTag;
use posture_gate_core::MessageCatalog;
use posture_gate_core::OsType;
use posture_gate_core::PackageCounts;
use posture_gate_core::PackageState;
use posture_gate_core::RemediationInstruction;
use posture_gate_core::SettingsViolation;
use posture_gate_core::SettingsViolations;

/// Test result alias keeping assertions message-bearing.
type TestResult = Result<(), String>;

/// Builds a preference list from string tags.
fn prefs(tags: &[&str]) -> Vec<LangTag> {
    tags.iter().map(|tag| LangTag::new(*tag)).collect()
}

/// Builds a record holding one blacklisted package, one vulnerable package,
/// and the default-password violation.
fn mixed_findings_state() -> ConnectionState {
    let mut state = ConnectionState::new(ConnectionId::new(7));
    state.add_bad_package("netcat", PackageState::Blacklisted);
    state.add_bad_package("openssl", PackageState::Vulnerable);
    state.add_package_counts(PackageCounts::new(2, 1, 1, 0));
    state.record_settings_violations(SettingsViolations::only(SettingsViolation::DefaultPassword));
    state
}

#[test]
fn no_findings_yield_no_remediation() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(1));
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?;
    if built.is_some() {
        return Err("expected no remediation for a clean assessment".to_string());
    }
    Ok(())
}

#[test]
fn blocks_follow_the_fixed_order() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    let titles: Vec<&str> =
        built.instructions().iter().map(|instruction| instruction.title.as_str()).collect();
    if titles != ["Blacklisted Software Packages", "Software Security Updates", "Default Password"]
    {
        return Err(format!("unexpected block order: {titles:?}"));
    }
    Ok(())
}

#[test]
fn package_names_are_carried_verbatim_as_items() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    let removal = built.instructions().first().ok_or("expected a removal block")?;
    if removal.items != ["netcat"] {
        return Err(format!("unexpected removal items: {:?}", removal.items));
    }
    let update = built.instructions().get(1).ok_or("expected an update block")?;
    if update.items != ["openssl"] {
        return Err(format!("unexpected update items: {:?}", update.items));
    }
    Ok(())
}

#[test]
fn settings_blocks_carry_no_item_list() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = ConnectionState::new(ConnectionId::new(2));
    let mut violations = SettingsViolations::empty();
    violations.record(SettingsViolation::UnknownSources);
    violations.record(SettingsViolation::ForwardingEnabled);
    state.record_settings_violations(violations);
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    // Recording order was reversed; output must follow the documented order.
    let titles: Vec<&str> =
        built.instructions().iter().map(|instruction| instruction.title.as_str()).collect();
    if titles != ["IP Packet Forwarding", "Unknown Software Origin"] {
        return Err(format!("unexpected settings order: {titles:?}"));
    }
    for instruction in built.instructions() {
        if instruction.items_header.is_some() || !instruction.items.is_empty() {
            return Err("settings blocks must not carry items".to_string());
        }
    }
    Ok(())
}

#[test]
fn generic_endpoints_receive_the_plain_encoding() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    state.set_os_identity(OsType::Linux, "Debian", "12.5");
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    let text = String::from_utf8(built.encoding().to_vec()).map_err(|err| err.to_string())?;
    if !text.contains("Please remove the following software packages:") {
        return Err(format!("missing items header in plain encoding: {text}"));
    }
    if !text.contains("\n  netcat") {
        return Err(format!("items must be indented beneath the header: {text}"));
    }
    if !text.contains("\n\nSoftware Security Updates") {
        return Err(format!("blocks must be separated by one blank line: {text}"));
    }
    Ok(())
}

#[test]
fn mobile_endpoints_receive_the_structured_encoding() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    state.set_os_identity(OsType::Android, "Android", "14");
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    let decoded: Vec<RemediationInstruction> =
        serde_json::from_slice(built.encoding()).map_err(|err| err.to_string())?;
    if decoded != built.instructions() {
        return Err("structured encoding must round-trip the instruction blocks".to_string());
    }
    if decoded.len() != 3 {
        return Err(format!("expected 3 encoded blocks, got {}", decoded.len()));
    }
    Ok(())
}

#[test]
fn remediation_uri_is_attached_verbatim() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), Some("https://remediate.example.org"))
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    if built.uri() != Some("https://remediate.example.org") {
        return Err(format!("unexpected uri: {:?}", built.uri()));
    }
    Ok(())
}

#[test]
fn absent_remediation_uri_is_legal() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    let built = state
        .build_remediation(&catalog, &prefs(&["en"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    if built.uri().is_some() {
        return Err("absent configuration must yield no uri".to_string());
    }
    Ok(())
}

#[test]
fn rebuilding_replaces_the_previous_message() -> TestResult {
    let catalog = MessageCatalog::builtin();
    let mut state = mixed_findings_state();
    let first_language = state
        .build_remediation(&catalog, &prefs(&["de"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?
        .language()
        .clone();
    if first_language.as_str() != "de" {
        return Err(format!("expected de, got {first_language}"));
    }
    state
        .build_remediation(&catalog, &prefs(&["pl"]), None)
        .map_err(|err| err.to_string())?
        .ok_or("expected a remediation message")?;
    let live = state.remediation().ok_or("expected a live remediation message")?;
    if live.language().as_str() != "pl" {
        return Err("the live message must be the most recent build".to_string());
    }
    Ok(())
}
