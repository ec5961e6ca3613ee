// crates/posture-gate-core/src/runtime/connection.rs
// ============================================================================
// Module: Posture Gate Connection State
// Description: Per-connection assessment-state record.
// Purpose: Accumulate violation evidence and synthesize localized messages.
// Dependencies: crate::core, crate::runtime::{language, reason, remediation}
// ============================================================================

//! ## Overview
//! One [`ConnectionState`] exists per network connection for the lifetime of
//! its handshake. The handshake driver feeds it capability values, OS
//! identity, package counters, violating package names, and settings
//! violation bits as evidence arrives across protocol rounds; at finalization
//! it asks for the localized reason string and remediation instructions.
//!
//! All mutating operations are invoked in strict sequence by the connection's
//! single dispatch path. The sub-check reference count is the one exception:
//! a long-running measurement may start and stop from its own context, so the
//! count is atomic while everything else stays plain.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

use crate::core::catalog::CatalogError;
use crate::core::catalog::LangTag;
use crate::core::catalog::MessageCatalog;
use crate::core::identifiers::ConnectionId;
use crate::core::identifiers::DeviceId;
use crate::core::ledger::PackageCounts;
use crate::core::ledger::PackageLedger;
use crate::core::ledger::PackageState;
use crate::core::messages::ReasonString;
use crate::core::messages::RemediationString;
use crate::core::os::ConnectionPhase;
use crate::core::os::OsIdentity;
use crate::core::os::OsType;
use crate::core::recommendation::Recommendation;
use crate::core::settings::SettingsViolations;
use crate::runtime::language::negotiate_language;
use crate::runtime::reason;
use crate::runtime::remediation;
use crate::runtime::remediation::RemediationError;

// ============================================================================
// SECTION: Connection State
// ============================================================================

/// Per-connection assessment-state record.
///
/// # Invariants
/// - Package counters and the settings mask only accumulate within one
///   assessment cycle; nothing overwrites or clears them.
/// - The recommendation and evaluation codes always move as a pair.
/// - At most one reason message and one remediation message are alive;
///   building a new one replaces the previous.
/// - Only the sub-check count may be touched concurrently with the main
///   dispatch path.
#[derive(Debug)]
pub struct ConnectionState {
    /// Connection identifier assigned by the handshake driver.
    connection_id: ConnectionId,
    /// Current phase of the enclosing handshake (label only).
    phase: ConnectionPhase,
    /// Connection supports long message types.
    has_long: bool,
    /// Connection supports exclusive delivery.
    has_excl: bool,
    /// Maximum PA-TNC message size for this connection.
    max_message_size: u32,
    /// Current recommendation/evaluation pair.
    recommendation: Recommendation,
    /// Reported OS identity, once delivered.
    os_identity: Option<OsIdentity>,
    /// Device identifier resolved by the external database.
    device_id: DeviceId,
    /// Package-violation ledger.
    ledger: PackageLedger,
    /// Attribute request sent; a mandatory response is outstanding.
    attribute_request: bool,
    /// Installed-package request sent; a mandatory response is outstanding.
    package_request: bool,
    /// Accumulated OS settings violations.
    settings: SettingsViolations,
    /// Sub-check ("angel") reference count.
    sub_checks: AtomicI32,
    /// Live reason message, if one was built.
    reason: Option<ReasonString>,
    /// Live remediation message, if one was built.
    remediation: Option<RemediationString>,
}

impl ConnectionState {
    /// Creates the record for a new connection with documented defaults.
    #[must_use]
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            phase: ConnectionPhase::Created,
            has_long: false,
            has_excl: false,
            max_message_size: 0,
            recommendation: Recommendation::undecided(),
            os_identity: None,
            device_id: DeviceId::unset(),
            ledger: PackageLedger::new(),
            attribute_request: false,
            package_request: false,
            settings: SettingsViolations::empty(),
            sub_checks: AtomicI32::new(0),
            reason: None,
            remediation: None,
        }
    }

    /// Returns the connection identifier.
    #[must_use]
    pub const fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    // ------------------------------------------------------------------------
    // Capability bookkeeping
    // ------------------------------------------------------------------------

    /// Records the negotiated session capability flags.
    pub const fn set_capabilities(&mut self, has_long: bool, has_excl: bool) {
        self.has_long = has_long;
        self.has_excl = has_excl;
    }

    /// Returns true when the connection supports long message types.
    #[must_use]
    pub const fn has_long(&self) -> bool {
        self.has_long
    }

    /// Returns true when the connection supports exclusive delivery.
    #[must_use]
    pub const fn has_excl(&self) -> bool {
        self.has_excl
    }

    /// Records the maximum message size for this connection.
    pub const fn set_max_message_size(&mut self, size: u32) {
        self.max_message_size = size;
    }

    /// Returns the maximum message size for this connection.
    #[must_use]
    pub const fn max_message_size(&self) -> u32 {
        self.max_message_size
    }

    // ------------------------------------------------------------------------
    // Handshake phase
    // ------------------------------------------------------------------------

    /// Records the current phase of the enclosing handshake.
    ///
    /// Transition legality is the external driver's concern; this record
    /// stores the label verbatim.
    pub const fn change_phase(&mut self, phase: ConnectionPhase) {
        self.phase = phase;
    }

    /// Returns the current handshake phase label.
    #[must_use]
    pub const fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    // ------------------------------------------------------------------------
    // Recommendation pair
    // ------------------------------------------------------------------------

    /// Returns the current recommendation/evaluation pair.
    #[must_use]
    pub const fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    /// Replaces the recommendation/evaluation pair.
    pub const fn set_recommendation(&mut self, recommendation: Recommendation) {
        self.recommendation = recommendation;
    }

    // ------------------------------------------------------------------------
    // OS identity
    // ------------------------------------------------------------------------

    /// Replaces the reported OS identity, dropping any previous one.
    pub fn set_os_identity(
        &mut self,
        os_type: OsType,
        name: impl Into<String>,
        version: impl Into<String>,
    ) {
        self.os_identity = Some(OsIdentity::new(os_type, name, version));
    }

    /// Returns the reported OS identity, once delivered.
    #[must_use]
    pub const fn os_identity(&self) -> Option<&OsIdentity> {
        self.os_identity.as_ref()
    }

    /// Returns the reported OS family, or unknown before delivery.
    #[must_use]
    pub fn os_type(&self) -> OsType {
        self.os_identity.as_ref().map_or(OsType::Unknown, |identity| identity.os_type)
    }

    // ------------------------------------------------------------------------
    // Package evidence
    // ------------------------------------------------------------------------

    /// Adds a counter delta from one assessment round into the totals.
    pub const fn add_package_counts(&mut self, delta: PackageCounts) {
        self.ledger.add_counts(delta);
    }

    /// Returns the four running counter totals.
    #[must_use]
    pub const fn package_counts(&self) -> PackageCounts {
        self.ledger.counts()
    }

    /// Records a violating package under the list selected by its state.
    pub fn add_bad_package(&mut self, name: impl Into<String>, state: PackageState) {
        self.ledger.add_bad_package(name, state);
    }

    /// Returns the package-violation ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PackageLedger {
        &self.ledger
    }

    // ------------------------------------------------------------------------
    // Pending-request flags and device identity
    // ------------------------------------------------------------------------

    /// Records whether an attribute request is outstanding.
    pub const fn set_attribute_request(&mut self, outstanding: bool) {
        self.attribute_request = outstanding;
    }

    /// Returns true when an attribute request is outstanding.
    #[must_use]
    pub const fn attribute_request(&self) -> bool {
        self.attribute_request
    }

    /// Records whether an installed-package request is outstanding.
    pub const fn set_package_request(&mut self, outstanding: bool) {
        self.package_request = outstanding;
    }

    /// Returns true when an installed-package request is outstanding.
    #[must_use]
    pub const fn package_request(&self) -> bool {
        self.package_request
    }

    /// Replaces the device identifier.
    pub fn set_device_id(&mut self, device_id: DeviceId) {
        self.device_id = device_id;
    }

    /// Returns the device identifier.
    #[must_use]
    pub const fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    // ------------------------------------------------------------------------
    // Settings violations
    // ------------------------------------------------------------------------

    /// OR-accumulates settings violation bits into the mask.
    pub const fn record_settings_violations(&mut self, violations: SettingsViolations) {
        self.settings.merge(violations);
    }

    /// Returns the accumulated settings violation mask.
    #[must_use]
    pub const fn settings_violations(&self) -> SettingsViolations {
        self.settings
    }

    // ------------------------------------------------------------------------
    // Sub-check reference count
    // ------------------------------------------------------------------------

    /// Notes that a long-running sub-check has started.
    ///
    /// Safe to call from a sub-check context running concurrently with the
    /// main dispatch path.
    pub fn start_sub_check(&self) {
        self.sub_checks.fetch_add(1, Ordering::SeqCst);
    }

    /// Notes that a long-running sub-check has stopped.
    ///
    /// The count is not clamped at zero; a stop without a matching start
    /// drives it negative, which the driver is expected to police.
    pub fn stop_sub_check(&self) {
        self.sub_checks.fetch_sub(1, Ordering::SeqCst);
    }

    /// Returns the current sub-check reference count.
    #[must_use]
    pub fn sub_check_count(&self) -> i32 {
        self.sub_checks.load(Ordering::SeqCst)
    }

    // ------------------------------------------------------------------------
    // Message synthesis
    // ------------------------------------------------------------------------

    /// Builds the localized reason message, replacing any previous one.
    ///
    /// The rendering language is negotiated per call from the peer's
    /// preference list. Returns `Ok(None)` when there is nothing to report;
    /// the previous message, if any, stays in place in that case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a required message table is missing.
    pub fn build_reason(
        &mut self,
        catalog: &MessageCatalog,
        preferences: &[LangTag],
    ) -> Result<Option<&ReasonString>, CatalogError> {
        let language = negotiate_language(catalog, preferences);
        match reason::build_reason(catalog, language, self.ledger.counts(), self.settings)? {
            Some(message) => {
                self.reason = Some(message);
                Ok(self.reason.as_ref())
            }
            None => Ok(None),
        }
    }

    /// Builds the localized remediation message, replacing any previous one.
    ///
    /// The rendering language is negotiated per call; the encoding follows
    /// the reported OS family; the remediation URI comes from process-wide
    /// configuration and may be absent. Returns `Ok(None)` when there is
    /// nothing to report.
    ///
    /// # Errors
    ///
    /// Returns [`RemediationError`] when a required message table is missing
    /// or the structured encoding fails.
    pub fn build_remediation(
        &mut self,
        catalog: &MessageCatalog,
        preferences: &[LangTag],
        uri: Option<&str>,
    ) -> Result<Option<&RemediationString>, RemediationError> {
        let language = negotiate_language(catalog, preferences);
        let built = remediation::build_remediation(
            catalog,
            language,
            &self.ledger,
            self.settings,
            self.os_type(),
            uri,
        )?;
        match built {
            Some(message) => {
                self.remediation = Some(message);
                Ok(self.remediation.as_ref())
            }
            None => Ok(None),
        }
    }

    /// Returns the live reason message, if one was built.
    #[must_use]
    pub const fn reason(&self) -> Option<&ReasonString> {
        self.reason.as_ref()
    }

    /// Returns the live remediation message, if one was built.
    #[must_use]
    pub const fn remediation(&self) -> Option<&RemediationString> {
        self.remediation.as_ref()
    }
}
