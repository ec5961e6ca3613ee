// crates/posture-gate-core/src/core/catalog.rs
// ============================================================================
// Module: Posture Gate Message Catalog
// Description: Immutable localized message tables keyed by message kind.
// Purpose: Supply translated reason/remediation texts to the message builders.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The message catalog is static configuration data: for each message key an
//! ordered list of `(language tag, text)` pairs. The catalog is constructed
//! once at startup and injected read-only into the message builders; it is
//! never mutated during a handshake. A builtin catalog ships the standard
//! English, German, and Polish tables.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Language Tags
// ============================================================================

/// Language tag as carried in the peer's accepted-language preference list.
///
/// # Invariants
/// - Opaque UTF-8 string; matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangTag(String);

impl LangTag {
    /// Creates a new language tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LangTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LangTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Localized Text Tables
// ============================================================================

/// Ordered translations of one message.
///
/// # Invariants
/// - Language tags within one table are unique; the first entry is the
///   fallback translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Translations in catalog order.
    entries: Vec<(LangTag, String)>,
}

impl LocalizedText {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a translation, ignoring a duplicate tag.
    #[must_use]
    pub fn with(mut self, tag: impl Into<LangTag>, text: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.entries.iter().any(|(existing, _)| *existing == tag) {
            self.entries.push((tag, text.into()));
        }
        self
    }

    /// Returns the translation for an exact tag match.
    #[must_use]
    pub fn text_for(&self, tag: &LangTag) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == tag)
            .map(|(_, text)| text.as_str())
    }

    /// Returns the fallback translation (first entry), if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.entries.first().map(|(_, text)| text.as_str())
    }

    /// Returns true when the table holds no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Message Keys
// ============================================================================

/// Keys for the localized messages synthesized by this engine.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Reason fragment for vulnerable or blacklisted packages.
    ReasonPackages,
    /// Reason fragment for improper OS settings.
    ReasonSettings,
    /// Title of the blacklisted-package removal instruction.
    RemovePackagesTitle,
    /// Description of the blacklisted-package removal instruction.
    RemovePackagesDescription,
    /// Items header of the blacklisted-package removal instruction.
    RemovePackagesHeader,
    /// Title of the package update instruction.
    UpdatePackagesTitle,
    /// Description of the package update instruction.
    UpdatePackagesDescription,
    /// Items header of the package update instruction.
    UpdatePackagesHeader,
    /// Title of the IP forwarding instruction.
    ForwardingTitle,
    /// Description of the IP forwarding instruction.
    ForwardingDescription,
    /// Title of the default password instruction.
    DefaultPasswordTitle,
    /// Description of the default password instruction.
    DefaultPasswordDescription,
    /// Title of the unverified app sources instruction.
    UnknownSourcesTitle,
    /// Description of the unverified app sources instruction.
    UnknownSourcesDescription,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog lookup errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog carries no table for the requested key.
    #[error("message catalog has no table for key {0:?}")]
    MissingKey(MessageKey),
    /// The table for the key holds no translations at all.
    #[error("message table for key {0:?} is empty")]
    EmptyTable(MessageKey),
}

// ============================================================================
// SECTION: Message Catalog
// ============================================================================

/// Last-resort default when a deserialized catalog has an empty supported list.
static FALLBACK_LANGUAGE: LazyLock<LangTag> = LazyLock::new(|| LangTag::new("en"));

/// Immutable catalog of localized message tables.
///
/// # Invariants
/// - Constructed once at startup and never mutated afterwards.
/// - The supported list is non-empty; its first tag is the negotiation
///   default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Language tags the catalog can render, default first.
    supported: Vec<LangTag>,
    /// Message tables keyed by message kind.
    tables: BTreeMap<MessageKey, LocalizedText>,
}

impl MessageCatalog {
    /// Creates an empty catalog with the given supported languages.
    ///
    /// The first tag is the negotiation default. An empty list falls back to
    /// a single `"en"` entry so the catalog always has a default.
    #[must_use]
    pub fn new(supported: Vec<LangTag>) -> Self {
        let supported = if supported.is_empty() {
            vec![LangTag::new("en")]
        } else {
            supported
        };
        Self {
            supported,
            tables: BTreeMap::new(),
        }
    }

    /// Adds a message table for a key, replacing any previous table.
    #[must_use]
    pub fn with_table(mut self, key: MessageKey, table: LocalizedText) -> Self {
        self.tables.insert(key, table);
        self
    }

    /// Replaces the supported language list.
    ///
    /// An empty list is ignored so the catalog always keeps a default.
    #[must_use]
    pub fn with_supported(mut self, supported: Vec<LangTag>) -> Self {
        if !supported.is_empty() {
            self.supported = supported;
        }
        self
    }

    /// Returns the supported language tags, default first.
    #[must_use]
    pub fn supported(&self) -> &[LangTag] {
        &self.supported
    }

    /// Returns the negotiation default language (first supported tag).
    #[must_use]
    pub fn default_language(&self) -> &LangTag {
        self.supported.first().unwrap_or(&FALLBACK_LANGUAGE)
    }

    /// Looks up the text for a key in the given language.
    ///
    /// Falls back to the table's first entry when the language is missing
    /// from the table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the key has no table or the table is
    /// empty.
    pub fn text(&self, key: MessageKey, language: &LangTag) -> Result<&str, CatalogError> {
        let table = self.tables.get(&key).ok_or(CatalogError::MissingKey(key))?;
        table
            .text_for(language)
            .or_else(|| table.fallback())
            .ok_or(CatalogError::EmptyTable(key))
    }

    /// Returns the builtin catalog with English, German, and Polish tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![LangTag::new("en"), LangTag::new("de"), LangTag::new("pl")])
            .with_table(
                MessageKey::ReasonPackages,
                LocalizedText::new()
                    .with("en", "Vulnerable or blacklisted software packages were found")
                    .with(
                        "de",
                        "Schwachstellenbehaftete oder gesperrte Softwarepakete wurden gefunden",
                    )
                    .with("pl", "Znaleziono pakiety podatne na atak lub będące na czarnej liście"),
            )
            .with_table(
                MessageKey::ReasonSettings,
                LocalizedText::new()
                    .with("en", "Improper OS settings were detected")
                    .with("de", "Unzulässige OS Einstellungen wurden festgestellt")
                    .with("pl", "Stwierdzono niewłaściwe ustawienia OS"),
            )
            .with_table(
                MessageKey::RemovePackagesTitle,
                LocalizedText::new()
                    .with("en", "Blacklisted Software Packages")
                    .with("de", "Gesperrte Softwarepakete")
                    .with("pl", "Pakiety będące na czarnej liście"),
            )
            .with_table(
                MessageKey::RemovePackagesDescription,
                LocalizedText::new()
                    .with("en", "Dangerous software packages were found")
                    .with("de", "Gefährliche Softwarepakete wurden gefunden")
                    .with("pl", "Znaleziono niebezpieczne pakiety"),
            )
            .with_table(
                MessageKey::RemovePackagesHeader,
                LocalizedText::new()
                    .with("en", "Please remove the following software packages:")
                    .with("de", "Bitte entfernen Sie die folgenden Softwarepakete:")
                    .with("pl", "Proszę usunąć następujące pakiety:"),
            )
            .with_table(
                MessageKey::UpdatePackagesTitle,
                LocalizedText::new()
                    .with("en", "Software Security Updates")
                    .with("de", "Software Sicherheitsupdates")
                    .with("pl", "Aktualizacja softwaru zabezpieczającego"),
            )
            .with_table(
                MessageKey::UpdatePackagesDescription,
                LocalizedText::new()
                    .with("en", "Packages with security vulnerabilities were found")
                    .with("de", "Softwarepakete mit Sicherheitsschwachstellen wurden gefunden")
                    .with("pl", "Znaleziono pakiety podatne na atak"),
            )
            .with_table(
                MessageKey::UpdatePackagesHeader,
                LocalizedText::new()
                    .with("en", "Please update the following software packages:")
                    .with("de", "Bitte updaten Sie die folgenden Softwarepakete:")
                    .with("pl", "Proszę zaktualizować następujące pakiety:"),
            )
            .with_table(
                MessageKey::ForwardingTitle,
                LocalizedText::new()
                    .with("en", "IP Packet Forwarding")
                    .with("de", "Weiterleitung von IP Paketen")
                    .with("pl", "Przekazywanie pakietów IP"),
            )
            .with_table(
                MessageKey::ForwardingDescription,
                LocalizedText::new()
                    .with("en", "Please disable the forwarding of IP packets")
                    .with("de", "Bitte deaktivieren Sie das Forwarding von IP Paketen")
                    .with("pl", "Proszę zdezaktywować przekazywanie pakietów IP"),
            )
            .with_table(
                MessageKey::DefaultPasswordTitle,
                LocalizedText::new()
                    .with("en", "Default Password")
                    .with("de", "Default Passwort")
                    .with("pl", "Hasło domyślne"),
            )
            .with_table(
                MessageKey::DefaultPasswordDescription,
                LocalizedText::new()
                    .with("en", "Please change the default password")
                    .with("de", "Bitte ändern Sie das Default Passwort")
                    .with("pl", "Proszę zmienić domyślne hasło"),
            )
            .with_table(
                MessageKey::UnknownSourcesTitle,
                LocalizedText::new()
                    .with("en", "Unknown Software Origin")
                    .with("de", "Unbekannte Softwareherkunft")
                    .with("pl", "Nieznane pochodzenie softwaru"),
            )
            .with_table(
                MessageKey::UnknownSourcesDescription,
                LocalizedText::new()
                    .with("en", "Do not allow the installation of apps from unknown sources")
                    .with(
                        "de",
                        "Erlauben Sie nicht die Installation von Apps aus unbekannten Quellen",
                    )
                    .with("pl", "Proszę nie dopuszczać do instalacji Apps z nieznanych źródeł"),
            )
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
