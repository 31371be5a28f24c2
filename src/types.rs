use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_yaml::Value;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// One page of the registry's tag listing.
#[derive(Debug, Deserialize)]
pub struct TagsPage {
    #[serde(default)]
    pub results: Vec<TagEntry>,
}

/// Timestamps stay untyped here; a bad value on one tag must not sink the page.
#[derive(Debug, Deserialize)]
pub struct TagEntry {
    pub name: String,
    #[serde(default)]
    pub tag_last_pushed: Option<serde_json::Value>,
    #[serde(default)]
    pub last_updated: Option<serde_json::Value>,
}

impl TagEntry {
    /// First non-null timestamp key wins; anything unparsable falls back to the epoch.
    pub fn pushed_at(&self) -> DateTime<Utc> {
        [&self.tag_last_pushed, &self.last_updated]
            .into_iter()
            .flatten()
            .find(|value| !value.is_null())
            .and_then(|value| value.as_str())
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    pub last_updated: DateTime<Utc>,
}

impl TagRecord {
    pub fn new(name: impl Into<String>, last_updated: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_updated,
        }
    }
}

impl From<TagEntry> for TagRecord {
    fn from(entry: TagEntry) -> Self {
        let last_updated = entry.pushed_at();
        Self {
            name: entry.name,
            last_updated,
        }
    }
}

/// One numeric group of a version tag, kept as digits so no tag is too large to rank.
///
/// Leading zeros are stripped; ordering is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber(String);

impl VersionNumber {
    /// `None` unless `digits` is non-empty ASCII digits.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag of the form `MAJOR-MINOR-PATCH[-BUILD]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: VersionNumber,
    pub minor: VersionNumber,
    pub patch: VersionNumber,
    pub build: VersionNumber,
    pub base: String,
    pub full_tag: String,
}

impl ParsedVersion {
    pub fn key(&self) -> [&VersionNumber; 4] {
        [&self.major, &self.minor, &self.patch, &self.build]
    }

    pub fn numbers(&self) -> [&str; 4] {
        self.key().map(VersionNumber::as_str)
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| self.full_tag.cmp(&other.full_tag))
    }
}

#[derive(Debug, Clone)]
pub struct Candidate {
    pub version: ParsedVersion,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub base_version: String,
    pub full_tag: String,
    pub last_updated: DateTime<Utc>,
}

/// Before/after of one rewritten descriptor field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub file: PathBuf,
    pub field: String,
    pub old: Option<Value>,
    pub new: String,
}

impl FieldChange {
    pub fn is_changed(&self) -> bool {
        self.old.as_ref().and_then(Value::as_str) != Some(self.new.as_str())
    }

    pub fn old_display(&self) -> String {
        match &self.old {
            None | Some(Value::Null) => "None".to_string(),
            Some(Value::String(s)) => format!("'{s}'"),
            Some(Value::Bool(true)) => "True".to_string(),
            Some(Value::Bool(false)) => "False".to_string(),
            Some(other) => serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_else(|_| format!("{other:?}")),
        }
    }

    pub fn new_display(&self) -> String {
        format!("'{}'", self.new)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSummary {
    pub selection: Selection,
    pub chart: FieldChange,
    pub values: FieldChange,
}

impl UpdateSummary {
    pub fn has_changes(&self) -> bool {
        self.chart.is_changed() || self.values.is_changed()
    }
}
