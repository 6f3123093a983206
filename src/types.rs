// src/types.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the crt.sh JSON search response.
///
/// crt.sh returns more fields than we care about; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CrtShEntry {
    pub id: u64,

    pub issuer_ca_id: i64,

    pub issuer_name: String,

    /// Missing on some precert/odd entries.
    #[serde(default)]
    pub common_name: Option<String>,

    /// Newline-separated SAN list.
    #[serde(default)]
    pub name_value: String,

    pub not_before: NaiveDateTime,

    pub not_after: NaiveDateTime,

    #[serde(default)]
    pub serial_number: String,
}

impl CrtShEntry {
    /// Best identity for this entry: the common name, falling back to the
    /// first SAN when the CN is absent or blank.
    pub fn primary_name(&self) -> Option<String> {
        if let Some(cn) = &self.common_name {
            let cn = cn.trim();
            if !cn.is_empty() {
                return Some(cn.to_string());
            }
        }

        self.name_value
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(|l| l.to_string())
    }
}

/// A certificate sighting as rendered in the report.
///
/// Held only for the duration of one run. `status_code` is None when the
/// live probe failed, timed out, or was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sighting {
    pub common_name: String,

    pub issuer_ca_id: i64,

    pub not_before: NaiveDateTime,

    pub not_after: NaiveDateTime,

    pub status_code: Option<u16>,
}

impl Sighting {
    /// Build a sighting from a crt.sh entry. Returns None when the entry
    /// carries no usable name at all.
    pub fn from_entry(entry: &CrtShEntry) -> Option<Self> {
        let common_name = entry.primary_name()?;

        Some(Self {
            common_name,
            issuer_ca_id: entry.issuer_ca_id,
            not_before: entry.not_before,
            not_after: entry.not_after,
            status_code: None,
        })
    }

    /// True for wildcard names, which cannot be probed directly.
    pub fn is_wildcard(&self) -> bool {
        self.common_name.starts_with("*.")
    }
}

impl fmt::Display for Sighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ca {})", self.common_name, self.issuer_ca_id)?;
        match self.status_code {
            Some(code) => write!(f, " [{}]", code),
            None => write!(f, " [-]"),
        }
    }
}
