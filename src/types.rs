use crate::error::*;
use crate::tools::export::ExportOutcome;
use chrono::{DateTime, Utc};
use log::warn;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One school to visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub school_name: String,
    pub url: String,
}

impl RosterEntry {
    pub fn new(school_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            url: url.into(),
        }
    }
}

/// Ordered school name → page address mapping.
///
/// Read from a JSON object; key order in the file is visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<RosterEntry>);

impl Roster {
    /// Build a roster, rejecting empty names.
    ///
    /// A repeated name keeps its first position and takes the later URL.
    /// Addresses are not checked here; a bad one fails when that school is
    /// visited.
    pub fn new(entries: Vec<RosterEntry>) -> Result<Self> {
        let mut roster: Vec<RosterEntry> = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            if entry.school_name.trim().is_empty() {
                return Err(SchoolError::roster_error(format!(
                    "entry {} has an empty school name",
                    i + 1
                )));
            }
            match roster
                .iter_mut()
                .find(|e| e.school_name == entry.school_name)
            {
                Some(existing) => {
                    warn!(
                        "Duplicate school name {}, using {}",
                        entry.school_name, entry.url
                    );
                    existing.url = entry.url;
                }
                None => roster.push(entry),
            }
        }
        Ok(Self(roster))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(position, entry)` pairs, 1-based, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RosterEntry)> + '_ {
        self.0.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping school names to page URLs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Roster, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, url)) = map.next_entry::<String, String>()? {
                    entries.push(RosterEntry::new(name, url));
                }
                Roster::new(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub attempted: usize,
    pub scraped: usize,
    /// Schools that failed, in roster order.
    pub failed: Vec<String>,
    pub export: ExportOutcome,
}

impl RunReport {
    pub fn elapsed_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Compact JSON form, for logs.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
