/// Reference tables — syllable pool, surnames by initial, fortune messages.
///
/// Tables are loaded once and only read afterwards. Strict loaders report
/// errors; the lenient directory loader degrades each failing table to empty.

use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::romanize;
use crate::schema::surname::SurnameEntry;
use crate::schema::syllable::SyllableEntry;

pub const SYLLABLES_FILE: &str = "syllables.json";
pub const SURNAMES_FILE: &str = "surnames.json";
pub const FORTUNES_FILE: &str = "fortunes.json";

/// Key of the fallback surname list.
pub const DEFAULT_INITIAL: &str = "DEFAULT";

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Syllables grouped by tag.
///
/// Tags are remembered in first-seen order so that a seeded generator
/// walks them identically on every run.
#[derive(Debug, Clone, Default)]
pub struct SyllablePool {
    tags: Vec<String>,
    by_tag: FxHashMap<String, Vec<SyllableEntry>>,
}

impl SyllablePool {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SyllableEntry>,
    {
        let mut pool = SyllablePool::default();
        for entry in entries {
            pool.insert(entry);
        }
        pool
    }

    pub fn insert(&mut self, entry: SyllableEntry) {
        match self.by_tag.get_mut(&entry.tag) {
            Some(list) => list.push(entry),
            None => {
                self.tags.push(entry.tag.clone());
                self.by_tag.insert(entry.tag.clone(), vec![entry]);
            }
        }
    }

    /// Entries for a tag, if the tag is known.
    pub fn get(&self, tag: &str) -> Option<&[SyllableEntry]> {
        self.by_tag.get(tag).map(Vec::as_slice)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn entries(&self) -> impl Iterator<Item = &SyllableEntry> {
        self.tags
            .iter()
            .filter_map(|tag| self.by_tag.get(tag))
            .flatten()
    }

    /// Total number of syllable entries across all tags.
    pub fn len(&self) -> usize {
        self.by_tag.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Surnames keyed by the uppercase initial of the foreign family name.
#[derive(Debug, Clone, Default)]
pub struct SurnameTable {
    by_initial: FxHashMap<String, Vec<SurnameEntry>>,
}

impl SurnameTable {
    pub fn from_map<I>(map: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<SurnameEntry>)>,
    {
        Self {
            by_initial: map.into_iter().collect(),
        }
    }

    pub fn get(&self, initial: &str) -> Option<&[SurnameEntry]> {
        self.by_initial.get(initial).map(Vec::as_slice)
    }

    /// The `DEFAULT` list, or an empty slice when the table has none.
    pub fn default_list(&self) -> &[SurnameEntry] {
        self.get(DEFAULT_INITIAL).unwrap_or(&[])
    }

    /// Candidates for an initial, falling back to `DEFAULT` when the
    /// initial is unknown or its list is empty.
    pub fn candidates_for(&self, initial: &str) -> &[SurnameEntry] {
        match self.get(initial) {
            Some(list) if !list.is_empty() => list,
            _ => {
                debug!("no surnames for initial '{}', using {}", initial, DEFAULT_INITIAL);
                self.default_list()
            }
        }
    }

    /// Known keys, sorted.
    pub fn initials(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_initial.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.by_initial.is_empty()
    }
}

/// Fortune messages keyed by tag. Tags without messages are dropped.
#[derive(Debug, Clone, Default)]
pub struct FortuneTable {
    messages: BTreeMap<String, Vec<String>>,
}

impl FortuneTable {
    pub fn from_map<I>(map: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            messages: map
                .into_iter()
                .filter(|(_, messages)| !messages.is_empty())
                .collect(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.messages.get(tag).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.messages.contains_key(tag)
    }

    /// All tags, in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub fn parse_syllables(input: &str) -> Result<SyllablePool, ReferenceError> {
    let entries: Vec<SyllableEntry> = serde_json::from_str(input)?;
    Ok(SyllablePool::from_entries(entries))
}

pub fn parse_surnames(input: &str) -> Result<SurnameTable, ReferenceError> {
    let raw: BTreeMap<String, Vec<SurnameEntry>> = serde_json::from_str(input)?;
    Ok(SurnameTable::from_map(raw))
}

pub fn parse_fortunes(input: &str) -> Result<FortuneTable, ReferenceError> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(input)?;
    Ok(FortuneTable::from_map(raw))
}

pub fn load_syllables(path: &Path) -> Result<SyllablePool, ReferenceError> {
    parse_syllables(&std::fs::read_to_string(path)?)
}

pub fn load_surnames(path: &Path) -> Result<SurnameTable, ReferenceError> {
    parse_surnames(&std::fs::read_to_string(path)?)
}

pub fn load_fortunes(path: &Path) -> Result<FortuneTable, ReferenceError> {
    parse_fortunes(&std::fs::read_to_string(path)?)
}

/// The three reference tables the engine reads from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub syllables: SyllablePool,
    pub surnames: SurnameTable,
    pub fortunes: FortuneTable,
}

impl ReferenceData {
    /// Load all three tables from a directory, failing on the first bad file.
    pub fn load_dir(dir: &Path) -> Result<ReferenceData, ReferenceError> {
        Ok(ReferenceData {
            syllables: load_syllables(&dir.join(SYLLABLES_FILE))?,
            surnames: load_surnames(&dir.join(SURNAMES_FILE))?,
            fortunes: load_fortunes(&dir.join(FORTUNES_FILE))?,
        })
    }

    /// Load all three tables from a directory. A missing or malformed file
    /// is logged and replaced by an empty table.
    pub fn load_dir_or_empty(dir: &Path) -> ReferenceData {
        ReferenceData {
            syllables: or_empty(load_syllables(&dir.join(SYLLABLES_FILE)), SYLLABLES_FILE),
            surnames: or_empty(load_surnames(&dir.join(SURNAMES_FILE)), SURNAMES_FILE),
            fortunes: or_empty(load_fortunes(&dir.join(FORTUNES_FILE)), FORTUNES_FILE),
        }
    }

    /// Data-quality findings. An empty list means the tables are usable as-is.
    pub fn lint(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.syllables.is_empty() {
            findings.push("syllable pool is empty; name generation cannot run".to_string());
        }
        for entry in self.syllables.entries() {
            if entry.syllable.chars().count() != 1 {
                findings.push(format!(
                    "syllable '{}' (tag '{}') is not a single character",
                    entry.syllable, entry.tag
                ));
            }
            if entry.meaning.is_empty() {
                findings.push(format!("syllable '{}' has no meaning", entry.syllable));
            }
            for c in entry.syllable.chars() {
                if !romanize::knows_given_syllable(c) {
                    findings.push(format!(
                        "syllable '{}' has no romanization and will pass through unchanged",
                        c
                    ));
                }
            }
        }
        for tag in self.syllables.tags() {
            let has_common = self
                .syllables
                .get(tag)
                .is_some_and(|list| list.iter().any(|s| s.common));
            if !has_common {
                findings.push(format!("tag '{}' has no common syllable", tag));
            }
        }

        if self.surnames.default_list().is_empty() {
            findings.push(format!("surname table has no {} list", DEFAULT_INITIAL));
        }
        for initial in self.surnames.initials() {
            let entries = self.surnames.get(initial).unwrap_or(&[]);
            let total: f64 = entries
                .iter()
                .map(|e| e.weight)
                .filter(|w| w.is_finite() && *w > 0.0)
                .sum();
            if !total.is_finite() {
                findings.push(format!(
                    "surname weights under '{}' overflow; later entries can never be drawn",
                    initial
                ));
            }
            for entry in entries {
                if !(entry.weight > 0.0) {
                    findings.push(format!(
                        "surname '{}' under '{}' has non-positive weight {}",
                        entry.korean, initial, entry.weight
                    ));
                }
                if !romanize::knows_surname(&entry.korean) {
                    findings.push(format!(
                        "surname '{}' has no romanization and will pass through unchanged",
                        entry.korean
                    ));
                }
            }
        }

        if self.fortunes.is_empty() {
            findings.push("fortune table is empty; the built-in message will be used".to_string());
        }

        findings
    }
}

pub(crate) fn or_empty<T: Default>(result: Result<T, ReferenceError>, file: &str) -> T {
    match result {
        Ok(table) => table,
        Err(e) => {
            warn!("failed to load {}: {}; using an empty table", file, e);
            T::default()
        }
    }
}
