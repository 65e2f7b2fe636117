//! The emoji catalog: supported palette plus the combination table.
//!
//! The table is keyed by an "anchor" emoji whose combinations are listed; a
//! pair may be stored in either orientation under its anchor. All validation
//! happens here, at load time, so nothing downstream handles a malformed entry.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use kitchen_types::{CodepointError, CombinationRecord, EmojiCodepoint};

use crate::resolver;
use crate::supported::KNOWN_SUPPORTED_EMOJI;

/// Combination table compiled into the binary.
pub const BUNDLED_CATALOG_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/emoji_data.json"));

const DATE_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid codepoint in catalog entry `{key}`: {source}")]
    Codepoint {
        key: String,
        #[source]
        source: CodepointError,
    },
    #[error("supported emoji list contains `{0}` more than once")]
    DuplicateSupported(EmojiCodepoint),
    #[error("supported emoji `{0}` has no catalog entry")]
    MissingEntry(EmojiCodepoint),
    #[error("entry `{key}` has a record with malformed date `{date}` (expected YYYYMMDD)")]
    MalformedDate { key: EmojiCodepoint, date: String },
    #[error("entry `{key}` lists {left}_{right}, which does not involve it")]
    Unanchored {
        key: EmojiCodepoint,
        left: EmojiCodepoint,
        right: EmojiCodepoint,
    },
    #[error("entry `{key}` references unsupported emoji `{code}`")]
    Unsupported {
        key: EmojiCodepoint,
        code: EmojiCodepoint,
    },
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "leftEmoji")]
    left: String,
    #[serde(rename = "rightEmoji")]
    right: String,
    date: String,
}

/// Read-only emoji data, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    supported: Vec<EmojiCodepoint>,
    positions: HashMap<EmojiCodepoint, usize>,
    combos: HashMap<EmojiCodepoint, Vec<CombinationRecord>>,
}

impl Catalog {
    /// The compiled-in table over the default palette.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG_JSON)
    }

    /// Parse a table over the default palette.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_with_supported(json, KNOWN_SUPPORTED_EMOJI)
    }

    /// Read a table from disk over the default palette.
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded catalog override");
        Ok(catalog)
    }

    pub fn from_json_with_supported(json: &str, supported: &[&str]) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<RawRecord>> = serde_json::from_str(json)?;

        let supported = supported
            .iter()
            .map(|code| parse_code(code, code))
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key_raw, records) in raw {
            let key = parse_code(&key_raw, &key_raw)?;
            let records = records
                .into_iter()
                .map(|record| -> Result<CombinationRecord, CatalogError> {
                    Ok(CombinationRecord::new(
                        parse_code(&key_raw, &record.left)?,
                        parse_code(&key_raw, &record.right)?,
                        record.date,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((key, records));
        }

        Self::from_parts(supported, entries)
    }

    /// Build a catalog from already-parsed parts, enforcing every invariant.
    ///
    /// Entries keyed by an emoji outside the palette are dropped with a warning.
    pub fn from_parts(
        supported: Vec<EmojiCodepoint>,
        entries: Vec<(EmojiCodepoint, Vec<CombinationRecord>)>,
    ) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(supported.len());
        for (index, code) in supported.iter().enumerate() {
            if positions.insert(code.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSupported(code.clone()));
            }
        }

        let mut combos: HashMap<EmojiCodepoint, Vec<CombinationRecord>> =
            HashMap::with_capacity(entries.len());
        let mut dropped = 0usize;
        for (key, records) in entries {
            if !positions.contains_key(&key) {
                tracing::warn!(key = %key, "Ignoring catalog entry for unsupported emoji");
                dropped += 1;
                continue;
            }
            for record in &records {
                validate_record(&key, record, &positions)?;
            }
            combos.entry(key).or_default().extend(records);
        }

        if let Some(missing) = supported.iter().find(|code| !combos.contains_key(*code)) {
            return Err(CatalogError::MissingEntry(missing.clone()));
        }

        let catalog = Self {
            supported,
            positions,
            combos,
        };
        tracing::info!(
            emoji = catalog.len(),
            records = catalog.record_count(),
            dropped,
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Supported emoji in display order.
    #[must_use]
    pub fn supported(&self) -> &[EmojiCodepoint] {
        &self.supported
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.supported.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supported.is_empty()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.combos.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_supported(&self, code: &EmojiCodepoint) -> bool {
        self.positions.contains_key(code)
    }

    /// Display index of a supported emoji.
    #[must_use]
    pub fn position(&self, code: &EmojiCodepoint) -> Option<usize> {
        self.positions.get(code).copied()
    }

    /// Records stored under `anchor`, in table order.
    #[must_use]
    pub fn combos_for(&self, anchor: &EmojiCodepoint) -> &[CombinationRecord] {
        self.combos.get(anchor).map_or(&[], Vec::as_slice)
    }

    /// See [`resolver::find_combo`].
    #[must_use]
    pub fn find_combo(
        &self,
        left: &EmojiCodepoint,
        right: &EmojiCodepoint,
    ) -> Option<&CombinationRecord> {
        resolver::find_combo(self, left, right)
    }

    /// Every emoji that [`Catalog::find_combo`] resolves against `anchor`.
    #[must_use]
    pub fn partners(&self, anchor: &EmojiCodepoint) -> HashSet<&EmojiCodepoint> {
        self.combos_for(anchor)
            .iter()
            .filter_map(|record| record.partner_of(anchor))
            .collect()
    }
}

fn parse_code(key: &str, raw: &str) -> Result<EmojiCodepoint, CatalogError> {
    EmojiCodepoint::new(raw).map_err(|source| CatalogError::Codepoint {
        key: key.to_string(),
        source,
    })
}

fn validate_record(
    key: &EmojiCodepoint,
    record: &CombinationRecord,
    positions: &HashMap<EmojiCodepoint, usize>,
) -> Result<(), CatalogError> {
    let date = record.date();
    if date.len() != DATE_LEN || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::MalformedDate {
            key: key.clone(),
            date: date.to_string(),
        });
    }

    if !record.involves(key) {
        return Err(CatalogError::Unanchored {
            key: key.clone(),
            left: record.left().clone(),
            right: record.right().clone(),
        });
    }

    for code in [record.left(), record.right()] {
        if !positions.contains_key(code) {
            return Err(CatalogError::Unsupported {
                key: key.clone(),
                code: code.clone(),
            });
        }
    }

    Ok(())
}
