// src/infrastructure/deck_file.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, instrument, trace};

use crate::application::{DeckStore, ImportBatch, SkippedLine};
use crate::constants::FIELD_DELIMITER;
use crate::domain::{CardEntry, DomainError};
use crate::util::text::is_unsigned_integer;

/// Parse deck file content, one `term:definition[:mistakes]` card per line.
///
/// Blank lines are ignored. Lines of any other shape end up in
/// `ImportBatch::skipped`; the rest of the content is still parsed.
pub fn parse_deck(content: &str) -> ImportBatch {
    let mut batch = ImportBatch::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => batch.insert(entry),
            None => {
                trace!(line = index + 1, text = line, "Malformed deck line");
                batch.skipped.push(SkippedLine {
                    line_number: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    batch
}

fn parse_line(line: &str) -> Option<CardEntry> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    let (term, definition, mistake_count) = match fields.as_slice() {
        [term, definition] => (*term, *definition, 0),
        [term, definition, count] if is_unsigned_integer(count) => {
            (*term, *definition, count.parse::<u32>().ok()?)
        }
        _ => return None,
    };

    if term.is_empty() || definition.is_empty() {
        return None;
    }
    Some(CardEntry::new(term, definition, mistake_count))
}

/// Render entries in the format `parse_deck` reads back.
pub fn format_deck(entries: &[CardEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}{delim}{}{delim}{}\n",
                entry.term,
                entry.definition,
                entry.mistake_count,
                delim = FIELD_DELIMITER
            )
        })
        .collect()
}

/// `DeckStore` backed by plain files on disk.
#[derive(Debug, Default, Clone)]
pub struct FileDeckStore;

impl FileDeckStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::StorageError(format!("Failed to {} {}: {}", action, path.display(), err))
}

impl DeckStore for FileDeckStore {
    #[instrument(level = "debug", skip(self))]
    fn read_deck(&mut self, path: &Path) -> Result<ImportBatch, DomainError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::FileNotFound(path.to_path_buf()),
            _ => storage_error("read", path, e),
        })?;

        let batch = parse_deck(&content);
        debug!(
            entries = batch.len(),
            skipped = batch.skipped.len(),
            "Parsed deck file"
        );
        Ok(batch)
    }

    #[instrument(level = "debug", skip(self, entries))]
    fn write_deck(&mut self, path: &Path, entries: &[CardEntry]) -> Result<usize, DomainError> {
        fs::write(path, format_deck(entries)).map_err(|e| storage_error("write", path, e))?;
        Ok(entries.len())
    }

    #[instrument(level = "debug", skip(self, transcript))]
    fn write_log(&mut self, path: &Path, transcript: &str) -> Result<(), DomainError> {
        fs::write(path, transcript).map_err(|e| storage_error("write", path, e))
    }
}
