// src/application/store.rs
use std::path::Path;

use crate::domain::{CardEntry, DomainError};

/// A line of a deck file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub text: String,
}

/// Result of reading one deck file: parsed entries with duplicates already
/// resolved (later lines win), plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub entries: Vec<CardEntry>,
    pub skipped: Vec<SkippedLine>,
}

impl ImportBatch {
    /// Insert an entry, replacing an earlier one with the same term in place.
    pub fn insert(&mut self, entry: CardEntry) {
        match self.entries.iter_mut().find(|e| e.term == entry.term) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub trait DeckStore {
    fn read_deck(&mut self, path: &Path) -> Result<ImportBatch, DomainError>;

    /// Write all entries, returning how many were written
    fn write_deck(&mut self, path: &Path, entries: &[CardEntry]) -> Result<usize, DomainError>;

    fn write_log(&mut self, path: &Path, transcript: &str) -> Result<(), DomainError>;
}
