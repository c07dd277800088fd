// src/util/testing.rs

use anyhow::Result;
use rand::RngCore;
use std::collections::{HashMap, HashSet};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{DeckStore, ImportBatch};
use crate::domain::{CardEntry, DomainError};

/// Random source that always yields zero, so `Deck::random_card` always
/// picks the first card. Makes study sessions scriptable in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// In-memory `DeckStore` for testing the session without touching disk.
///
/// Reads return the batches registered with the builder, writes are
/// captured and can be inspected afterwards.
///
/// # Examples
///
/// ```
/// use flashdeck::application::{DeckStore, ImportBatch};
/// use flashdeck::domain::CardEntry;
/// use flashdeck::util::testing::MockDeckStore;
/// use std::path::Path;
///
/// let mut batch = ImportBatch::default();
/// batch.insert(CardEntry::new("capital", "Paris", 0));
///
/// let mut mock = MockDeckStore::builder()
///     .with_deck_file("deck.txt", batch)
///     .with_unwritable("readonly.txt")
///     .build();
///
/// assert_eq!(mock.read_deck(Path::new("deck.txt")).unwrap().len(), 1);
/// assert!(mock.write_deck(Path::new("readonly.txt"), &[]).is_err());
/// ```
pub struct MockDeckStore {
    files: HashMap<PathBuf, ImportBatch>,
    unreadable: HashSet<PathBuf>,
    unwritable: HashSet<PathBuf>,
    written_decks: HashMap<PathBuf, Vec<CardEntry>>,
    written_logs: HashMap<PathBuf, String>,
}

impl MockDeckStore {
    pub fn builder() -> MockDeckStoreBuilder {
        MockDeckStoreBuilder::new()
    }

    /// Entries captured by the last `write_deck` to `path`
    pub fn written_deck(&self, path: impl AsRef<Path>) -> Option<&[CardEntry]> {
        self.written_decks.get(path.as_ref()).map(Vec::as_slice)
    }

    pub fn written_log(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.written_logs.get(path.as_ref()).map(String::as_str)
    }

    fn check_writable(&self, path: &Path) -> Result<(), DomainError> {
        if self.unwritable.contains(path) {
            return Err(DomainError::StorageError(format!(
                "{} is not writable",
                path.display()
            )));
        }
        Ok(())
    }
}

impl DeckStore for MockDeckStore {
    fn read_deck(&mut self, path: &Path) -> Result<ImportBatch, DomainError> {
        if self.unreadable.contains(path) {
            return Err(DomainError::StorageError(format!(
                "{} is not readable",
                path.display()
            )));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::FileNotFound(path.to_path_buf()))
    }

    fn write_deck(&mut self, path: &Path, entries: &[CardEntry]) -> Result<usize, DomainError> {
        self.check_writable(path)?;
        self.written_decks.insert(path.to_path_buf(), entries.to_vec());
        Ok(entries.len())
    }

    fn write_log(&mut self, path: &Path, transcript: &str) -> Result<(), DomainError> {
        self.check_writable(path)?;
        self.written_logs
            .insert(path.to_path_buf(), transcript.to_string());
        Ok(())
    }
}

/// Builder for MockDeckStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockDeckStoreBuilder {
    files: HashMap<PathBuf, ImportBatch>,
    unreadable: HashSet<PathBuf>,
    unwritable: HashSet<PathBuf>,
}

impl MockDeckStoreBuilder {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            unreadable: HashSet::new(),
            unwritable: HashSet::new(),
        }
    }

    /// Register a deck file that `read_deck` returns
    pub fn with_deck_file(mut self, path: impl Into<PathBuf>, batch: ImportBatch) -> Self {
        self.files.insert(path.into(), batch);
        self
    }

    /// Make `read_deck` fail with a storage error for `path`
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Make writes to `path` fail with a storage error
    pub fn with_unwritable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unwritable.insert(path.into());
        self
    }

    pub fn build(self) -> MockDeckStore {
        MockDeckStore {
            files: self.files,
            unreadable: self.unreadable,
            unwritable: self.unwritable,
            written_decks: HashMap::new(),
            written_logs: HashMap::new(),
        }
    }
}

impl Default for MockDeckStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
