// src/application/mod.rs
pub mod report;
pub mod session;
pub mod store;
pub mod study;
pub mod transcript;

pub use session::{Action, Session};
pub use store::{DeckStore, ImportBatch, SkippedLine};
pub use study::{grade, Verdict};
pub use transcript::Transcript;
