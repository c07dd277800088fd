// src/infrastructure/mod.rs
pub mod config;
pub mod deck_file;

pub use config::Config;
pub use deck_file::FileDeckStore;
