// src/domain/mod.rs
pub mod card;
pub mod deck;
pub mod error;

pub use card::{Card, CardEntry, Statistics};
pub use deck::Deck;
pub use error::DomainError;
