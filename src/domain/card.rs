// src/domain/card.rs

/// Usage statistics tracked per card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    mistake_count: u32,
}

impl Statistics {
    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    pub fn increment_mistake_count(&mut self) -> u32 {
        self.mistake_count = self.mistake_count.saturating_add(1);
        self.mistake_count
    }

    pub fn set_mistake_count(&mut self, count: u32) {
        self.mistake_count = count;
    }

    pub fn reset(&mut self) {
        self.mistake_count = 0;
    }
}

/// A term/definition pair. Term and definition are fixed once created,
/// only the statistics change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    term: String,
    definition: String,
    statistics: Statistics,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            statistics: Statistics::default(),
        }
    }

    pub fn with_mistake_count(mut self, count: u32) -> Self {
        self.statistics.set_mistake_count(count);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    pub fn mistake_count(&self) -> u32 {
        self.statistics.mistake_count()
    }
}

/// Flat (term, definition, mistake count) triple exchanged with deck files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub term: String,
    pub definition: String,
    pub mistake_count: u32,
}

impl CardEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>, mistake_count: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistake_count,
        }
    }
}

impl From<&Card> for CardEntry {
    fn from(card: &Card) -> Self {
        Self::new(card.term(), card.definition(), card.mistake_count())
    }
}

impl From<CardEntry> for Card {
    fn from(entry: CardEntry) -> Self {
        Card::new(entry.term, entry.definition).with_mistake_count(entry.mistake_count)
    }
}
