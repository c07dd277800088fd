// src/domain/deck.rs
use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::domain::{Card, CardEntry, DomainError};

/// Ordered collection of cards keyed by term.
///
/// Cards keep their insertion order, which is also the export order.
/// A term is present at most once. Definitions may repeat across terms;
/// callers that need unique definitions check `contains_definition` first.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.term() == term)
    }

    fn card_mut(&mut self, term: &str) -> Result<&mut Card, DomainError> {
        self.cards
            .iter_mut()
            .find(|card| card.term() == term)
            .ok_or_else(|| DomainError::TermNotFound(term.to_string()))
    }

    /// Insert the card unless its term is already present.
    ///
    /// Returns `false` when the term exists; the existing card is left untouched.
    pub fn add(&mut self, card: Card) -> bool {
        if self.contains_term(card.term()) {
            trace!(term = card.term(), "Term already present, ignoring add");
            return false;
        }
        self.cards.push(card);
        true
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.term() == term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.iter().any(|card| card.definition() == definition)
    }

    pub fn is_correct(&self, term: &str, given_definition: &str) -> Result<bool, DomainError> {
        Ok(self.definition(term)? == given_definition)
    }

    /// True if a card other than `term` has exactly `given_definition`.
    pub fn is_correct_for_another_card(&self, term: &str, given_definition: &str) -> bool {
        self.cards
            .iter()
            .any(|card| card.term() != term && card.definition() == given_definition)
    }

    pub fn definition(&self, term: &str) -> Result<&str, DomainError> {
        self.get(term)
            .map(Card::definition)
            .ok_or_else(|| DomainError::TermNotFound(term.to_string()))
    }

    /// Term of the first card in deck order whose definition matches.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.definition() == definition)
            .map(Card::term)
    }

    pub fn remove(&mut self, term: &str) -> bool {
        match self.position(term) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Merge imported entries, overwriting cards with the same term.
    ///
    /// An overwritten card keeps its place in the deck; new terms are appended.
    /// Imported mistake counts replace the existing ones.
    #[instrument(level = "debug", skip_all)]
    pub fn merge(&mut self, entries: impl IntoIterator<Item = CardEntry>) {
        let mut replaced = 0usize;
        let mut appended = 0usize;
        for entry in entries {
            let card = Card::from(entry);
            match self.position(card.term()) {
                Some(index) => {
                    self.cards[index] = card;
                    replaced += 1;
                }
                None => {
                    self.cards.push(card);
                    appended += 1;
                }
            }
        }
        debug!(replaced, appended, "Merged entries into deck");
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card's new mistake count.
    pub fn increment_mistake_count(&mut self, term: &str) -> Result<u32, DomainError> {
        Ok(self.card_mut(term)?.statistics_mut().increment_mistake_count())
    }

    pub fn clear_all_mistake_counts(&mut self) {
        for card in &mut self.cards {
            card.statistics_mut().reset();
        }
    }

    /// Cards sharing the highest mistake count, in deck order.
    ///
    /// Cards without mistakes never qualify, so a deck without errors yields
    /// an empty list.
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let mut hardest = Vec::new();
        let mut threshold = 1;

        for card in &self.cards {
            let missed = card.mistake_count();
            if missed > threshold {
                threshold = missed;
                hardest.clear();
                hardest.push(card);
            } else if missed == threshold {
                hardest.push(card);
            }
        }

        hardest
    }

    /// Pick a card uniformly at random.
    pub fn random_card<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<&Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::EmptyDeck);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(&self.cards[index])
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn entries(&self) -> Vec<CardEntry> {
        self.cards.iter().map(CardEntry::from).collect()
    }
}
