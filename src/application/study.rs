// src/application/study.rs
use std::fmt;
use tracing::debug;

use crate::domain::{Deck, DomainError};

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Wrong for the asked card, but the definition of `other_term`.
    MatchesOtherCard { expected: String, other_term: String },
    Wrong { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::MatchesOtherCard {
                expected,
                other_term,
            } => write!(
                f,
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other_term
            ),
            Verdict::Wrong { expected } => write!(f, "Wrong. The right answer is \"{}\".", expected),
        }
    }
}

/// Grade `answer` for the card keyed by `term`.
///
/// A wrong answer increments the card's mistake count exactly once.
pub fn grade(deck: &mut Deck, term: &str, answer: &str) -> Result<Verdict, DomainError> {
    if deck.is_correct(term, answer)? {
        return Ok(Verdict::Correct);
    }

    let expected = deck.definition(term)?.to_string();
    let verdict = match deck
        .is_correct_for_another_card(term, answer)
        .then(|| deck.term_for_definition(answer))
        .flatten()
    {
        Some(other_term) => Verdict::MatchesOtherCard {
            expected,
            other_term: other_term.to_string(),
        },
        None => Verdict::Wrong { expected },
    };

    let mistakes = deck.increment_mistake_count(term)?;
    debug!(term, mistakes, "Wrong answer recorded");

    Ok(verdict)
}
