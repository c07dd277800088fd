// src/application/report.rs
use crate::domain::Card;

/// Summary line for the `hardest card` command.
pub fn describe_hardest(hardest: &[&Card]) -> String {
    match hardest {
        [] => "There are no cards with errors.".to_string(),
        [card] => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            card.term(),
            card.mistake_count()
        ),
        [first, ..] => {
            let terms = hardest
                .iter()
                .map(|card| format!("\"{}\"", card.term()))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms,
                first.mistake_count()
            )
        }
    }
}
