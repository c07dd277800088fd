// src/application/session.rs
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::application::report::describe_hardest;
use crate::application::study;
use crate::application::{DeckStore, Transcript};
use crate::constants::{FIELD_DELIMITER, MENU_PROMPT};
use crate::domain::{Card, Deck, DomainError};
use crate::util::text::{parse_positive_count, trim_line_ending};

/// Commands understood by the menu loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    /// `ask` with an optional inline count, e.g. `ask 3`
    Ask(Option<String>),
    Log,
    HardestCard,
    ResetStats,
    Exit,
    Unknown(String),
}

impl Action {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "add" => Action::Add,
            "remove" => Action::Remove,
            "import" => Action::Import,
            "export" => Action::Export,
            "ask" => Action::Ask(None),
            "log" => Action::Log,
            "hardest card" => Action::HardestCard,
            "reset stats" => Action::ResetStats,
            "exit" => Action::Exit,
            _ => match line.strip_prefix("ask ") {
                Some(count) => Action::Ask(Some(count.trim().to_string())),
                None => Action::Unknown(line.to_string()),
            },
        }
    }
}

/// Interactive study session over one deck.
///
/// Every line printed and every line read is mirrored into the transcript,
/// which the `log` command writes out.
pub struct Session<S, G, I, O>
where
    S: DeckStore,
    G: Rng,
    I: BufRead,
    O: Write,
{
    deck: Deck,
    store: S,
    rng: G,
    input: I,
    output: O,
    transcript: Transcript,
    export_on_exit: Option<PathBuf>,
}

impl<S, G, I, O> Session<S, G, I, O>
where
    S: DeckStore,
    G: Rng,
    I: BufRead,
    O: Write,
{
    pub fn new(store: S, rng: G, input: I, output: O) -> Self {
        Self {
            deck: Deck::new(),
            store,
            rng,
            input,
            output,
            transcript: Transcript::new(),
            export_on_exit: None,
        }
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn with_export_on_exit(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_on_exit = Some(path.into());
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run the menu loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.say(MENU_PROMPT)?;
            let action = match self.read_line()? {
                Some(line) => Action::parse(&line),
                None => {
                    debug!("End of input, exiting");
                    Action::Exit
                }
            };
            debug!(?action, "Dispatching");

            let keep_running = self.dispatch(action)?;
            self.say("")?;
            if !keep_running {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Add => self.add_card()?,
            Action::Remove => self.remove_card()?,
            Action::Import => {
                if let Some(path) = self.prompt_file_name()? {
                    self.import_file(&path)?;
                }
            }
            Action::Export => self.export_cards()?,
            Action::Ask(count) => self.ask(count)?,
            Action::Log => self.save_log()?,
            Action::HardestCard => {
                let summary = describe_hardest(&self.deck.hardest_cards());
                self.say(&summary)?;
            }
            Action::ResetStats => {
                self.deck.clear_all_mistake_counts();
                self.say("Card statistics have been reset.")?;
            }
            Action::Exit => {
                self.say("Bye bye!")?;
                if let Some(path) = self.export_on_exit.clone() {
                    self.export_file(&path)?;
                }
                return Ok(false);
            }
            Action::Unknown(_) => self.say("Unknown choice. Try again!")?,
        }
        Ok(true)
    }

    fn add_card(&mut self) -> Result<()> {
        self.say("The card:")?;
        let Some(term) = self.read_line()? else {
            return Ok(());
        };
        let term = term.trim().to_string();
        if term.is_empty() {
            return self.say("The card cannot be empty.");
        }
        if term.contains(FIELD_DELIMITER) {
            return self.say(&format!("The card cannot contain \"{}\".", FIELD_DELIMITER));
        }
        if self.deck.contains_term(&term) {
            return self.say(&format!("The card \"{}\" already exists.", term));
        }

        self.say("The definition of the card:")?;
        let Some(definition) = self.read_line()? else {
            return Ok(());
        };
        let definition = definition.trim().to_string();
        if definition.is_empty() {
            return self.say("The definition cannot be empty.");
        }
        if definition.contains(FIELD_DELIMITER) {
            return self.say(&format!(
                "The definition cannot contain \"{}\".",
                FIELD_DELIMITER
            ));
        }
        if self.deck.contains_definition(&definition) {
            return self.say(&format!("The definition \"{}\" already exists.", definition));
        }

        self.deck.add(Card::new(term.as_str(), definition.as_str()));
        info!(term = %term, "Card added");
        self.say(&format!(
            "The pair (\"{}\":\"{}\") has been added.",
            term, definition
        ))
    }

    fn remove_card(&mut self) -> Result<()> {
        self.say("Which card?")?;
        let Some(term) = self.read_line()? else {
            return Ok(());
        };
        let term = term.trim();

        if self.deck.remove(term) {
            info!(term, "Card removed");
            self.say("The card has been removed.")
        } else {
            self.say(&format!("Can't remove \"{}\": there is no such card.", term))
        }
    }

    /// Read a deck file and merge it into the session deck.
    ///
    /// Failures are reported to the user; the deck is left as it was.
    #[instrument(level = "debug", skip(self))]
    pub fn import_file(&mut self, path: &Path) -> Result<()> {
        match self.store.read_deck(path) {
            Ok(batch) => {
                for skipped in &batch.skipped {
                    warn!(line = skipped.line_number, text = %skipped.text, "Skipping malformed line");
                    self.say(&format!(
                        "Skipping malformed line {}: \"{}\"",
                        skipped.line_number, skipped.text
                    ))?;
                }
                let loaded = batch.len();
                self.deck.merge(batch.entries);
                info!(loaded, total = self.deck.len(), "Imported deck file");
                self.say(&format!("{} cards have been loaded.", loaded))
            }
            Err(DomainError::FileNotFound(_)) => self.say("File not found."),
            Err(e) => {
                warn!(error = %e, "Import failed");
                self.say("File could not be read.")
            }
        }
    }

    fn export_cards(&mut self) -> Result<()> {
        if self.deck.is_empty() {
            return self.say("No cards to export!");
        }
        if let Some(path) = self.prompt_file_name()? {
            self.export_file(&path)?;
        }
        Ok(())
    }

    /// Write the whole deck to `path`. The deck is unchanged on failure.
    #[instrument(level = "debug", skip(self))]
    pub fn export_file(&mut self, path: &Path) -> Result<()> {
        let entries = self.deck.entries();
        match self.store.write_deck(path, &entries) {
            Ok(saved) => {
                info!(saved, "Exported deck file");
                self.say(&format!("{} cards have been saved.", saved))
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                self.say("File could not be saved.")
            }
        }
    }

    fn ask(&mut self, inline_count: Option<String>) -> Result<()> {
        if self.deck.is_empty() {
            return self.say("No cards to study!");
        }

        let input = match inline_count {
            Some(count) => count,
            None => {
                self.say("How many times to ask?")?;
                match self.read_line()? {
                    Some(line) => line,
                    None => return Ok(()),
                }
            }
        };

        let Some(count) = parse_positive_count(input.trim()) else {
            return self.say(&format!(
                "Invalid input given! \"{}\" is not a positive integer!",
                input
            ));
        };

        for _ in 0..count {
            let term = self
                .deck
                .random_card(&mut self.rng)
                .context("Failed to pick a card")?
                .term()
                .to_string();
            self.say(&format!("Print the definition of \"{}\":", term))?;

            let Some(answer) = self.read_line()? else {
                return Ok(());
            };
            let verdict = study::grade(&mut self.deck, &term, &answer)
                .with_context(|| format!("Failed to grade answer for {}", term))?;
            self.say(&verdict.to_string())?;
        }
        Ok(())
    }

    fn save_log(&mut self) -> Result<()> {
        let Some(path) = self.prompt_file_name()? else {
            return Ok(());
        };
        // The confirmation itself is not part of the saved log.
        match self.store.write_log(&path, self.transcript.as_text()) {
            Ok(()) => self.say("The log has been saved."),
            Err(e) => {
                warn!(error = %e, "Saving log failed");
                self.say("File could not be saved.")
            }
        }
    }

    fn prompt_file_name(&mut self) -> Result<Option<PathBuf>> {
        self.say("File name:")?;
        Ok(self
            .read_line()?
            .map(|name| PathBuf::from(name.trim())))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")?;
        self.transcript.record_output(text);
        Ok(())
    }

    /// Next console line without its line ending, `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so stray bytes end up
    /// as an unknown command or a wrong answer instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buffer)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buffer);
        let line = trim_line_ending(&text).to_string();
        self.transcript.record_input(&line);
        Ok(Some(line))
    }
}
