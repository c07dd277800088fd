mod helpers;

use anyhow::Result;
use flashdeck::application::{DeckStore, Session};
use flashdeck::domain::{CardEntry, Deck};
use flashdeck::infrastructure::FileDeckStore;
use flashdeck::util::testing::{self, ZeroRng};
use helpers::{decks, TestWorkspace};
use std::io::Cursor;

#[ctor::ctor]
fn init() {
    testing::init_test_setup().expect("Failed to initialize test setup");
}

fn run_script(deck: Deck, script: &str, export_on_exit: Option<std::path::PathBuf>) -> Result<(Deck, String)> {
    let mut session = Session::new(
        FileDeckStore::new(),
        ZeroRng,
        Cursor::new(script.to_string()),
        Vec::new(),
    )
    .with_deck(deck);
    if let Some(path) = export_on_exit {
        session = session.with_export_on_exit(path);
    }

    session.run()?;

    let output = String::from_utf8(session.output().clone())?;
    Ok((session.deck().clone(), output))
}

#[test]
fn given_exported_deck_when_importing_into_fresh_deck_then_triples_match() -> Result<()> {
    // Arrange
    let workspace = TestWorkspace::new()?;
    let mut original = Deck::new();
    original.merge(vec![
        CardEntry::new("France", "Paris", 0),
        CardEntry::new("Germany", "Berlin", 2),
        CardEntry::new("Italy", "Rome", 1),
    ]);
    let path = workspace.path("deck.txt");
    let mut store = FileDeckStore::new();

    // Act
    store.write_deck(&path, &original.entries())?;
    let mut fresh = Deck::new();
    fresh.merge(store.read_deck(&path)?.entries);

    // Assert
    assert_eq!(fresh.entries(), original.entries());
    Ok(())
}

#[test]
fn given_cards_added_at_console_when_exporting_and_reimporting_then_triples_match() -> Result<()> {
    // Arrange
    let workspace = TestWorkspace::new()?;
    let path = workspace.path("added.txt");
    let script = "add\nratio\n1:2\nadd\nratio\none half\nadd\n pi \n 3.14 \nexit\n";

    // Act
    let (deck, output) = run_script(Deck::new(), script, Some(path.clone()))?;
    let mut fresh = Deck::new();
    fresh.merge(FileDeckStore::new().read_deck(&path)?.entries);

    // Assert
    assert!(output.contains("The definition cannot contain \":\"."));
    assert!(output.contains("2 cards have been saved."));
    assert_eq!(
        deck.entries(),
        vec![CardEntry::new("ratio", "one half", 0), CardEntry::new("pi", "3.14", 0)]
    );
    assert_eq!(fresh.entries(), deck.entries());
    Ok(())
}

#[test]
fn given_duplicate_lines_when_importing_then_later_line_wins_with_default_count() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let path = workspace.deck_file("dupes.txt", "x:y:5\nx:z\n")?;
    let script = format!("import\n{}\nexit\n", path.display());

    let (deck, output) = run_script(Deck::new(), &script, None)?;

    assert!(output.contains("1 cards have been loaded."));
    assert_eq!(deck.entries(), vec![CardEntry::new("x", "z", 0)]);
    Ok(())
}

#[test]
fn given_file_with_garbage_when_importing_then_loads_valid_lines() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let path = workspace.deck_file("mixed.txt", decks::WITH_GARBAGE)?;
    let script = format!("import\n{}\nhardest card\nexit\n", path.display());

    let (deck, output) = run_script(Deck::new(), &script, None)?;

    assert!(output.contains("Skipping malformed line 2: \"not a card\""));
    assert!(output.contains("Skipping malformed line 3: \"Spain:Madrid:x\""));
    assert!(output.contains("2 cards have been loaded."));
    assert!(output.contains("The hardest card is \"Italy\". You have 3 errors answering it."));
    assert_eq!(deck.len(), 2);
    Ok(())
}

#[test]
fn given_missing_file_when_importing_then_session_continues() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let script = format!(
        "import\n{}\nadd\nFrance\nParis\nexit\n",
        workspace.path("absent.txt").display()
    );

    let (deck, output) = run_script(Deck::new(), &script, None)?;

    assert!(output.contains("File not found."));
    assert!(deck.contains_term("France"));
    Ok(())
}

#[test]
fn given_study_session_when_exiting_with_export_then_file_keeps_mistakes() -> Result<()> {
    // Arrange
    let workspace = TestWorkspace::new()?;
    let input = workspace.deck_file("capitals.txt", decks::CAPITALS)?;
    let output_path = workspace.path("out.txt");
    let script = format!("import\n{}\nask 2\nBerlin\nLyon\nexit\n", input.display());

    // Act
    let (_, output) = run_script(Deck::new(), &script, Some(output_path))?;

    // Assert: ZeroRng always asks the first card, "France"
    assert!(output.contains(
        "Wrong. The right answer is \"Paris\", but your definition is correct for \"Germany\"."
    ));
    assert!(output.contains("Wrong. The right answer is \"Paris\"."));
    assert!(output.contains("3 cards have been saved."));
    assert_eq!(
        workspace.read("out.txt")?,
        "France:Paris:2\nGermany:Berlin:2\nItaly:Rome:1\n"
    );
    Ok(())
}

#[test]
fn given_session_when_saving_log_then_file_holds_transcript() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let log_path = workspace.path("session.log");
    let script = format!("remove\nghost\nlog\n{}\nexit\n", log_path.display());

    let (_, output) = run_script(Deck::new(), &script, None)?;

    assert!(output.contains("The log has been saved."));
    let log = workspace.read("session.log")?;
    assert!(log.contains("Can't remove \"ghost\": there is no such card."));
    assert!(log.contains("ghost\n"));
    Ok(())
}

#[test]
fn given_directory_as_export_target_when_exporting_then_reports_failure() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let mut deck = Deck::new();
    deck.merge(vec![CardEntry::new("France", "Paris", 0)]);
    let script = format!("export\n{}\nexit\n", workspace.root.display());

    let (deck, output) = run_script(deck, &script, None)?;

    assert!(output.contains("File could not be saved."));
    assert_eq!(deck.len(), 1);
    Ok(())
}
