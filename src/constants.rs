// src/constants.rs
//
// Application-wide constants shared by the session driver, deck files and config.

/// Prompt printed before every command is read.
pub const MENU_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Field separator of deck files: `term:definition[:mistakes]`.
///
/// Used in: `infrastructure/deck_file.rs`
pub const FIELD_DELIMITER: char = ':';

/// Directory below the platform config dir that holds the config file.
pub const CONFIG_DIR_NAME: &str = "flashdeck";

/// Name of the TOML config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
