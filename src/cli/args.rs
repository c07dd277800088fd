// src/cli/args.rs
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Deck file to import at startup
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Deck file to export to on exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Fixed seed for picking cards
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse process arguments, accepting the single-dash `-import`/`-export` spellings.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrite `-import` and `-export` to their `--` forms.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-import") => OsString::from("--import"),
            Some("-export") => OsString::from("--export"),
            _ => arg,
        })
        .collect()
}
