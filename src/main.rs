use flashdeck::cli::args::Args;
// src/main.rs
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse_normalized();

    // Initialize logging based on verbosity; stdout belongs to the session
    let filter = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("flashdeck={}", filter)
                    .parse()
                    .context("Invalid log directive")?,
            ),
        )
        .init();

    flashdeck::run(args)
}
