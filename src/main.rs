//! CLI binary: annotates one complete model reply read from stdin and prints
//! the result as JSON.

use anyhow::Context;
use clap::Parser;
use kokoro_annotator_lib::config::{self, LOCALE_ENV};
use kokoro_annotator_lib::{Annotator, Locale};
use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;

/// Turn a raw character reply into display text plus emotion and motion cues.
#[derive(Parser)]
#[command(name = "kokoro-annotate", version, about)]
struct Cli {
    /// Path to JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in keyword table to use (en, zh, ja).
    #[arg(short, long, value_parser = clap::value_parser!(Locale))]
    locale: Option<Locale>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

/// Replies come from a model; invalid UTF-8 is replaced, never fatal.
fn decode_reply(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn main() -> anyhow::Result<()> {
    kokoro_annotator_lib::init_tracing();
    let cli = Cli::parse();

    let file = cli
        .config
        .as_deref()
        .map(config::try_load_config)
        .transpose()?;
    let env_locale = std::env::var(LOCALE_ENV).ok();
    let cfg = config::resolve_config(file, env_locale.as_deref(), cli.locale);
    tracing::debug!(locale = %cfg.locale, custom_keywords = cfg.keywords.is_some(), "annotator configured");

    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read reply from stdin")?;
    let raw = decode_reply(&bytes);

    let annotator = Annotator::new(cfg.keyword_table());
    let parsed = annotator.annotate(Some(&*raw));

    let json = if cli.pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    println!("{}", json);
    Ok(())
}
