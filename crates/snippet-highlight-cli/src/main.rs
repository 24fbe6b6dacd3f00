//! Search snippet highlighter
//!
//! Reads result snippets from stdin (one per line) and highlights them for a search query.
//!
//! # Usage
//!
//! ```bash
//! echo "the building was cooking" | cargo run -p snippet-highlight-cli -- '🔧:^[bcd].*ing$'
//! echo "It was the best of times" | cargo run -p snippet-highlight-cli -- '📚:It was' 'SENTENCE_REGEX:^It was'
//! cargo run -p snippet-highlight-cli -- --cheat-sheet
//! ```
//!
//! # Environment
//!
//! - `SNIPPET_HIGHLIGHT_FORMAT`: `ansi` (default) or `json` (one JSON object per snippet)
//! - `SNIPPET_HIGHLIGHT_CASE_SENSITIVE=1`: match case-sensitively
//! - `SNIPPET_HIGHLIGHT_KEEP_ANCHORS=1`: keep `^`/`$` in backend patterns
//! - `RUST_LOG=debug`: log why a query could not be highlighted

use crossterm::style::Stylize;
use snippet_highlight::{Highlighter, ResolveOptions, SearchMode, Segment};
use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Ansi,
    Json,
}

#[derive(Debug, Clone, Copy)]
struct Config {
    format: OutputFormat,
    options: ResolveOptions,
}

impl Config {
    fn from_env() -> Self {
        let format = match env::var("SNIPPET_HIGHLIGHT_FORMAT")
            .ok()
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => OutputFormat::Json,
            Some("ansi") | Some("") | None => OutputFormat::Ansi,
            Some(other) => {
                log::warn!("unknown SNIPPET_HIGHLIGHT_FORMAT '{other}', using ansi");
                OutputFormat::Ansi
            }
        };

        let options = ResolveOptions::default()
            .case_sensitive(env_flag("SNIPPET_HIGHLIGHT_CASE_SENSITIVE"))
            .strip_server_anchors(!env_flag("SNIPPET_HIGHLIGHT_KEEP_ANCHORS"));

        Self { format, options }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_ascii_lowercase())
        .is_some_and(|s| matches!(s.as_str(), "1" | "true" | "yes" | "on"))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || matches!(args[1].as_str(), "-h" | "--help") {
        eprintln!("Usage: {} <query> [server-pattern] < snippets.txt", args[0]);
        eprintln!("       {} --cheat-sheet", args[0]);
        eprintln!("\nExample:");
        eprintln!("  echo 'book cool tree' | {} '\u{1F4CE}:2'", args[0]);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args[1] == "--cheat-sheet" {
        write_cheat_sheet(&mut out)?;
        return out.flush();
    }

    let config = Config::from_env();
    let server_pattern = args.get(2).map(String::as_str).unwrap_or_default();
    let highlighter = Highlighter::from_raw(&args[1], server_pattern, &config.options);
    if !highlighter.is_active() {
        log::warn!("query '{}' has no usable pattern; printing snippets as-is", args[1]);
    }

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let segments = highlighter.highlight(&line);
        match config.format {
            OutputFormat::Ansi => write_ansi(&mut out, &segments)?,
            OutputFormat::Json => write_json(&mut out, index, &segments)?,
        }
    }

    out.flush()
}

fn write_cheat_sheet(out: &mut impl Write) -> io::Result<()> {
    for mode in SearchMode::ALL {
        writeln!(
            out,
            "{}  {:<22} {}",
            mode.glyph(),
            mode.name(),
            mode.description()
        )?;
    }
    Ok(())
}

fn write_ansi(out: &mut impl Write, segments: &[Segment]) -> io::Result<()> {
    for segment in segments {
        if segment.is_match {
            write!(out, "{}", segment.text.as_str().black().on_yellow())?;
        } else {
            write!(out, "{}", segment.text)?;
        }
    }
    writeln!(out)
}

fn write_json(out: &mut impl Write, index: usize, segments: &[Segment]) -> io::Result<()> {
    let record = serde_json::json!({
        "snippet": index,
        "matches": segments.iter().filter(|s| s.is_match).count(),
        "segments": segments,
    });
    serde_json::to_writer(&mut *out, &record).map_err(io::Error::other)?;
    writeln!(out)
}
