//! Terminal and JSON output for the CLI.
//!
//! In `--json` mode human-oriented lines are suppressed and only
//! [`Output::json`] payloads (and errors) reach the terminal.

use console::{style, StyledObject};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

enum Stream {
    Stdout,
    Stderr,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, stream: Stream, marker: StyledObject<&str>, msg: &str) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{} {}", marker, msg),
            Stream::Stderr => eprintln!("{} {}", marker, msg),
        }
    }

    pub fn info(&self, msg: &str) {
        self.emit(Stream::Stdout, style("ℹ").cyan(), msg);
    }

    /// Positive outcome, such as an accepted payment.
    pub fn success(&self, msg: &str) {
        self.emit(Stream::Stdout, style("✓").green().bold(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Errors are reported in JSON mode too, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(Stream::Stderr, style("→").dim(), &style(msg).dim().to_string());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Pretty-printed JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("failed to encode JSON: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// One row of a fixed-width table.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", row.join("  ").trim_end());
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Left-align `text` in a column of `width` characters.
///
/// Counts chars rather than bytes so Cyrillic names line up.
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
