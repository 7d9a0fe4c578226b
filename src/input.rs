use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

/// Outcome of interpreting one line of user input.
#[derive(Debug, PartialEq)]
enum Entry {
    Value(f64),
    Default,
    Invalid,
}

/// Prompt for one score on stdin.
///
/// Empty input (or EOF) takes `default`; anything unparseable re-prompts.
/// The returned value is clamped to `range`, matching the guarantee the
/// original slider controls provided. Prompts go to stderr so stdout stays
/// clean for the JSON report.
pub fn score(label: &str, range: (f64, f64), default: f64) -> Result<f64> {
    let (lo, hi) = range;
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        eprint!(
            "  {} {} [{}-{}] ({}): ",
            "?".cyan(),
            label,
            lo,
            hi,
            default
        );
        io::stderr().flush()?;

        line.clear();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: behave as if the default was accepted.
            eprintln!();
            return Ok(default.clamp(lo, hi));
        }

        match interpret(&line) {
            Entry::Value(v) => return Ok(v.clamp(lo, hi)),
            Entry::Default => return Ok(default.clamp(lo, hi)),
            Entry::Invalid => {
                eprintln!(
                    "  {} not a number, enter a value between {} and {}",
                    "!".yellow(),
                    lo,
                    hi
                );
            }
        }
    }
}

fn interpret(line: &str) -> Entry {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Entry::Default;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Entry::Value(v),
        _ => Entry::Invalid,
    }
}
