//! Interactive prompts with press-enter-for-default semantics.
//!
//! Generic over the input/output streams so the flow can be driven from a
//! `Cursor` in tests instead of a real terminal.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Ask one question and read one line. Empty answers (including EOF) select
/// `default`. The answer is not validated beyond trimming.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(output, "Enter {} [Press Enter for default: {}]: ", label, default)
        .context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read input")?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}
