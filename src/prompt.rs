//! Interactive fallback when no payload is given on the command line

use crate::error::Result;
use std::io::{BufRead, Write};

const URL_PROMPT: &str = "Enter your menu link or table URL: ";
const FILENAME_PROMPT: &str =
    "Enter filename to save QR code (leave empty for auto-generated name): ";

/// Answers collected from the interactive prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    /// Payload as typed, possibly empty
    pub payload: String,
    /// Output target, `None` when left empty
    pub target: Option<String>,
}

/// Ask for the payload and then the optional file name.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PromptAnswers> {
    let payload = ask_line(input, output, URL_PROMPT)?;
    let filename = ask_line(input, output, FILENAME_PROMPT)?;

    Ok(PromptAnswers {
        payload,
        target: (!filename.is_empty()).then_some(filename),
    })
}

/// Print `message`, read one line and strip its line ending. EOF reads as empty.
fn ask_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
