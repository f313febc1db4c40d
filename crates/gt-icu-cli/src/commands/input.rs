//! Message input shared by every command that reads a message.

use std::fs::read_to_string;
use std::io::{self, stdin};
use std::path::PathBuf;

use gt_icu::ParseError;
use miette::{miette, Result};

use crate::output::MessageDiagnostic;

/// Where to read the message from. Defaults to standard input.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// Message text
    #[arg(conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// A message read from the command line, a file or stdin.
pub struct Input {
    /// Display name used in diagnostics.
    pub name: String,
    pub text: String,
}

impl InputArgs {
    /// Read the message text.
    pub fn read(&self) -> Result<Input> {
        if let Some(message) = &self.message {
            return Ok(Input {
                name: "<message>".to_string(),
                text: message.clone(),
            });
        }
        if let Some(path) = &self.file {
            let text = read_to_string(path)
                .map_err(|e| miette!("Cannot read message file {}: {}", path.display(), e))?;
            return Ok(Input {
                name: path.display().to_string(),
                text: strip_final_newline(text),
            });
        }
        let text = io::read_to_string(stdin()).map_err(|e| miette!("Cannot read stdin: {}", e))?;
        Ok(Input {
            name: "<stdin>".to_string(),
            text: strip_final_newline(text),
        })
    }
}

impl Input {
    /// Turn a parse error into a diagnostic pointing into this input.
    pub fn diagnose(&self, err: &ParseError) -> miette::Report {
        MessageDiagnostic::from_parse_error(&self.name, &self.text, err).into()
    }
}

/// Files and pipes usually end with a newline that is not part of the message.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_newline() {
        assert_eq!(strip_final_newline("a\n".to_string()), "a");
        assert_eq!(strip_final_newline("a\r\n".to_string()), "a");
        assert_eq!(strip_final_newline("a\n\n".to_string()), "a\n");
        assert_eq!(strip_final_newline("a".to_string()), "a");
    }
}
