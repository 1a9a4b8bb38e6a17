//! Line-oriented prompting over any reader/writer pair, so the command loop
//! runs the same against a real terminal and against byte buffers in tests.
//!
//! Every input line is trimmed. Failures to read or write surface as
//! `PhonebookError::Terminal`, which the command loop treats as fatal.

use phonebook::error::{PhonebookError, Result, ValidationError};
use phonebook::model::{ContactId, FieldUpdate};
use std::io::{BufRead, Write};

/// Typed at a clearable field to empty it.
pub const CLEAR_MARKER: &str = "<";

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one line. `None` means end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(PhonebookError::Terminal)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn ask_command(&mut self) -> Result<Option<String>> {
        self.read_line("Enter command or type 'help' to get help: ")
    }

    pub fn ask_required(&mut self, field: &str) -> Result<String> {
        let value = self
            .read_line(&format!("{} (required): ", field))?
            .unwrap_or_default();
        if value.is_empty() {
            return Err(ValidationError::RequiredField(field.to_string()).into());
        }
        Ok(value)
    }

    pub fn ask_optional(&mut self, field: &str) -> Result<Option<String>> {
        Ok(self
            .read_line(&format!("{} (optional): ", field))?
            .filter(|value| !value.is_empty()))
    }

    pub fn ask_id(&mut self, field: &str) -> Result<ContactId> {
        parse_id(&self.ask_required(field)?)
    }

    /// Empty input keeps the field. `clearable` fields also accept [`CLEAR_MARKER`].
    pub fn ask_update(&mut self, field: &str, clearable: bool) -> Result<FieldUpdate> {
        let prompt = if clearable {
            format!(
                "New {} (keep empty if you do not want to change it, or type '{}' to clear it): ",
                field, CLEAR_MARKER
            )
        } else {
            format!(
                "New {} (keep empty if you do not want to change it): ",
                field
            )
        };
        let value = self.read_line(&prompt)?.unwrap_or_default();
        Ok(match value.as_str() {
            "" => FieldUpdate::Keep,
            CLEAR_MARKER if clearable => FieldUpdate::Clear,
            _ => FieldUpdate::Set(value),
        })
    }

    /// Yes unless the answer starts with `n`. Empty input or end of input means yes.
    pub fn confirm_save(&mut self) -> Result<bool> {
        let answer = self
            .read_line("Save changes [y/n] (Default: y)? ")?
            .unwrap_or_default();
        Ok(!answer.to_lowercase().starts_with('n'))
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(PhonebookError::Terminal)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn parse_id(value: &str) -> Result<ContactId> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonIntegerId(value.to_string()).into());
    }
    value
        .parse()
        .map_err(|_| ValidationError::NonIntegerId(value.to_string()).into())
}
