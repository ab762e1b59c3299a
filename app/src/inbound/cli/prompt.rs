//! Question-and-answer helper over a reader and writer.

use std::io::{BufRead, Write};

use super::CliError;

/// Answer that steps the wizard back instead of answering.
pub(super) const BACK: &str = "<";

pub(super) struct Prompt<'a, R, W> {
    reader: &'a mut R,
    writer: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub(super) fn new(reader: &'a mut R, writer: &'a mut W) -> Self {
        Self { reader, writer }
    }

    pub(super) fn writer(&mut self) -> &mut W {
        self.writer
    }

    pub(super) fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Trimmed answer; end of input is an error.
    pub(super) fn ask(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.writer, "{label}: ")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed {
                expected: label.to_owned(),
            });
        }
        Ok(line.trim().to_owned())
    }

    /// Answer, keeping `current` when left blank.
    pub(super) fn ask_or_keep(&mut self, label: &str, current: &str) -> Result<String, CliError> {
        let answer = if current.is_empty() {
            self.ask(label)?
        } else {
            self.ask(&format!("{label} [{current}]"))?
        };
        Ok(if answer.is_empty() {
            current.to_owned()
        } else {
            answer
        })
    }

    /// `yes`/`no` answer; anything else leaves the question unanswered.
    pub(super) fn ask_yes_no(&mut self, label: &str) -> Result<Option<bool>, CliError> {
        let answer = self.ask(&format!("{label} (yes/no)"))?;
        Ok(match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        })
    }

    /// Pick one of `options` by 1-based number; blank or out of range picks
    /// nothing.
    pub(super) fn choose<'o, T>(
        &mut self,
        label: &str,
        options: &'o [T],
        describe: impl Fn(&T) -> String,
    ) -> Result<Option<&'o T>, CliError> {
        for (position, option) in options.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", position + 1, describe(option))?;
        }
        let answer = self.ask(label)?;
        Ok(answer
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| options.get(index)))
    }
}
