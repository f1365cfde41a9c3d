//! Line-based interactive prompts.
//!
//! Everything interactive goes through the [`Prompter`] trait so flows can be
//! driven by scripted input in tests.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Pick one of `choices`; returns its index.
    fn select(&mut self, message: &str, choices: &[String]) -> AppResult<usize>;

    /// Free-text answer; an empty line yields `default` when given.
    fn input(&mut self, message: &str, default: Option<&str>) -> AppResult<String>;

    fn password(&mut self, message: &str) -> AppResult<String>;

    fn confirm(&mut self, message: &str, default: bool) -> AppResult<bool>;
}

/// Prompter reading answers line by line from `input` and writing questions to `output`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

pub type StdinPrompter = LinePrompter<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompter {
    pub fn stdio() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(AppError::PromptAborted(question.trim().to_string()));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> AppResult<usize> {
        if choices.is_empty() {
            return Err(AppError::InvalidInput(format!("nothing to choose for '{}'", message)));
        }

        writeln!(self.output, "? {}", message)?;
        for (i, c) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, c)?;
        }

        loop {
            let answer = self.ask(&format!("Choose [1-{}]: ", choices.len()))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, ">> Please enter a number between 1 and {}", choices.len())?,
            }
        }
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> AppResult<String> {
        let question = match default {
            Some(d) => format!("? {} ({}) ", message, d),
            None => format!("? {} ", message),
        };
        let answer = self.ask(&question)?;
        match default {
            Some(d) if answer.is_empty() => Ok(d.to_string()),
            _ => Ok(answer),
        }
    }

    fn password(&mut self, message: &str) -> AppResult<String> {
        self.ask(&format!("? {} ", message))
    }

    fn confirm(&mut self, message: &str, default: bool) -> AppResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("? {} {} ", message, hint))?;
        Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}
