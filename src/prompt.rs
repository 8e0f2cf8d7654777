//! Interactive prompt capability.
//!
//! The orchestrator and the adjustment loop never talk to the terminal
//! directly; they ask a [`Prompter`] for answers. [`TerminalPrompter`] is the
//! line-based implementation used by the binary and works over any
//! `BufRead`/`Write` pair.

use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before an answer was given")]
    Closed,

    #[error("Choice {0} is not one of the menu entries")]
    InvalidChoice(usize),
}

/// Source of user answers.
pub trait Prompter {
    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Free text; an empty answer yields `default`.
    fn input(&mut self, message: &str, default: &str) -> Result<String, PromptError>;

    /// Integer answer; an empty answer yields `default`.
    fn number(&mut self, message: &str, default: i32) -> Result<i32, PromptError>;

    /// Pick one of `choices`, returning its index.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError>;

    /// Informational line for the user.
    fn say(&mut self, message: &str);

    /// Error line for the user.
    fn warn(&mut self, message: &str);
}

/// A closed set of menu entries that can be offered through [`choose`].
pub trait Choice: Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Present every variant of `C` and return the one picked.
pub fn choose<C: Choice>(prompter: &mut dyn Prompter, message: &str) -> Result<C, PromptError> {
    let labels: Vec<&str> = C::ALL.iter().map(|c| c.label()).collect();
    let index = prompter.select(message, &labels)?;
    C::ALL.get(index).copied().ok_or(PromptError::InvalidChoice(index))
}

/// Line-oriented prompter over a reader/writer pair.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the writer (useful for inspecting output).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "? {} ", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn line(&mut self, text: &str) {
        // Output is best-effort; a closed stdout must not abort the run.
        let _ = writeln!(self.writer, "{}", text);
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{} {}", message, hint))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.line("Please answer y or n."),
            }
        }
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.ask(&format!("{} ({})", message, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    fn number(&mut self, message: &str, default: i32) -> Result<i32, PromptError> {
        loop {
            let answer = self.ask(&format!("{} ({})", message, default))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.line("Please enter a whole number."),
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError> {
        loop {
            self.line(&format!("? {}", message));
            for (i, choice) in choices.iter().enumerate() {
                self.line(&format!("  {}) {}", i + 1, choice));
            }
            let answer = self.ask(&format!("Answer [1-{}]", choices.len()))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => self.line("Please pick one of the listed numbers."),
            }
        }
    }

    fn say(&mut self, message: &str) {
        self.line(message);
    }

    fn warn(&mut self, message: &str) {
        self.line(message);
    }
}
