//! This module contains everything related to talking with the player: showing lines of text and
//! reading lines of input back.
//!
//! The game only ever sees the [`Console`] trait. On a real terminal it is backed by `dialoguer`
//! prompts and `console` styling; when stdin is piped (and in tests) it is backed by plain line
//! reads and writes.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// The kind of a line shown to the player. Terminals style each kind differently; plain output
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    /// Recoverable problems with what the player typed.
    Complaint,
    /// Warmer/colder hints.
    Hint,
    /// Everything else: greetings, summaries.
    Plain,
    /// A correct guess.
    Success,
    /// A wrong guess.
    Wrong,
}

/// A two-way channel with the player.
pub(crate) trait Console {
    /// Shows `prompt` and reads one line of input, without its line terminator. Returns `None` once
    /// the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Shows one line of text.
    fn show(&mut self, tone: Tone, text: &str) -> Result<()>;
}

/// A console over any pair of reader and writer, reading one line per prompt. Output carries no
/// styling.
pub(crate) struct Lines<R, W> {
    /// Where lines are read from.
    input: R,
    /// Where prompts and messages go.
    output: W,
}

impl<R: BufRead, W: Write> Lines<R, W> {
    /// Consumes the console and hands back the writer, so tests can look at what was shown.
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Wraps a reader and a writer.
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for Lines<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // the prompt was left dangling without a newline
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn show(&mut self, _tone: Tone, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// A console over the attached terminal, with `dialoguer` prompts and styled output.
pub(crate) struct Terminal {
    /// The terminal handle everything is written to.
    term: Term,
    /// The prompt theme.
    theme: ColorfulTheme,
}

impl Terminal {
    /// Attaches to standard output.
    pub(crate) fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let input: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{}", style(prompt).bold()))
            .allow_empty(true)
            .interact_text_on(&self.term)?;

        Ok(Some(input))
    }

    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        let styled = match tone {
            Tone::Complaint => style(text).yellow(),
            Tone::Hint => style(text).cyan().italic(),
            Tone::Plain => style(text),
            Tone::Success => style(text).green().bold(),
            Tone::Wrong => style(text).red(),
        };

        self.term.write_line(&format!("{styled}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, Lines, Tone};

    #[test]
    fn reads_lines_until_exhausted() {
        let mut console = Lines::new("12\r\nabc\n".as_bytes(), Vec::new());

        assert_eq!(console.read_line("Guess").unwrap().as_deref(), Some("12"));
        assert_eq!(console.read_line("Guess").unwrap().as_deref(), Some("abc"));
        assert_eq!(console.read_line("Guess").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Guess> Guess> Guess> \n");
    }

    #[test]
    fn shows_plain_text() {
        let mut console = Lines::new("".as_bytes(), Vec::new());
        console.show(Tone::Success, "Hooray!").unwrap();

        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Hooray!\n");
    }
}
