//! Line-oriented terminal I/O.
//!
//! Commands talk to a [`Console`] rather than to stdin/stdout directly, so
//! the same code drives an interactive terminal (via dialoguer) and piped or
//! scripted input.

use anyhow::{Result, bail};
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub trait Console {
    /// Show `prompt` and read one line, without its line terminator.
    /// Fails once input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn println(&mut self, line: &str) -> Result<()>;

    fn success(&mut self, line: &str) -> Result<()> {
        self.println(line)
    }

    fn error(&mut self, line: &str) -> Result<()> {
        self.println(line)
    }
}

/// Prompt until `validate` accepts the input.
pub fn ask<T, E, F>(console: &mut dyn Console, prompt: &str, validate: F) -> Result<T>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        let input = console.read_line(prompt)?;
        match validate(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(prompt, input = %input, "rejected input");
                console.error(&format!("Invalid input. Please try again. ({e})"))?;
            }
        }
    }
}

/// Interactive terminal: dialoguer prompts and colored status lines.
pub struct TermConsole;

impl Console for TermConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn println(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn success(&mut self, line: &str) -> Result<()> {
        println!("{}", line.green());
        Ok(())
    }

    fn error(&mut self, line: &str) -> Result<()> {
        println!("{}", line.red());
        Ok(())
    }
}

/// Plain line reader/writer for piped input and tests.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed");
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_core::validate::parse_hour;

    fn console(input: &str) -> LineConsole<&[u8], Vec<u8>> {
        LineConsole::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn read_line_strips_terminator_only() {
        let mut console = console("  Room A \r\nnext\n");
        assert_eq!(console.read_line("Where").unwrap(), "  Room A ");
        assert_eq!(console.read_line("Then").unwrap(), "next");
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "Where: Then: "
        );
    }

    #[test]
    fn read_line_fails_when_input_closes() {
        let mut console = console("");
        assert!(console.read_line("Anything").is_err());
    }

    #[test]
    fn last_line_without_newline() {
        let mut console = console("9");
        assert_eq!(console.read_line("Hour").unwrap(), "9");
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let mut console = console("eight\n8\n12\n");
        let hour = ask(&mut console, "Hour", parse_hour).unwrap();
        assert_eq!(hour, 12);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Invalid input. Please try again.").count(), 2);
    }

    #[test]
    fn ask_gives_up_when_input_closes() {
        let mut console = console("eight\n");
        assert!(ask(&mut console, "Hour", parse_hour).is_err());
    }
}
