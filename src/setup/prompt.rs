//! Line-oriented prompting
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! interactive wizard runs the same against a terminal and against a test
//! script. Typing `back` or `quit` at any prompt is reported separately from
//! a value.

use std::io::{BufRead, Write};

use crate::error::{LedError, LedResult};

/// What the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Back,
    Quit,
}

impl<T> Reply<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Value(v) => Reply::Value(f(v)),
            Reply::Back => Reply::Back,
            Reply::Quit => Reply::Quit,
        }
    }
}

/// Prompt/answer channel
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> LedResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Ask a free-form question
    ///
    /// # Errors
    ///
    /// Fails with `LedError::Setup` when the input ends.
    pub fn ask(&mut self, prompt: &str) -> LedResult<Reply<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(LedError::Setup("input ended before the wizard finished".into()));
        }

        let answer = line.trim();
        Ok(match answer.to_lowercase().as_str() {
            "back" => Reply::Back,
            "quit" | "exit" => Reply::Quit,
            _ => Reply::Value(answer.to_string()),
        })
    }

    /// Ask for a value until it parses
    ///
    /// An empty answer takes `default` when one is given. Parse failures are
    /// printed and the question is repeated.
    pub fn field<T, F>(&mut self, label: &str, default: Option<&str>, parse: F) -> LedResult<Reply<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let prompt = match default {
            Some(d) => format!("{} [{}]: ", label, d),
            None => format!("{}: ", label),
        };

        loop {
            let answer = match self.ask(&prompt)? {
                Reply::Value(answer) => answer,
                Reply::Back => return Ok(Reply::Back),
                Reply::Quit => return Ok(Reply::Quit),
            };

            let raw = match (answer.is_empty(), default) {
                (true, Some(d)) => d.to_string(),
                (true, None) => {
                    self.say("  A value is required.")?;
                    continue;
                }
                (false, _) => answer,
            };

            match parse(&raw) {
                Ok(value) => return Ok(Reply::Value(value)),
                Err(message) => self.say(format!("  {}", message))?,
            }
        }
    }

    /// Ask a yes/no question
    pub fn confirm(&mut self, label: &str, default: bool) -> LedResult<Reply<bool>> {
        let hint = if default { "Y/n" } else { "y/N" };
        self.field(&format!("{} ({})", label, hint), Some(if default { "y" } else { "n" }), parse_yes_no)
    }
}

/// Parse `y`/`yes`/`n`/`no`
pub fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Please answer yes or no.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn parse_count(s: &str) -> Result<u32, String> {
        s.parse().map_err(|_| format!("'{}' is not a number", s))
    }

    #[test]
    fn test_field_retries_until_valid() {
        let mut p = prompter("abc\n\n42\n");
        let reply = p.field("Count", None, parse_count).unwrap();
        assert_eq!(reply, Reply::Value(42));

        let output = String::from_utf8(p.output).unwrap();
        assert!(output.contains("'abc' is not a number"));
        assert!(output.contains("A value is required."));
    }

    #[test]
    fn test_field_default() {
        let mut p = prompter("\n");
        assert_eq!(p.field("Count", Some("7"), parse_count).unwrap(), Reply::Value(7));
    }

    #[test]
    fn test_back_and_quit() {
        let mut p = prompter("BACK\nquit\n");
        assert_eq!(p.field("Count", None, parse_count).unwrap(), Reply::Back);
        assert_eq!(p.confirm("Save?", true).unwrap(), Reply::Quit);
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("> "), Err(LedError::Setup(_))));
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("\nmaybe\nno\n");
        assert_eq!(p.confirm("Save?", true).unwrap(), Reply::Value(true));
        assert_eq!(p.confirm("Save?", true).unwrap(), Reply::Value(false));
    }
}
