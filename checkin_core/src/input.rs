//! Input validation and line sources for the check-in prompt.

use crate::types::IDENTIFIER_LEN;
use crate::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Reserved token that ends the session, compared ignoring case
pub const QUIT_TOKEN: &str = "quit";

/// A line of input that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Exactly ten decimal digits
    Identifier(String),
    /// Anything else, usually a name
    Token(String),
}

/// Rejected input. The messages are shown to the operator as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Person or identifier field cannot be empty")]
    Empty,

    #[error("The identifier you have entered is not 10 digits long")]
    InvalidIdentifierLength { len: usize },
}

/// Classify one raw input line
pub fn validate(input: &str) -> std::result::Result<Input, InputError> {
    if input.eq_ignore_ascii_case(QUIT_TOKEN) {
        return Ok(Input::Quit);
    }
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    if input.bytes().all(|b| b.is_ascii_digit()) {
        if input.len() != IDENTIFIER_LEN {
            return Err(InputError::InvalidIdentifierLength { len: input.len() });
        }
        return Ok(Input::Identifier(input.to_string()));
    }
    Ok(Input::Token(input.to_string()))
}

/// Where the session gets its lines from
pub trait InputSource {
    /// Next line without its terminator, or `None` once input is exhausted
    fn read_line(&mut self) -> Result<Option<String>>;
}

fn strip_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

/// Interactive source that prompts before every read
pub struct PromptSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for PromptSource<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        writeln!(
            self.prompt_out,
            "Please enter the name or identifier (10 digits) of the person who just entered"
        )?;
        write!(self.prompt_out, "[Type 'quit' to exit program]: ")?;
        self.prompt_out.flush()?;

        // Terminals in a legacy encoding send bytes that are not UTF-8
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        strip_line_ending(&mut line);
        Ok(Some(line))
    }
}

/// Fixed sequence of lines, consumed front to back
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
