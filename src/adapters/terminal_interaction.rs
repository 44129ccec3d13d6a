use std::io::{self, BufRead, Write};

use crate::core::ports::{InteractionError, UserInteraction};

pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }

    fn confirm_stream<R, W>(
        read: &mut R,
        write: &mut W,
        message: &str,
    ) -> Result<bool, InteractionError>
    where
        R: BufRead,
        W: Write,
    {
        write!(write, "{message} [y/N]: ")?;
        write.flush()?;

        let mut input = String::new();
        read.read_line(&mut input)?;

        let answer = input.trim().to_lowercase();
        Ok(answer.starts_with('y'))
    }

    fn prompt_stream<R, W>(
        read: &mut R,
        write: &mut W,
        message: &str,
    ) -> Result<Option<String>, InteractionError>
    where
        R: BufRead,
        W: Write,
    {
        write!(write, "{message}: ")?;
        write.flush()?;

        let mut input = String::new();
        if read.read_line(&mut input)? == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for TerminalInteraction {
    fn confirm(&self, message: &str) -> Result<bool, InteractionError> {
        Self::confirm_stream(&mut io::stdin().lock(), &mut io::stderr(), message)
    }

    fn prompt(&self, message: &str) -> Result<Option<String>, InteractionError> {
        Self::prompt_stream(&mut io::stdin().lock(), &mut io::stderr(), message)
    }

    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
