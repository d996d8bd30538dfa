//! Line-oriented interactive mode.
//!
//! Each line is either a `:command` or a key script. The display is redrawn
//! after every line.

use super::display::{render, render_history};
use crate::error::Result;
use crate::input::parse_script;
use crate::session::Session;
use crate::storage::Storage;
use std::io::{BufRead, Write};

const HELP: &str = "\
keys:     0-9 . + - * / x : ÷ × − % = AC +/- ⌫ <Enter> <Esc> <BS>
commands: :history  :reuse N  :clear-history  :theme  :help  :quit";

/// A parsed `:command` line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    History,
    ClearHistory,
    Reuse(usize),
    Theme,
}

impl Command {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            ":q" | ":quit" => Ok(Self::Quit),
            ":help" | ":h" => Ok(Self::Help),
            ":history" => Ok(Self::History),
            ":clear-history" => Ok(Self::ClearHistory),
            ":theme" => Ok(Self::Theme),
            ":reuse" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n >= 1 => Ok(Self::Reuse(n)),
                _ => Err("usage: :reuse N (N counts from 1)".to_string()),
            },
            other => Err(format!("unknown command {other:?}, try :help")),
        }
    }
}

/// Run the interactive loop until `:quit` or end of input.
pub fn run<S, R, W>(session: &mut Session<S>, reader: R, writer: &mut W, color: bool) -> Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", render(&session.frame(), session.theme(), color))?;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(writer, "{HELP}")?,
                Ok(Command::History) => {
                    writeln!(writer, "{}", render_history(session.history().entries()))?
                }
                Ok(Command::ClearHistory) => {
                    if let Err(e) = session.clear_history() {
                        writeln!(writer, "error: {e}")?;
                    }
                }
                Ok(Command::Reuse(n)) => match session.reuse_history(n - 1) {
                    Some(frame) => {
                        writeln!(writer, "{}", render(&frame, session.theme(), color))?
                    }
                    None => writeln!(writer, "error: no history entry {n}")?,
                },
                Ok(Command::Theme) => match session.cycle_theme() {
                    Ok(theme) => {
                        writeln!(writer, "theme: {theme}")?;
                        writeln!(writer, "{}", render(&session.frame(), theme, color))?;
                    }
                    Err(e) => writeln!(writer, "error: {e}")?,
                },
                Err(message) => writeln!(writer, "error: {message}")?,
            }
            continue;
        }

        let inputs = match parse_script(line) {
            Ok(inputs) => inputs,
            Err(e) => {
                writeln!(writer, "error: {e}")?;
                continue;
            }
        };

        for input in inputs {
            if let Err(e) = session.dispatch(input) {
                // The calculation went through; only persisting it failed.
                tracing::warn!(error = %e, "failed to save history");
            }
        }
        writeln!(writer, "{}", render(&session.frame(), session.theme(), color))?;
    }

    writer.flush()?;
    Ok(())
}
