//! Line-oriented session loop
//!
//! Reads one command per line, splits it into words the way a shell would
//! for simple quoting, and hands the parsed command to [`Cli`]. A failing
//! command prints its error and the loop carries on.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, Parser};
use log::{debug, info};
use narrative_core::OperationStatus;

use crate::cli::{Cli, Flow, Line};

const PROMPT: &str = "np> ";

/// Split a command line into words.
///
/// Whitespace separates words. Single quotes keep everything up to the
/// closing quote; double quotes do the same but honor backslash escapes, as
/// does a backslash outside quotes. `""` yields an empty word.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => bail!("Unterminated single quote"),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c) => word.push(c),
                            None => bail!("Unterminated double quote"),
                        },
                        Some(c) => word.push(c),
                        None => bail!("Unterminated double quote"),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => word.push(c),
                    None => bail!("Trailing backslash"),
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// Run the session until `quit` or end of input.
pub fn run<R: BufRead>(cli: &mut Cli, mut input: R, interactive: bool) -> Result<()> {
    cli.show_plan()?;

    let mut line = String::new();
    loop {
        if interactive {
            print!("{PROMPT}");
            io::stdout().flush()?;
        }

        line.clear();
        if input
            .read_line(&mut line)
            .context("Failed to read command")?
            == 0
        {
            break;
        }

        let words = match tokenize(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                eprint!("{}", OperationStatus::failure(e.to_string()));
                continue;
            }
        };
        debug!("command: {words:?}");

        let command = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                print!("{}", e.render());
                continue;
            }
            Err(e) => {
                eprint!("{}", e.render());
                continue;
            }
        };

        match cli.handle(command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprint!("{}", OperationStatus::failure(format!("{e:#}"))),
        }
    }

    info!("Session ended");
    Ok(())
}
