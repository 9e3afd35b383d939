//! Review command - Page through images and tag them interactively
//!
//! Reads one key per line from stdin:
//! - `u` public, `r` private, `d` remove tag (each moves to the next image)
//! - `n` next, `p` previous, `j` jump to an untagged image
//! - `q` quit

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use super::utils;
use crate::config::Config;
use crate::tags::{Command, Session};

const HELP: &str = "Keys: u=public  r=private  d=untag  n=next  p=previous  j=jump to untagged  q=quit";

/// Execute the review command
pub fn execute(config: &Config) -> Result<()> {
    let Some(mut session) = utils::open_session(config)? else {
        return Ok(());
    };

    println!(
        "Reviewing {} image(s), {} saved tag(s) in {}",
        session.image_count(),
        session.store().len(),
        session.store().path().display()
    );
    if session.store().is_empty() {
        println!("No saved tags yet, starting from the first image");
    }
    println!("{}", HELP.dimmed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}

/// Drive `session` from line-based `input` until `q` or end of input
///
/// A failed save ends the loop with an error: the tag on screen would no
/// longer match the file.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> Result<()> {
    writeln!(output, "{}", utils::format_position(session))?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        match line {
            "" => continue,
            "q" | "Q" | "quit" => break,
            "?" | "h" | "help" => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let mut chars = line.chars();
        let command = match (chars.next(), chars.next()) {
            (Some(key), None) => Command::from_key(key),
            _ => None,
        };

        let Some(command) = command else {
            writeln!(output, "{} {} (? for help)", "Unknown key:".yellow(), line)?;
            continue;
        };

        session.apply(command).with_context(|| {
            format!(
                "Failed to save preferences to {}",
                session.store().path().display()
            )
        })?;

        writeln!(output, "{}", utils::format_position(session))?;
        output.flush()?;
    }

    Ok(())
}
