//! Interactive collector for merge roots.
//!
//! Only asks for what arguments and the config file left unset.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};

use super::Format;
use crate::config::{MergeRoots, PartialRoots};

pub fn collect_roots<R: BufRead, W: Write>(
    partial: PartialRoots,
    format: Format,
    input: &mut R,
    output: &mut W,
) -> Result<MergeRoots> {
    let mut roots = partial;
    let mut step = 1;

    writeln!(output, "=== Apply Translations ===")?;

    if roots.input_root.is_none() {
        let question = format!(
            "{}) Enter path to your INPUT folder (nested JSONs): ",
            step
        );
        roots.input_root = Some(ask(input, output, &question)?);
        step += 1;
    }

    if roots.translations_root.is_none() {
        let what = match format {
            Format::Csv => "TRANSLATIONS catalog (CSV file)",
            Format::Flat => "TRANSLATIONS folder (flat JSONs)",
        };
        let question = format!("{}) Enter path to your {}: ", step, what);
        roots.translations_root = Some(ask(input, output, &question)?);
    }

    roots.complete()
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<PathBuf> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("No answer given (end of input)");
    }

    let answer = line.trim();
    if answer.is_empty() {
        bail!("Path must not be empty");
    }
    Ok(PathBuf::from(answer))
}
