//! Chord command implementation
//!
//! Prints the three notes of a triad from its chord name.

use anyhow::Result;
use colored::Colorize;
use keysmith_theory::chord_notes;
use std::process::ExitCode;

use super::json_output::{ChordOutput, JsonError};
use crate::display;
use crate::input;
use crate::table::{self, Align};

/// Exit code when the chord notes cannot be derived.
const EXIT_CHORD_ERROR: u8 = 3;

/// Run the chord command
///
/// # Arguments
/// * `name` - Chord name with optional quality suffix (e.g. "C#+", "Gbo")
/// * `verbose` - Whether to annotate the chord quality in human output
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 3 if the chord cannot be resolved
pub fn run(name: &str, verbose: bool, json_output: bool) -> Result<ExitCode> {
    // Keep the quality suffix intact; only the root's letter needs casing.
    let name = input::normalize_tonic(name);

    if json_output {
        run_json(&name)
    } else {
        run_human(&name, verbose)
    }
}

/// Run the chord command with human-readable (colored, tabular) output
fn run_human(name: &str, verbose: bool) -> Result<ExitCode> {
    let notes = match chord_notes(name) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("{} {}", "Unable to generate the chord:".red().bold(), e);
            return Ok(ExitCode::from(EXIT_CHORD_ERROR));
        }
    };

    let pretty = display::pretty_quality(name, verbose);
    let header: Vec<String> = ["Chord", "Triad"].iter().map(|h| h.to_string()).collect();
    let row = vec![pretty.clone(), display::join_notes(&notes, " - ")];

    println!();
    println!("Notes in chord {}:", pretty.cyan().bold());
    println!();
    print!("{}", table::render(&header, &[row], Align::Left));
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Run the chord command with machine-readable JSON output
fn run_json(name: &str) -> Result<ExitCode> {
    let mut output = ChordOutput {
        ok: true,
        chord: name.to_string(),
        notes: Vec::new(),
        errors: Vec::new(),
    };

    let exit = match chord_notes(name) {
        Ok(notes) => {
            output.notes = notes.to_vec();
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.ok = false;
            output.errors.push(JsonError::from_theory(&e));
            ExitCode::from(EXIT_CHORD_ERROR)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(exit)
}
