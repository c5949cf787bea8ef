//! Scale command implementation
//!
//! Prints the notes of a scale and, on request, its diatonic chords.

use anyhow::Result;
use colored::Colorize;
use keysmith_theory::{build_scale, chord_notes, diatonic_chords, ScaleType, TheoryError};
use std::process::ExitCode;

use super::json_output::{ChordEntry, JsonError, ScaleOutput};
use crate::display;
use crate::input;
use crate::table::{self, Align};

/// Exit code when scale generation fails.
const EXIT_SCALE_ERROR: u8 = 1;
/// Exit code when diatonic chord derivation fails.
const EXIT_CHORDS_ERROR: u8 = 2;

/// Run the scale command
///
/// # Arguments
/// * `tonic` - Tonic note as typed by the user (normalized here)
/// * `scale_type` - CLI scale-type spelling (major, minor, natural, harmonic, melodic)
/// * `with_chords` - Whether to also print the diatonic chords
/// * `verbose` - Whether to annotate chord qualities in human output
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the scale cannot be generated, 2 if the
/// diatonic chords cannot be derived
pub fn run(
    tonic: &str,
    scale_type: &str,
    with_chords: bool,
    verbose: bool,
    json_output: bool,
) -> Result<ExitCode> {
    // clap restricts the flag values, so this only fails when the library
    // function is driven directly with a bad spelling.
    let scale_type = input::scale_type_from_cli(scale_type).map_err(|e| {
        anyhow::anyhow!("{e} (expected major, minor, natural, harmonic or melodic)")
    })?;
    let tonic = input::normalize_tonic(tonic);

    if json_output {
        run_json(&tonic, scale_type, with_chords)
    } else {
        run_human(&tonic, scale_type, with_chords, verbose)
    }
}

/// Run the scale command with human-readable (colored, tabular) output
fn run_human(
    tonic: &str,
    scale_type: ScaleType,
    with_chords: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let notes = match build_scale(tonic, scale_type) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("{} {}", "Unable to generate scale:".red().bold(), e);
            return Ok(ExitCode::from(EXIT_SCALE_ERROR));
        }
    };

    let pretty_type = display::title_case(scale_type.name());
    let header: Vec<String> = (1..=notes.len()).map(|i| i.to_string()).collect();

    println!();
    println!(
        "Notes for the {} {} scale:",
        tonic.cyan().bold(),
        pretty_type
    );
    println!();
    print!("{}", table::render(&header, &[notes], Align::Center));

    if with_chords {
        let rows = match chord_rows(tonic, scale_type, verbose) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!(
                    "{} {}",
                    "Unable to generate the diatonic chords:".red().bold(),
                    e
                );
                return Ok(ExitCode::from(EXIT_CHORDS_ERROR));
            }
        };
        let header: Vec<String> = ["Degree", "Chord", "Triad"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        println!();
        println!(
            "Diatonic chords for the {} {} scale:",
            tonic.cyan().bold(),
            pretty_type
        );
        println!();
        print!("{}", table::render(&header, &rows, Align::Left));
    }
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Run the scale command with machine-readable JSON output
fn run_json(tonic: &str, scale_type: ScaleType, with_chords: bool) -> Result<ExitCode> {
    let mut output = ScaleOutput {
        ok: true,
        tonic: tonic.to_string(),
        scale_type: scale_type.name().to_string(),
        notes: Vec::new(),
        chords: None,
        errors: Vec::new(),
    };

    let exit = match build_scale(tonic, scale_type) {
        Ok(notes) => {
            output.notes = notes;
            if with_chords {
                match chord_entries(tonic, scale_type) {
                    Ok(entries) => {
                        output.chords = Some(entries);
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        output.ok = false;
                        output.errors.push(JsonError::from_theory(&e));
                        ExitCode::from(EXIT_CHORDS_ERROR)
                    }
                }
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            output.ok = false;
            output.errors.push(JsonError::from_theory(&e));
            ExitCode::from(EXIT_SCALE_ERROR)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(exit)
}

/// Degree / chord / triad table rows for the human output, with quality
/// glyphs applied.
fn chord_rows(
    tonic: &str,
    scale_type: ScaleType,
    verbose: bool,
) -> Result<Vec<Vec<String>>, TheoryError> {
    chord_entries(tonic, scale_type)?
        .into_iter()
        .map(|entry| {
            Ok(vec![
                display::pretty_quality(&entry.degree, verbose),
                display::pretty_quality(&entry.name, verbose),
                display::join_notes(&entry.notes, " - "),
            ])
        })
        .collect()
}

/// Derive the diatonic chords of a scale together with their degree labels
/// and triad spellings.
fn chord_entries(tonic: &str, scale_type: ScaleType) -> Result<Vec<ChordEntry>, TheoryError> {
    let chords = diatonic_chords(tonic, scale_type)?;

    scale_type
        .degrees()
        .iter()
        .zip(chords)
        .map(|(degree, name)| {
            let notes = chord_notes(&name)?;
            Ok(ChordEntry {
                degree: degree.to_string(),
                name,
                notes: notes.to_vec(),
            })
        })
        .collect()
}
