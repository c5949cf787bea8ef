//! Keysmith - scales, diatonic chords and triads in the terminal
//!
//! This binary prints correctly-spelled scale notes, the diatonic chords of
//! a scale, and the notes of individual triads.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

// Use modules from the library crate
use keysmith_cli::commands;

/// Keysmith - Music scales, diatonic chords and triads
#[derive(Parser)]
#[command(name = "keysmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the notes of a scale, optionally with its diatonic chords
    Scale {
        /// Tonic note (e.g. "C#", "Eb")
        tonic: String,

        /// Type of scale
        #[arg(
            short = 't',
            long,
            default_value = "major",
            value_parser = ["major", "minor", "natural", "harmonic", "melodic"]
        )]
        scale_type: String,

        /// Also print the diatonic chords for the scale
        #[arg(short = 'd', long)]
        chords: bool,

        /// Annotate minor, diminished and augmented qualities
        #[arg(short, long)]
        verbose: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the three notes of a triad (suffix: "m", "o"/"-", "+")
    Chord {
        /// Chord name (e.g. "C#+", "Gbo", "Dm")
        name: String,

        /// Annotate the chord quality
        #[arg(short, long)]
        verbose: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scale {
            tonic,
            scale_type,
            chords,
            verbose,
            json,
        } => commands::scale::run(&tonic, &scale_type, chords, verbose, json),
        Commands::Chord {
            name,
            verbose,
            json,
        } => commands::chord::run(&name, verbose, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
