//! Keysmith core - correctly-spelled scales, diatonic chords and triads.
//!
//! This crate computes music-theory artifacts from symbolic note names:
//! scale note sequences, diatonic chord lists, and triad spellings. The
//! interesting part is the note-naming engine, which walks a chromatic pitch
//! sequence by half steps while forcing each note onto the next consecutive
//! letter name, introducing double sharps or double flats where convention
//! demands them (a scale's seven notes always use seven consecutive,
//! non-repeating letters).
//!
//! Everything is a pure function over immutable static tables: no I/O, no
//! shared state, safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use keysmith_theory::{build_scale, chord_notes, diatonic_chords, ScaleType};
//!
//! let scale = build_scale("G#", ScaleType::HarmonicMinor)?;
//! assert_eq!(scale, ["G#", "A#", "B", "C#", "D#", "E", "F##", "G#"]);
//!
//! let chords = diatonic_chords("C", ScaleType::Major)?;
//! assert_eq!(chords, ["C", "Dm", "Em", "F", "G", "Am", "Bo"]);
//!
//! let triad = chord_notes("F#+")?;
//! assert_eq!(triad, ["F#", "A#", "C##"]);
//! # Ok::<(), keysmith_theory::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: enharmonic resolution, letter cycling, accidental arithmetic
//! - [`scale`]: scale types and the interval-walking scale builder
//! - [`chord`]: diatonic chord naming and triad spelling
//! - [`error`]: the [`TheoryError`] type

pub mod chord;
pub mod error;
pub mod note;
pub mod scale;

mod tables;

pub use chord::{chord_notes, diatonic_chords, split_chord_name, ChordQuality};
pub use error::TheoryError;
pub use note::{enharmonic, flatten, next_letter, sharpen};
pub use scale::{build_scale, ScaleType};
