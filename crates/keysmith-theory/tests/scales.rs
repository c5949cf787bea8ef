//! Exhaustive scale construction tests.
//!
//! Scale spelling has a lot of special cases, so every key is pinned for
//! every supported scale type: scales with sharps, with flats, with double
//! sharps, with double flats, and minor keys whose spelling side differs
//! from their major counterpart.

use keysmith_theory::{build_scale, next_letter, ScaleType};
use pretty_assertions::assert_eq;

fn scale(tonic: &str, scale_type: &str) -> Vec<String> {
    build_scale(tonic, scale_type.parse().unwrap()).unwrap()
}

#[test]
fn major_scales_all_keys() {
    assert_eq!(scale("C", "major"), ["C", "D", "E", "F", "G", "A", "B", "C"]);
    assert_eq!(scale("G", "major"), ["G", "A", "B", "C", "D", "E", "F#", "G"]);
    assert_eq!(scale("D", "major"), ["D", "E", "F#", "G", "A", "B", "C#", "D"]);
    assert_eq!(scale("A", "major"), ["A", "B", "C#", "D", "E", "F#", "G#", "A"]);
    assert_eq!(scale("E", "major"), ["E", "F#", "G#", "A", "B", "C#", "D#", "E"]);
    assert_eq!(scale("B", "major"), ["B", "C#", "D#", "E", "F#", "G#", "A#", "B"]);
    assert_eq!(
        scale("F#", "major"),
        ["F#", "G#", "A#", "B", "C#", "D#", "E#", "F#"]
    );
    assert_eq!(
        scale("C#", "major"),
        ["C#", "D#", "E#", "F#", "G#", "A#", "B#", "C#"]
    );
    assert_eq!(scale("F", "major"), ["F", "G", "A", "Bb", "C", "D", "E", "F"]);
    assert_eq!(
        scale("Bb", "major"),
        ["Bb", "C", "D", "Eb", "F", "G", "A", "Bb"]
    );
    assert_eq!(
        scale("Eb", "major"),
        ["Eb", "F", "G", "Ab", "Bb", "C", "D", "Eb"]
    );
    assert_eq!(
        scale("Ab", "major"),
        ["Ab", "Bb", "C", "Db", "Eb", "F", "G", "Ab"]
    );
    assert_eq!(
        scale("Db", "major"),
        ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C", "Db"]
    );
    assert_eq!(
        scale("Gb", "major"),
        ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F", "Gb"]
    );
    assert_eq!(
        scale("Cb", "major"),
        ["Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bb", "Cb"]
    );
}

#[test]
fn natural_minor_scales_all_keys() {
    assert_eq!(
        scale("A", "natural minor"),
        ["A", "B", "C", "D", "E", "F", "G", "A"]
    );
    assert_eq!(scale("A", "minor"), ["A", "B", "C", "D", "E", "F", "G", "A"]);
    assert_eq!(scale("E", "minor"), ["E", "F#", "G", "A", "B", "C", "D", "E"]);
    assert_eq!(scale("B", "minor"), ["B", "C#", "D", "E", "F#", "G", "A", "B"]);
    assert_eq!(
        scale("F#", "minor"),
        ["F#", "G#", "A", "B", "C#", "D", "E", "F#"]
    );
    assert_eq!(
        scale("C#", "minor"),
        ["C#", "D#", "E", "F#", "G#", "A", "B", "C#"]
    );
    assert_eq!(
        scale("G#", "minor"),
        ["G#", "A#", "B", "C#", "D#", "E", "F#", "G#"]
    );
    assert_eq!(
        scale("D#", "minor"),
        ["D#", "E#", "F#", "G#", "A#", "B", "C#", "D#"]
    );
    assert_eq!(
        scale("A#", "minor"),
        ["A#", "B#", "C#", "D#", "E#", "F#", "G#", "A#"]
    );
    assert_eq!(scale("D", "minor"), ["D", "E", "F", "G", "A", "Bb", "C", "D"]);
    assert_eq!(scale("G", "minor"), ["G", "A", "Bb", "C", "D", "Eb", "F", "G"]);
    assert_eq!(
        scale("C", "minor"),
        ["C", "D", "Eb", "F", "G", "Ab", "Bb", "C"]
    );
    assert_eq!(
        scale("F", "minor"),
        ["F", "G", "Ab", "Bb", "C", "Db", "Eb", "F"]
    );
    assert_eq!(
        scale("Bb", "minor"),
        ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab", "Bb"]
    );
    assert_eq!(
        scale("Eb", "minor"),
        ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db", "Eb"]
    );
    assert_eq!(
        scale("Ab", "minor"),
        ["Ab", "Bb", "Cb", "Db", "Eb", "Fb", "Gb", "Ab"]
    );
}

#[test]
fn harmonic_minor_scales_all_keys() {
    assert_eq!(
        scale("A", "harmonic minor"),
        ["A", "B", "C", "D", "E", "F", "G#", "A"]
    );
    assert_eq!(
        scale("E", "harmonic minor"),
        ["E", "F#", "G", "A", "B", "C", "D#", "E"]
    );
    assert_eq!(
        scale("B", "harmonic minor"),
        ["B", "C#", "D", "E", "F#", "G", "A#", "B"]
    );
    assert_eq!(
        scale("F#", "harmonic minor"),
        ["F#", "G#", "A", "B", "C#", "D", "E#", "F#"]
    );
    assert_eq!(
        scale("C#", "harmonic minor"),
        ["C#", "D#", "E", "F#", "G#", "A", "B#", "C#"]
    );
    assert_eq!(
        scale("Ab", "harmonic minor"),
        ["Ab", "Bb", "Cb", "Db", "Eb", "Fb", "G", "Ab"]
    );
    assert_eq!(
        scale("Eb", "harmonic minor"),
        ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "D", "Eb"]
    );
    assert_eq!(
        scale("Bb", "harmonic minor"),
        ["Bb", "C", "Db", "Eb", "F", "Gb", "A", "Bb"]
    );
    assert_eq!(
        scale("F", "harmonic minor"),
        ["F", "G", "Ab", "Bb", "C", "Db", "E", "F"]
    );
    assert_eq!(
        scale("C", "harmonic minor"),
        ["C", "D", "Eb", "F", "G", "Ab", "B", "C"]
    );
    assert_eq!(
        scale("G#", "harmonic minor"),
        ["G#", "A#", "B", "C#", "D#", "E", "F##", "G#"]
    );
    assert_eq!(
        scale("D#", "harmonic minor"),
        ["D#", "E#", "F#", "G#", "A#", "B", "C##", "D#"]
    );
    assert_eq!(
        scale("A#", "harmonic minor"),
        ["A#", "B#", "C#", "D#", "E#", "F#", "G##", "A#"]
    );
    assert_eq!(
        scale("G", "harmonic minor"),
        ["G", "A", "Bb", "C", "D", "Eb", "F#", "G"]
    );
    assert_eq!(
        scale("D", "harmonic minor"),
        ["D", "E", "F", "G", "A", "Bb", "C#", "D"]
    );
}

#[test]
fn melodic_minor_scales_all_keys() {
    assert_eq!(
        scale("A", "melodic minor"),
        ["A", "B", "C", "D", "E", "F#", "G#", "A"]
    );
    assert_eq!(
        scale("E", "melodic minor"),
        ["E", "F#", "G", "A", "B", "C#", "D#", "E"]
    );
    assert_eq!(
        scale("B", "melodic minor"),
        ["B", "C#", "D", "E", "F#", "G#", "A#", "B"]
    );
    assert_eq!(
        scale("F#", "melodic minor"),
        ["F#", "G#", "A", "B", "C#", "D#", "E#", "F#"]
    );
    assert_eq!(
        scale("C#", "melodic minor"),
        ["C#", "D#", "E", "F#", "G#", "A#", "B#", "C#"]
    );
    assert_eq!(
        scale("Ab", "melodic minor"),
        ["Ab", "Bb", "Cb", "Db", "Eb", "F", "G", "Ab"]
    );
    assert_eq!(
        scale("Eb", "melodic minor"),
        ["Eb", "F", "Gb", "Ab", "Bb", "C", "D", "Eb"]
    );
    assert_eq!(
        scale("Bb", "melodic minor"),
        ["Bb", "C", "Db", "Eb", "F", "G", "A", "Bb"]
    );
    assert_eq!(
        scale("F", "melodic minor"),
        ["F", "G", "Ab", "Bb", "C", "D", "E", "F"]
    );
    assert_eq!(
        scale("C", "melodic minor"),
        ["C", "D", "Eb", "F", "G", "A", "B", "C"]
    );
    assert_eq!(
        scale("G#", "melodic minor"),
        ["G#", "A#", "B", "C#", "D#", "E#", "F##", "G#"]
    );
    assert_eq!(
        scale("D#", "melodic minor"),
        ["D#", "E#", "F#", "G#", "A#", "B#", "C##", "D#"]
    );
    assert_eq!(
        scale("A#", "melodic minor"),
        ["A#", "B#", "C#", "D#", "E#", "F##", "G##", "A#"]
    );
    assert_eq!(
        scale("G", "melodic minor"),
        ["G", "A", "Bb", "C", "D", "E", "F#", "G"]
    );
    assert_eq!(
        scale("D", "melodic minor"),
        ["D", "E", "F", "G", "A", "B", "C#", "D"]
    );
}

/// Tonic spellings covering all 12 pitch classes on both the sharp and the
/// flat side.
const TONICS: &[&str] = &[
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

const SCALE_TYPES: &[&str] = &[
    "major",
    "minor",
    "natural minor",
    "harmonic minor",
    "melodic minor",
];

#[test]
fn every_scale_has_eight_notes_with_consecutive_letters() {
    for &tonic in TONICS {
        for &scale_type in SCALE_TYPES {
            let notes = scale(tonic, scale_type);
            assert_eq!(notes.len(), 8, "{tonic} {scale_type}");
            assert_eq!(notes[0], tonic, "{tonic} {scale_type} must start verbatim");
            assert_eq!(notes[7][..1], notes[0][..1], "{tonic} {scale_type} octave");

            for window in notes.windows(2) {
                let expected = next_letter(&window[0]).unwrap();
                assert_eq!(
                    window[1].chars().next(),
                    Some(expected),
                    "{tonic} {scale_type}: {} must be followed by a {expected} note, got {}",
                    window[0],
                    window[1],
                );
            }
        }
    }
}

#[test]
fn minor_is_an_alias_for_natural_minor() {
    for &tonic in TONICS {
        assert_eq!(
            build_scale(tonic, "minor".parse().unwrap()).unwrap(),
            build_scale(tonic, "natural minor".parse().unwrap()).unwrap(),
            "{tonic}"
        );
    }
}

#[test]
fn unsupported_scale_type_is_rejected() {
    assert!("descending melodic minor".parse::<ScaleType>().is_err());
    assert!("MAJOR".parse::<ScaleType>().is_err());
    assert!("".parse::<ScaleType>().is_err());
}
