//! Scale construction: walk a chromatic sequence by interval while forcing
//! consecutive letter names.

use std::fmt;
use std::str::FromStr;

use crate::chord::ChordQuality;
use crate::error::TheoryError;
use crate::note;
use crate::tables::{CHROMATIC_FLATS, CHROMATIC_SHARPS, SHARP_MAJOR_KEYS, SHARP_MINOR_KEYS};

/// The supported scale types.
///
/// Parses from the exact, case-sensitive strings `"major"`, `"minor"`,
/// `"natural minor"`, `"harmonic minor"` and `"melodic minor"`; `"minor"` is
/// an alias for natural minor. Melodic minor models the ascending form only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl ScaleType {
    /// The canonical lowercase name (`"natural minor"`, not `"minor"`).
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::NaturalMinor => "natural minor",
            ScaleType::HarmonicMinor => "harmonic minor",
            ScaleType::MelodicMinor => "melodic minor",
        }
    }

    /// Interval sequence in half steps, one entry per scale degree, summing
    /// to the full octave. Harmonic minor's 3-half-step interval is not a
    /// typo: the raised seventh leaves an augmented second after the sixth.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleType::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            ScaleType::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
            ScaleType::MelodicMinor => [2, 1, 2, 2, 2, 2, 1],
        }
    }

    /// Chord quality of the diatonic triad on each scale degree.
    pub fn qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::{Augmented, Diminished, Major, Minor};
        match self {
            ScaleType::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            ScaleType::NaturalMinor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
            ScaleType::HarmonicMinor => {
                [Minor, Diminished, Augmented, Minor, Major, Major, Diminished]
            }
            ScaleType::MelodicMinor => {
                [Minor, Minor, Augmented, Major, Major, Diminished, Diminished]
            }
        }
    }

    /// Roman-numeral labels for the seven scale degrees, quality included
    /// (uppercase major, lowercase minor, `o` diminished, `+` augmented).
    pub fn degrees(self) -> [&'static str; 7] {
        match self {
            ScaleType::Major => ["I", "ii", "iii", "IV", "V", "vi", "viio"],
            ScaleType::NaturalMinor => ["i", "iio", "III", "iv", "v", "VI", "VII"],
            ScaleType::HarmonicMinor => ["i", "iio", "III+", "iv", "V", "VI", "viio"],
            ScaleType::MelodicMinor => ["i", "ii", "III+", "IV", "V", "vio", "viio"],
        }
    }

    /// Key signatures spelled with sharps for this scale's family. Major and
    /// minor membership differ: "D" takes sharps in major but flats in minor.
    fn sharp_keys(self) -> &'static [&'static str] {
        match self {
            ScaleType::Major => SHARP_MAJOR_KEYS,
            _ => SHARP_MINOR_KEYS,
        }
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ScaleType::Major),
            "minor" | "natural minor" => Ok(ScaleType::NaturalMinor),
            "harmonic minor" => Ok(ScaleType::HarmonicMinor),
            "melodic minor" => Ok(ScaleType::MelodicMinor),
            other => Err(TheoryError::UnsupportedScale(other.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the 8-note scale (7 tones plus octave repeat of the tonic) on
/// `tonic`.
///
/// The walk starts from the tonic's pitch class in the sharp- or flat-spelled
/// chromatic sequence (chosen by key-signature membership, or forced to
/// sharps when the tonic literally ends in `#`) and advances by the scale's
/// interval sequence. Each candidate is forced onto the next consecutive
/// letter name through the enharmonic table, so the result always spells the
/// seven letters following the tonic's letter exactly once, wrapping G to A.
///
/// The first entry is the input `tonic` verbatim, even when an unusual
/// spelling like `"Ebb"` had to be resolved to find its pitch class.
///
/// # Errors
///
/// [`TheoryError::UnknownNote`] if the tonic is in neither chromatic
/// sequence and has no canonical equivalent that is;
/// [`TheoryError::EnharmonicNotFound`] if a walked note cannot be respelled
/// onto its required letter; [`TheoryError::InvalidNote`] if the tonic does
/// not begin with a letter A-G.
pub fn build_scale(tonic: &str, scale_type: ScaleType) -> Result<Vec<String>, TheoryError> {
    let chromatic: &[&str; 12] =
        if scale_type.sharp_keys().contains(&tonic) || tonic.ends_with('#') {
            &CHROMATIC_SHARPS
        } else {
            &CHROMATIC_FLATS
        };

    let mut position = match chromatic.iter().position(|&n| n == tonic) {
        Some(index) => index,
        None => {
            // Unusual spellings (Ebb, B#, Cb, ...) enter the chromatic
            // sequence through their canonical equivalent. The output still
            // carries the spelling the caller asked for.
            let canonical = enharmonic_or_unknown(tonic)?;
            chromatic
                .iter()
                .position(|&n| n == canonical)
                .ok_or_else(|| TheoryError::UnknownNote(tonic.to_string()))?
        }
    };

    let mut notes = Vec::with_capacity(8);
    notes.push(tonic.to_string());
    let mut previous = tonic.to_string();

    for interval in scale_type.intervals() {
        let expected_letter = note::next_letter(&previous)?;

        position = (position + interval as usize) % chromatic.len();
        let candidate = chromatic[position];

        let current = if candidate.starts_with(expected_letter) {
            candidate.to_string()
        } else {
            note::enharmonic(candidate, Some(expected_letter))?.to_string()
        };

        notes.push(current.clone());
        previous = current;
    }

    Ok(notes)
}

/// Canonical-spelling lookup for a tonic, reporting the tonic itself as the
/// unknown note on failure.
fn enharmonic_or_unknown(tonic: &str) -> Result<&'static str, TheoryError> {
    note::enharmonic(tonic, None)
        .map_err(|_| TheoryError::UnknownNote(tonic.to_string()))
}
