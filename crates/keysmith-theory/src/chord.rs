//! Diatonic chord derivation and triad spelling.

use crate::error::TheoryError;
use crate::note;
use crate::scale::{build_scale, ScaleType};

/// Triad quality, parsed once from a chord-name suffix.
///
/// A chord name is a root note plus an optional trailing suffix: none for
/// major, `m` for minor, `o` or `-` for diminished, `+` for augmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    /// The canonical suffix appended to a root note when naming a chord.
    /// Major is implicit and appends nothing; diminished normalizes to `o`.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "o",
            ChordQuality::Augmented => "+",
        }
    }

    fn from_suffix_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(ChordQuality::Minor),
            'o' | '-' => Some(ChordQuality::Diminished),
            '+' => Some(ChordQuality::Augmented),
            _ => None,
        }
    }
}

/// Split a chord name into its root note and quality. A name without a
/// recognized trailing suffix is a major chord.
pub fn split_chord_name(chord: &str) -> (&str, ChordQuality) {
    let mut chars = chord.chars();
    match chars.next_back().and_then(ChordQuality::from_suffix_char) {
        Some(quality) => (chars.as_str(), quality),
        None => (chord, ChordQuality::Major),
    }
}

/// Name the seven diatonic triads of a scale, one per degree.
///
/// Each chord is the scale note on that degree plus the quality suffix the
/// scale type dictates (major appends nothing, so the I chord of C major is
/// just `"C"`).
///
/// # Errors
///
/// Propagates every failure mode of [`build_scale`] unchanged.
pub fn diatonic_chords(tonic: &str, scale_type: ScaleType) -> Result<Vec<String>, TheoryError> {
    let notes = build_scale(tonic, scale_type)?;

    // The octave repeat carries no chord; zipping against the seven
    // qualities drops it.
    Ok(scale_type
        .qualities()
        .iter()
        .zip(&notes)
        .map(|(quality, degree_note)| format!("{}{}", degree_note, quality.suffix()))
        .collect())
}

/// Spell the three notes of a triad from its chord name.
///
/// The major scale of the root serves as the reference frame: its third and
/// fifth degrees are taken as-is for a major triad and adjusted per quality
/// (minor flattens the third, diminished flattens third and fifth, augmented
/// sharpens the fifth). The root is emitted exactly as written in the chord
/// name; inversions and extensions are not modeled.
///
/// # Errors
///
/// Propagates the failure modes of the internal major-scale build.
pub fn chord_notes(chord: &str) -> Result<[String; 3], TheoryError> {
    let (root, quality) = split_chord_name(chord);
    let reference = build_scale(root, ScaleType::Major)?;

    let (third, fifth) = match quality {
        ChordQuality::Major => (reference[2].clone(), reference[4].clone()),
        ChordQuality::Minor => (note::flatten(&reference[2]), reference[4].clone()),
        ChordQuality::Diminished => (note::flatten(&reference[2]), note::flatten(&reference[4])),
        ChordQuality::Augmented => (reference[2].clone(), note::sharpen(&reference[4])),
    };

    Ok([root.to_string(), third, fifth])
}
