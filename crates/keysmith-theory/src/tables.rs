//! Static reference tables for the pitch/letter model.
//!
//! The enharmonic table is hand-authored and deliberately asymmetric: `"C"`
//! lists `["B#", "Dbb"]` while `"B#"` maps only to `["C"]`. It encodes
//! musicological convention rather than a derivable rule, and covers exactly
//! the spellings the scale walker can produce. Do not try to "complete" it.

/// Alternate spellings for enharmonically equivalent notes. When a scale
/// walk lands on a note whose letter does not match the expected consecutive
/// letter, the replacement is picked from here (introducing double sharps or
/// double flats where convention demands them).
pub(crate) const ENHARMONIC_NOTES: &[(&str, &[&str])] = &[
    ("C", &["B#", "Dbb"]),
    ("C#", &["Db", "B##"]),
    ("Db", &["C#"]),
    ("C##", &["D"]),
    ("D", &["C##", "Ebb"]),
    ("E", &["Fb", "D##"]),
    ("E#", &["F"]),
    ("Fb", &["E"]),
    ("F", &["E#"]),
    ("F#", &["Gb", "E##"]),
    ("Gb", &["F#"]),
    ("F##", &["G"]),
    ("G", &["F##", "Abb"]),
    ("G#", &["Ab", "F###"]),
    ("G##", &["A"]),
    ("A", &["G##", "Bbb"]),
    ("B", &["Cb", "A##"]),
    ("B#", &["C"]),
    ("Cb", &["B"]),
    ("Abb", &["G"]),
    ("Bbb", &["A"]),
    ("Ebb", &["D"]),
];

/// Chromatic sequence starting at C, sharp spellings. Index = pitch class.
pub(crate) const CHROMATIC_SHARPS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic sequence starting at C, flat spellings. Index = pitch class.
pub(crate) const CHROMATIC_FLATS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Major key signatures spelled with sharps. Any major tonic not listed here
/// (and not literally ending in '#') takes the flat chromatic sequence.
/// "C" has no sharps at all but serves as the default sharp-side key.
pub(crate) const SHARP_MAJOR_KEYS: &[&str] = &["C", "G", "D", "A", "E", "B", "F#", "C#"];

/// Minor key signatures spelled with sharps. Kept separate from the major
/// list: some tonics (e.g. "D") use sharps in major but flats in minor.
/// "A" has no sharps at all but serves as the default sharp-side key.
pub(crate) const SHARP_MINOR_KEYS: &[&str] = &["A", "E", "B", "F#", "C#", "G#", "D#", "A#"];
