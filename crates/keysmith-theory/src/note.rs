//! Note spelling primitives: enharmonic resolution, letter cycling, and
//! accidental arithmetic.
//!
//! Notes are string tokens: a letter A-G followed by zero or more trailing
//! accidentals (`#`, `##`, `b`, `bb`). The resolver only knows the spellings
//! registered in the hand-authored enharmonic table.

use crate::error::TheoryError;
use crate::tables::ENHARMONIC_NOTES;

/// Look up an enharmonic equivalent of `note`.
///
/// With `target_letter` set, returns the registered alternate whose letter
/// matches (this is how scale walks force each note onto the next
/// consecutive letter, e.g. `enharmonic("G", Some('A')) == "Abb"`). Without
/// a target, returns the first registered alternate, which is always a
/// canonical single-accidental spelling.
///
/// # Errors
///
/// [`TheoryError::EnharmonicNotFound`] when a target letter is requested but
/// no alternate matches; [`TheoryError::UnknownNote`] when no target is
/// given and the note has no registered alternates at all.
pub fn enharmonic(note: &str, target_letter: Option<char>) -> Result<&'static str, TheoryError> {
    let alternates = ENHARMONIC_NOTES
        .iter()
        .find(|(name, _)| *name == note)
        .map(|(_, alternates)| *alternates);

    match target_letter {
        Some(letter) => alternates
            .and_then(|alts| {
                alts.iter()
                    .find(|alt| alt.chars().next() == Some(letter))
                    .copied()
            })
            .ok_or_else(|| TheoryError::EnharmonicNotFound {
                note: note.to_string(),
                letter,
            }),
        None => alternates
            .map(|alts| alts[0])
            .ok_or_else(|| TheoryError::UnknownNote(note.to_string())),
    }
}

/// The letter a scale expects after `note`, cycling A..G and wrapping G
/// back to A. Accidentals are ignored; the input letter may be lowercase.
///
/// # Errors
///
/// [`TheoryError::InvalidNote`] if the first character is not a letter A-G.
pub fn next_letter(note: &str) -> Result<char, TheoryError> {
    let letter = note
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| ('A'..='G').contains(c))
        .ok_or_else(|| TheoryError::InvalidNote(note.to_string()))?;

    Ok(if letter == 'G' {
        'A'
    } else {
        (letter as u8 + 1) as char
    })
}

/// Raise a note by a half step without changing its letter: strip one flat
/// if present, otherwise append a sharp. May produce double sharps.
pub fn sharpen(note: &str) -> String {
    match note.strip_suffix('b') {
        Some(stripped) => stripped.to_string(),
        None => format!("{note}#"),
    }
}

/// Lower a note by a half step without changing its letter: strip one sharp
/// if present, otherwise append a flat. May produce double flats.
pub fn flatten(note: &str) -> String {
    match note.strip_suffix('#') {
        Some(stripped) => stripped.to_string(),
        None => format!("{note}b"),
    }
}
