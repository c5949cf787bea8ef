//! Normalization of user-supplied arguments before they reach the core.

use keysmith_theory::{ScaleType, TheoryError};

/// Capitalize a tonic the way users type it loosely: first character
/// uppercased, the rest lowercased ("c#" -> "C#", "BB" -> "Bb").
pub fn normalize_tonic(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{}",
            first.to_ascii_uppercase(),
            chars.as_str().to_ascii_lowercase()
        ),
        None => String::new(),
    }
}

/// Map the CLI scale-type spellings to core scale types. The CLI accepts
/// single-word spellings (`natural`, `harmonic`, `melodic`); the core's own
/// strings are accepted unchanged.
pub fn scale_type_from_cli(flag: &str) -> Result<ScaleType, TheoryError> {
    let canonical = match flag {
        "natural" => "natural minor",
        "harmonic" => "harmonic minor",
        "melodic" => "melodic minor",
        other => other,
    };
    canonical.parse()
}
