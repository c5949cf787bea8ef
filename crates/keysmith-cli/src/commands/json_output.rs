//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on the `scale` and `chord` commands,
//! so other tools can consume the results without scraping tables.

use keysmith_theory::TheoryError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Scale type not in the supported set
    pub const UNSUPPORTED_SCALE: &str = "THEORY_001";
    /// Note does not begin with a letter A-G
    pub const INVALID_NOTE: &str = "THEORY_002";
    /// Note not found in either chromatic sequence
    pub const UNKNOWN_NOTE: &str = "THEORY_003";
    /// No enharmonic equivalent with the required letter
    pub const ENHARMONIC_NOT_FOUND: &str = "THEORY_004";
}

/// The stable code for a core error.
pub fn error_code(error: &TheoryError) -> &'static str {
    match error {
        TheoryError::UnsupportedScale(_) => error_codes::UNSUPPORTED_SCALE,
        TheoryError::InvalidNote(_) => error_codes::INVALID_NOTE,
        TheoryError::UnknownNote(_) => error_codes::UNKNOWN_NOTE,
        TheoryError::EnharmonicNotFound { .. } => error_codes::ENHARMONIC_NOT_FOUND,
    }
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "THEORY_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Build a JSON error from a core error.
    pub fn from_theory(error: &TheoryError) -> Self {
        Self {
            code: error_code(error).to_string(),
            message: error.to_string(),
        }
    }
}

/// One diatonic chord with its degree label and triad spelling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChordEntry {
    /// Roman-numeral degree label (e.g., "ii", "viio")
    pub degree: String,
    /// Chord name with its raw quality suffix (e.g., "Dm", "Bo")
    pub name: String,
    /// The triad's three notes, root first
    pub notes: Vec<String>,
}

/// Output of the `scale` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleOutput {
    /// Whether the computation succeeded
    pub ok: bool,
    /// The normalized tonic
    pub tonic: String,
    /// Canonical scale-type name (e.g., "natural minor")
    pub scale_type: String,
    /// The 8 scale notes (empty on error)
    pub notes: Vec<String>,
    /// Diatonic chords, present only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chords: Option<Vec<ChordEntry>>,
    /// Errors encountered (empty on success)
    pub errors: Vec<JsonError>,
}

/// Output of the `chord` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChordOutput {
    /// Whether the computation succeeded
    pub ok: bool,
    /// The chord name as requested
    pub chord: String,
    /// The triad's three notes, root first (empty on error)
    pub notes: Vec<String>,
    /// Errors encountered (empty on success)
    pub errors: Vec<JsonError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            error_code(&TheoryError::UnknownNote("X".to_string())),
            "THEORY_003"
        );
        assert_eq!(
            error_code(&TheoryError::UnsupportedScale("dorian".to_string())),
            "THEORY_001"
        );
    }

    #[test]
    fn test_scale_output_serialization() {
        let output = ScaleOutput {
            ok: true,
            tonic: "C".to_string(),
            scale_type: "major".to_string(),
            notes: vec!["C".to_string()],
            chords: None,
            errors: vec![],
        };
        let json = serde_json::to_string(&output).unwrap();
        // `chords` is omitted entirely when not requested.
        assert!(!json.contains("chords"));
        let parsed: ScaleOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, output);
    }
}
