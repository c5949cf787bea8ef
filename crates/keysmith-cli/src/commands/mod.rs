//! CLI command implementations

pub mod chord;
pub mod scale;

mod json_output;

pub use json_output::{ChordEntry, ChordOutput, JsonError, ScaleOutput};
