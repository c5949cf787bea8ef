//! Keysmith CLI library.
//!
//! This crate provides the functionality behind the `keysmith` binary:
//! argument normalization, command implementations, and the terminal
//! rendering (tables, quality glyphs) layered on top of the core
//! `keysmith-theory` computations.

pub mod commands;
pub mod display;
pub mod input;
pub mod table;
