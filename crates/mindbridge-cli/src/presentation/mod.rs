//! Plain-text rendering of engine output.
//!
//! JSON output serializes engine types directly; this module only lays out
//! text for humans.

pub mod columns;
pub mod table;
pub mod text;
