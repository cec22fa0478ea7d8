//! Output formats: JSON for the extraction binaries, Dart literals for the app.

pub mod dart;
pub mod json;
