//! Wine tasting-note extraction.
//!
//! One sequential pipeline shared by the binaries:
//!   1. walker     - immediate subdirectories of the root, one per wine
//!   2. reader     - text / PDF files inside each wine directory
//!   3. normalize  - URL extraction + blank-line collapsing
//!   4. emit       - JSON or Dart `WineDescription` literals

use std::io::IsTerminal;

pub mod catalog;
pub mod emit;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod pdf;
pub mod pipeline;
pub mod reader;
pub mod settings;
pub mod walker;

pub use catalog::{Catalog, Description, Item};
pub use error::{Error, Result};

/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
