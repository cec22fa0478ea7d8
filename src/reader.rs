use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::pdf::PdfBackend;

/// What kind of file a run reads out of each wine directory.
#[derive(Debug, Clone, Copy)]
pub enum SourceFormat {
    Text,
    Pdf(PdfBackend),
}

impl SourceFormat {
    /// Extension case variants, listed in the order they are read.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::Text => &["txt", "TXT"],
            SourceFormat::Pdf(_) => &["pdf"],
        }
    }

    pub fn read(&self, path: &Path) -> Result<String> {
        match self {
            SourceFormat::Text => read_text_file(path),
            SourceFormat::Pdf(backend) => backend.extract(path).map(|t| unify_newlines(&t)),
        }
    }
}

/// Regular files in `dir` with one of `extensions` (exact case).
/// Each extension's matches are sorted; the groups follow `extensions` order.
pub fn candidate_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    let mut ordered = Vec::with_capacity(files.len());
    for ext in extensions {
        let mut group: Vec<PathBuf> = files
            .iter()
            .filter(|p| p.extension() == Some(OsStr::new(*ext)))
            .cloned()
            .collect();
        group.sort();
        ordered.extend(group);
    }
    Ok(ordered)
}

/// UTF-8 first, Latin-1 if the bytes are not valid UTF-8.
/// `\r\n` and lone `\r` come back as `\n`.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "not UTF-8, decoding as Latin-1");
            decode_latin1(e.as_bytes())
        }
    };
    Ok(unify_newlines(&text))
}

fn unify_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// ISO-8859-1: every byte is the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// File name without its extension.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
