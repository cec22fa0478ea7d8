//! PDF text extraction. Each backend is a cargo feature; `detect` picks the
//! first one compiled in, `pdf-extract` before `lopdf`.

use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfBackend {
    #[cfg(feature = "pdf-extract")]
    PdfExtract,
    #[cfg(feature = "lopdf")]
    Lopdf,
}

impl PdfBackend {
    #[allow(unreachable_code)]
    pub fn detect() -> Option<Self> {
        #[cfg(feature = "pdf-extract")]
        return Some(PdfBackend::PdfExtract);
        #[cfg(feature = "lopdf")]
        return Some(PdfBackend::Lopdf);
        None
    }

    pub fn require() -> Result<Self> {
        Self::detect().ok_or(Error::NoPdfBackend)
    }

    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "pdf-extract")]
            PdfBackend::PdfExtract => "pdf-extract",
            #[cfg(feature = "lopdf")]
            PdfBackend::Lopdf => "lopdf",
        }
    }

    pub fn extract(self, path: &Path) -> Result<String> {
        match self {
            #[cfg(feature = "pdf-extract")]
            PdfBackend::PdfExtract => extract_pdf_extract(path),
            #[cfg(feature = "lopdf")]
            PdfBackend::Lopdf => extract_lopdf(path),
        }
    }
}

/// pdf-extract panics on fonts and encodings it does not support; a panic
/// is turned into a per-file error.
#[cfg(feature = "pdf-extract")]
fn extract_pdf_extract(path: &Path) -> Result<String> {
    let pdf_err = |message: String| Error::Pdf {
        path: path.to_path_buf(),
        message,
    };
    let text = catch_unwind_silent(|| pdf_extract::extract_text(path))
        .map_err(|payload| pdf_err(format!("extractor panicked: {}", panic_message(&*payload))))?
        .map_err(|e| pdf_err(e.to_string()))?;
    Ok(text.trim().to_string())
}

// The default hook would print the panic to stderr; silence it while a
// guarded extraction runs.
#[cfg(feature = "pdf-extract")]
static PANIC_HOOK_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(feature = "pdf-extract")]
fn catch_unwind_silent<F, T>(operation: F) -> std::thread::Result<T>
where
    F: FnOnce() -> T,
{
    use std::panic::{catch_unwind, set_hook, take_hook, AssertUnwindSafe};

    let _panic_hook_guard = PANIC_HOOK_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous_hook = take_hook();
    set_hook(Box::new(|_| {}));
    let outcome = catch_unwind(AssertUnwindSafe(operation));
    set_hook(previous_hook);
    outcome
}

#[cfg(feature = "pdf-extract")]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Pages are joined with a newline.
#[cfg(feature = "lopdf")]
fn extract_lopdf(path: &Path) -> Result<String> {
    let pdf_err = |e: lopdf::Error| Error::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let doc = lopdf::Document::load(path).map_err(pdf_err)?;

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        let page = doc.extract_text(&[*page_num]).map_err(pdf_err)?;
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text.trim().to_string())
}
