use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "No wine descriptions directory specified\n\
         Usage:\n  export WINE_DESCRIPTIONS_DIR=\"/path/to/wine/descriptions\"\n  \
         {bin}\n\n  Or:\n  {bin} \"/path/to/wine/descriptions\""
    )]
    MissingRoot { bin: &'static str },

    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error(
        "No PDF extraction backend compiled in. Rebuild with one of:\n  \
         cargo build --features pdf-extract\n  or\n  cargo build --features lopdf"
    )]
    NoPdfBackend,

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("extracting {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
