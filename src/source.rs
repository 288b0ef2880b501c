use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// Failure to obtain source text. Reported before any scanning begins.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file {} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a whole source file into memory.
///
/// # Errors
///
/// Returns `SourceError::NotFound` if nothing exists at `path`, and
/// `SourceError::Read` for any other I/O failure, including non-UTF-8
/// contents.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Reading source file");

    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_owned(),
            }
        } else {
            SourceError::Read {
                path: path.to_owned(),
                source,
            }
        }
    })
}
