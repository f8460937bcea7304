use std::io;
use std::path::PathBuf;

/// Errors that may occur while converting a sprite file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("No input file given")]
    MissingArgument,
    #[error("Input path {0:?} is not valid UTF-8")]
    NonUtf8Path(PathBuf),
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
