use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an archive build.
///
/// All of them are fatal to the current build: a boot image that is missing
/// files or truncated is worse than no image, so there is no partial-success
/// mode and no automatic retry.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid source root {}: not an existing directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("unable to read entry {}", .path.display())]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write archive {}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported entry kind at {}: not a regular file", .0.display())]
    UnsupportedEntryKind(PathBuf),
}
