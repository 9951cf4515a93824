use crate::archive::error::BuildError;
use crate::archive::walker::{Entry, WalkItem, Walker};
use colored::Colorize;
use fake::rand;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Builds one compressed initramfs image out of a walker's entries.
///
/// Per entry, the relative path bytes are written first and the file
/// content bytes immediately after, with nothing in between (see the
/// module docs for the resulting payload contract). By default non-regular
/// entries are skipped with a warning; `strict` turns them into a build
/// failure instead, since silently omitting boot files is a latent bug
/// class worth surfacing.
#[derive(Debug)]
pub struct ArchiveBuilder {
    destination: PathBuf,
    strict: bool,
}

impl ArchiveBuilder {
    pub fn new(destination: impl AsRef<Path>) -> Self {
        ArchiveBuilder {
            destination: destination.as_ref().to_path_buf(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Runs one build: walk, encode, finalize, rename into place.
    ///
    /// The image is assembled in a temp file next to the destination and
    /// renamed only after the gzip stream is finished, so a failed or
    /// interrupted build never leaves a truncated image under the final
    /// name. Warnings about skipped entries go to `diagnostics`.
    pub fn build(
        &self,
        walker: &Walker,
        diagnostics: &mut dyn Write,
    ) -> Result<(), BuildError> {
        let temp_path = self.temp_path();

        match self.encode_to(&temp_path, walker, diagnostics) {
            Ok(()) => std::fs::rename(&temp_path, &self.destination).map_err(|source| {
                let _ = std::fs::remove_file(&temp_path);

                BuildError::SinkWrite {
                    path: self.destination.clone(),
                    source,
                }
            }),
            Err(error) => {
                let _ = std::fs::remove_file(&temp_path);
                Err(error)
            }
        }
    }

    fn encode_to(
        &self,
        temp_path: &Path,
        walker: &Walker,
        diagnostics: &mut dyn Write,
    ) -> Result<(), BuildError> {
        let sink = File::create(temp_path).map_err(|source| BuildError::SinkWrite {
            path: self.destination.clone(),
            source,
        })?;
        let mut encoder = GzEncoder::new(sink, Compression::default());

        for item in walker.items() {
            match item? {
                WalkItem::File(entry) => self.encode_entry(&entry, &mut encoder)?,
                WalkItem::Skipped(path) if self.strict => {
                    return Err(BuildError::UnsupportedEntryKind(path));
                }
                WalkItem::Skipped(path) => {
                    // diagnostics are best-effort, they never fail the build
                    let _ = writeln!(
                        diagnostics,
                        "{} skipping non-regular file {}",
                        "warning:".yellow().bold(),
                        path.display()
                    );
                }
            }
        }

        // an unfinished gzip stream must never be mistaken for a valid image
        encoder
            .finish()
            .and_then(|sink| sink.sync_all())
            .map_err(|source| BuildError::SinkWrite {
                path: self.destination.clone(),
                source,
            })
    }

    fn encode_entry(
        &self,
        entry: &Entry,
        encoder: &mut GzEncoder<File>,
    ) -> Result<(), BuildError> {
        let record_path = normalized_record_path(&entry.relative_path);

        encoder
            .write_all(record_path.as_bytes())
            .map_err(|source| BuildError::SinkWrite {
                path: self.destination.clone(),
                source,
            })?;

        // drain the source file straight into the compressor so trees
        // larger than memory still build
        let mut source_file =
            File::open(&entry.absolute_path).map_err(|source| BuildError::EntryRead {
                path: entry.absolute_path.clone(),
                source,
            })?;

        std::io::copy(&mut source_file, encoder).map_err(|source| BuildError::EntryRead {
            path: entry.absolute_path.clone(),
            source,
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let temp_name = format!("tmp-img-{}", rand::random::<u32>());

        match self.destination.parent() {
            Some(parent) if parent != Path::new("") => parent.join(temp_name),
            _ => PathBuf::from(temp_name),
        }
    }
}

/// Forward-slash form of a relative path, as the boot-side unpacker
/// expects regardless of the host's separator convention.
pub fn normalized_record_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
