use crate::archive::error::BuildError;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One regular file discovered under the source root.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Entry {
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
}

/// What a directory entry turned out to be, decided once during traversal
/// instead of being re-inspected ad hoc downstream.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EntryKind {
    RegularFile,
    Directory,
    Other,
}

/// One item of a traversal: either a file to archive, or a non-regular
/// entry (symlink, device, fifo, ...) the walker refuses to archive.
#[derive(Debug)]
pub enum WalkItem {
    File(Entry),
    Skipped(PathBuf),
}

#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, BuildError> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(BuildError::InvalidRoot(root.to_path_buf()));
        }

        Ok(Walker {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fresh traversal on every call. Entries come back sorted by file name
    /// at each level, so an unchanged tree always walks the same way;
    /// record order is part of the archive's contract with the unpacker.
    ///
    /// Directories are structural only and yield nothing; symlinks are not
    /// followed and surface as `WalkItem::Skipped` together with every
    /// other non-regular entry.
    pub fn items(&self) -> impl Iterator<Item = Result<WalkItem, BuildError>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|dir_entry| self.classify(dir_entry).transpose())
    }

    fn classify(
        &self,
        dir_entry: walkdir::Result<walkdir::DirEntry>,
    ) -> Result<Option<WalkItem>, BuildError> {
        let dir_entry = dir_entry.map_err(|error| {
            let path = error
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.root.clone());

            BuildError::EntryRead {
                path,
                source: error.into(),
            }
        })?;

        match Self::kind_of(&dir_entry) {
            EntryKind::Directory => Ok(None),
            EntryKind::Other => Ok(Some(WalkItem::Skipped(dir_entry.into_path()))),
            EntryKind::RegularFile => {
                let absolute_path = dir_entry.into_path();
                let relative_path = absolute_path
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    // walkdir roots every yielded path at self.root
                    .unwrap_or_else(|_| absolute_path.clone());

                Ok(Some(WalkItem::File(Entry::new(
                    relative_path,
                    absolute_path,
                ))))
            }
        }
    }

    fn kind_of(dir_entry: &walkdir::DirEntry) -> EntryKind {
        let file_type = dir_entry.file_type();

        if file_type.is_file() {
            EntryKind::RegularFile
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}
