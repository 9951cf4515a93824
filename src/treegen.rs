//! Randomized directory trees of empty files, for exercising the packer
//! under varied shapes.

use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::path::{Path, PathBuf};

const NAME_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIR_NAME_LENGTH: usize = 10;
const FILE_NAME_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, new)]
pub struct TreeGenerator {
    max_depth: usize,
}

impl TreeGenerator {
    /// Grows `iterations` chains under `output_dir` and returns every
    /// file created, so callers can check them against a packed archive.
    pub fn grow(&self, output_dir: &Path, iterations: usize) -> anyhow::Result<Vec<PathBuf>> {
        let mut created_files = Vec::new();

        for _ in 0..iterations {
            created_files.extend(self.grow_chain(output_dir)?);
        }

        Ok(created_files)
    }

    /// Grows one chain of nested random-named directories, each level
    /// holding a single empty file. The chain's depth is drawn in
    /// `0..=max_depth`; descent is an explicit loop, so a pathological
    /// depth cannot blow the stack.
    pub fn grow_chain(&self, output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let depth = rand::random::<u32>() as usize % (self.max_depth + 1);

        let mut current_dir = output_dir.to_path_buf();
        let mut created_files = Vec::new();

        for _ in 0..depth {
            current_dir = current_dir.join(random_name(DIR_NAME_LENGTH));
            std::fs::create_dir(&current_dir).context(format!(
                "Unable to create directory {}",
                current_dir.display()
            ))?;

            let file_path = current_dir.join(random_name(FILE_NAME_LENGTH));
            std::fs::write(&file_path, b"")
                .context(format!("Unable to create file {}", file_path.display()))?;
            created_files.push(file_path);
        }

        Ok(created_files)
    }
}

fn random_name(length: usize) -> String {
    (0..length)
        .map(|_| {
            let index = rand::random::<u32>() as usize % NAME_CHARSET.len();
            NAME_CHARSET[index] as char
        })
        .collect()
}
