use super::RecordStore;
use crate::error::{PhonebookError, Result};
use crate::model::Directory;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_FILENAME: &str = "phonebook.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_failure(&self, source: io::Error) -> PhonebookError {
        PhonebookError::WriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}

/// Replaces `target` with `content` via a temp file in the same directory and a rename.
///
/// Missing parent directories are created. The temp file is removed if the rename fails.
pub(crate) fn write_atomic(target: &Path, content: &str) -> io::Result<()> {
    // Bare filenames have an empty parent, which means the cwd
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    // Same directory as the target so the rename stays on one filesystem
    let tmp_file = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

    fs::write(&tmp_file, content)?;
    if let Err(e) = fs::rename(&tmp_file, target) {
        let _ = fs::remove_file(&tmp_file);
        return Err(e);
    }
    Ok(())
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Directory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No store at {}, starting empty", self.path.display());
                return Ok(Directory::new());
            }
            Err(e) => return Err(PhonebookError::Io(e)),
        };

        let directory: Directory =
            serde_json::from_str(&content).map_err(|source| PhonebookError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            "Loaded {} entries from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        let content = serde_json::to_string_pretty(directory)?;
        write_atomic(&self.path, &content).map_err(|e| self.write_failure(e))?;

        tracing::debug!(
            "Saved {} entries to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}
