use crate::api::{PhonebookApi, PhonebookPaths};
use crate::config::PhonebookConfig;
use crate::error::{PhonebookError, Result};
use crate::store::fs::{FileStore, DEFAULT_FILENAME};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const FILE_ENV_VAR: &str = "PHONEBOOK_FILE";

pub struct PhonebookContext {
    pub api: PhonebookApi<FileStore>,
    pub config: PhonebookConfig,
}

/// How the caller asked for the store to be located.
#[derive(Debug, Clone, Default)]
pub struct StoreLocation {
    /// An explicit document path (`--file`)
    pub file: Option<PathBuf>,
    /// Use the per-user data directory instead of the cwd
    pub global: bool,
}

/// Picks the record document path.
///
/// Precedence: explicit file, then `env_file` (from `PHONEBOOK_FILE`), then the per-user
/// data directory when `global` is set, then `phonebook.json` in `cwd`.
/// Relative paths are taken relative to `cwd`.
pub fn resolve_store_file(
    cwd: &Path,
    location: &StoreLocation,
    env_file: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(file) = location.file.clone().or(env_file) {
        return Ok(if file.is_absolute() {
            file
        } else {
            cwd.join(file)
        });
    }

    if location.global {
        let proj_dirs = ProjectDirs::from("com", "phonebook", "phonebook").ok_or_else(|| {
            PhonebookError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().join(DEFAULT_FILENAME));
    }

    Ok(cwd.join(DEFAULT_FILENAME))
}

pub fn initialize(cwd: &Path, location: &StoreLocation) -> Result<PhonebookContext> {
    let env_file = std::env::var_os(FILE_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let store_file = resolve_store_file(cwd, location, env_file)?;
    let config_dir = store_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());
    tracing::debug!("Using store {}", store_file.display());

    let config = PhonebookConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        PhonebookConfig::default()
    });

    let store = FileStore::new(store_file.clone());
    let paths = PhonebookPaths {
        store_file,
        config_dir,
    };
    let api = PhonebookApi::new(store, paths);

    Ok(PhonebookContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_cwd_file() {
        let cwd = PathBuf::from("/work");
        let path = resolve_store_file(&cwd, &StoreLocation::default(), None).unwrap();
        assert_eq!(path, PathBuf::from("/work/phonebook.json"));
    }

    #[test]
    fn explicit_file_beats_env() {
        let cwd = PathBuf::from("/work");
        let location = StoreLocation {
            file: Some(PathBuf::from("/tmp/a.json")),
            global: true,
        };
        let path =
            resolve_store_file(&cwd, &location, Some(PathBuf::from("/tmp/b.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/a.json"));
    }

    #[test]
    fn env_file_beats_global() {
        let cwd = PathBuf::from("/work");
        let location = StoreLocation {
            file: None,
            global: true,
        };
        let path = resolve_store_file(&cwd, &location, Some(PathBuf::from("book.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/work/book.json"));
    }

    #[test]
    fn initialize_reads_config_next_to_store() {
        let temp = TempDir::new().unwrap();
        let mut config = PhonebookConfig::default();
        config.set_page_size(2).unwrap();
        config.save(temp.path()).unwrap();

        let location = StoreLocation {
            file: Some(temp.path().join("book.json")),
            global: false,
        };
        let ctx = initialize(temp.path(), &location).unwrap();
        assert_eq!(ctx.config.page_size, 2);
        assert_eq!(ctx.api.paths().config_dir, temp.path());
        assert_eq!(ctx.api.paths().store_file, temp.path().join("book.json"));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

        let location = StoreLocation {
            file: Some(temp.path().join("book.json")),
            global: false,
        };
        let ctx = initialize(temp.path(), &location).unwrap();
        assert_eq!(ctx.config.page_size, 5);
    }
}
