use crate::error::{PhonebookError, Result};
use crate::store::fs::write_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Settings for phonebook, stored as config.json next to the record document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Entries shown per page by `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(PhonebookError::Io(e)),
        };
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;

        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        write_atomic(&config_path, &content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(PhonebookError::Config(
                "page-size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }

    /// Config keys as spelled on the command line.
    pub const KEYS: [&'static str; 1] = ["page-size"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size = value.trim().parse::<usize>().map_err(|_| {
                    PhonebookError::Config(format!("page-size must be a number, got {:?}", value))
                })?;
                self.set_page_size(size)
            }
            _ => Err(PhonebookError::Config(format!(
                "Unknown config key: {}",
                key
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PhonebookError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
