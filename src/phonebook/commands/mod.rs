use crate::config::PhonebookConfig;
use crate::index::{DisplayEntry, PageInfo};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod search;
pub mod view;

/// Filesystem locations an API instance works against.
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// The record document
    pub store_file: PathBuf,
    /// Where config.json lives
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries written by the command, numbered by position
    pub affected_entries: Vec<DisplayEntry>,
    /// Entries read by the command (positions for list/view, result indexes for search)
    pub listed_entries: Vec<DisplayEntry>,
    pub page: Option<PageInfo>,
    pub config: Option<PhonebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: PhonebookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
