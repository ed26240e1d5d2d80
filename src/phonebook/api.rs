//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every UI.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds no
//! business logic and does no I/O of its own beyond what the store does.
//!
//! `PhonebookApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Entry;
use crate::store::RecordStore;

/// The main API facade for phonebook operations.
pub struct PhonebookApi<S: RecordStore> {
    store: S,
    paths: commands::PhonebookPaths,
}

impl<S: RecordStore> PhonebookApi<S> {
    pub fn new(store: S, paths: commands::PhonebookPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, entry)
    }

    pub fn edit_entry(&mut self, position: i64, entry: Entry) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, position, entry)
    }

    pub fn list_entries(&self, page: i64, page_size: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page, page_size)
    }

    pub fn search_entries(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_entry(&self, position: i64) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, position)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::PhonebookPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PhonebookPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> PhonebookApi<InMemoryStore> {
        let paths = PhonebookPaths {
            store_file: PathBuf::from("unused.json"),
            config_dir: PathBuf::from("unused"),
        };
        PhonebookApi::new(InMemoryStore::new(), paths)
    }

    #[test]
    fn add_then_list_then_edit_then_search() {
        let mut api = api();
        let entry = Entry::new("Smith", "Ana", "", "Acme", "555-0100", "555-0101");
        api.add_entry(entry.clone()).unwrap();

        let page = api.list_entries(1, 5).unwrap();
        assert_eq!(page.listed_entries.len(), 1);
        assert_eq!(page.listed_entries[0].index, 1);
        assert_eq!(page.listed_entries[0].entry, entry);

        let mut updated = entry;
        updated.organization = "Globex".into();
        api.edit_entry(1, updated.clone()).unwrap();

        let found = api.search_entries("globex").unwrap();
        assert_eq!(found.listed_entries.len(), 1);
        assert_eq!(found.listed_entries[0].index, 1);
        assert!(api.search_entries("acme").unwrap().listed_entries.is_empty());

        assert_eq!(api.view_entry(1).unwrap().listed_entries[0].entry, updated);
        assert_eq!(api.store().saves(), 2);
    }

    #[test]
    fn errors_pass_through() {
        let mut api = api();
        assert!(matches!(
            api.edit_entry(1, Entry::default()),
            Err(PhonebookError::InvalidPosition { .. })
        ));
        assert!(matches!(
            api.list_entries(0, 5),
            Err(PhonebookError::InvalidPage(0))
        ));
        assert_eq!(api.store().saves(), 0);
    }
}
