use super::RecordStore;
use crate::error::Result;
use crate::model::Directory;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    directory: Directory,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Directory> {
        Ok(self.directory.clone())
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.directory = directory.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Entry;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` numbered entries: "Last1 First1", "Last2 First2", ...
        pub fn with_entries(self, count: usize) -> Self {
            let mut directory = self.store.load().unwrap();
            for i in 1..=count {
                directory.push(Entry::new(
                    format!("Last{}", i),
                    format!("First{}", i),
                    "",
                    format!("Org{}", i),
                    format!("555-01{:02}", i),
                    "",
                ));
            }
            self.seed(directory)
        }

        pub fn with_entry(self, entry: Entry) -> Self {
            let mut directory = self.store.load().unwrap();
            directory.push(entry);
            self.seed(directory)
        }

        // Seeding does not count as a save.
        fn seed(mut self, directory: Directory) -> Self {
            self.store.directory = directory;
            self
        }
    }
}
