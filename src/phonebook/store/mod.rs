//! # Storage Layer
//!
//! The [`RecordStore`] trait is the whole persistence contract: load the complete
//! [`Directory`], or replace it completely. There are no partial updates.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One pretty-printed JSON array at a configured path
//!   - A missing file loads as an empty directory
//!   - Saves go through a temp file and an atomic rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert that refused operations wrote nothing
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "last_name": "Smith",
//!     "first_name": "Ana",
//!     "middle_name": "",
//!     "organization": "Acme",
//!     "work_phone": "555-0100",
//!     "personal_phone": "555-0101"
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::Directory;

pub mod fs;
pub mod memory;

/// Abstract interface for directory storage.
pub trait RecordStore {
    /// Read the full directory. A store that was never written loads as empty.
    fn load(&self) -> Result<Directory>;

    /// Replace the stored directory with `directory`.
    fn save(&mut self, directory: &Directory) -> Result<()>;
}
