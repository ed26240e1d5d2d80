//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory kept in a single JSON document. The library holds
//! all of the behavior; the `phonebook` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, terminal rendering    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / edit / list / search / view / config               │
//! │  - Load the directory, transform it, save it back           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Whole-document persistence
//!
//! Every operation reads the full [`model::Directory`] from the store and, if it mutates,
//! writes the full directory back. Nothing is cached between operations, so two API calls
//! never disagree about what is on disk.
//!
//! ## Positions
//!
//! Entries have no identity beyond their place in the directory. Listing and editing use
//! 1-based positions; search results are numbered from 1 independently of position.
//! See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry` and `Directory`
//! - [`index`]: Numbered entries as shown to users
//! - [`config`]: Persisted settings (page size)
//! - [`init`]: Storage location resolution and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive shell and printing (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
