//! # Phonebook Architecture
//!
//! Phonebook is a small contact manager kept in a single JSON file. The library holds
//! everything except the terminal: the binary in `main.rs` is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Command loop, prompts, templated output                  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the model for a session  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, returns a structured CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (phonebook.rs, model.rs)                             │
//! │  - In-memory cache of contacts, id assignment, dirty check  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edits live only in the model's cache until an explicit save. The store is read once
//! at startup, rewritten whole on save, and re-read to answer "are there unsaved
//! changes?".
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`phonebook`]: The cache-owning model
//! - [`model`]: `Contact` and the tri-state `FieldUpdate`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod phonebook;
pub mod store;
