//! # Recipebook Architecture
//!
//! Recipebook is a **UI-agnostic recipe catalog library**. The terminal client
//! in `main.rs` is one view over it; a web front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, prints output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the RecipeBook state and the store                  │
//! │  - Writes the primary collection through after changes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations over the RecipeBook                      │
//! │  - Never fail; report through CmdResult messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Collections, One Draft
//!
//! The catalog keeps a persisted **primary** collection and a session-only
//! **secondary** collection ("added on this page"). There is a single draft
//! and a single edit pointer shared by both: an edit applies by id to every
//! collection holding that id. See [`book`] and [`commands::commit`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`book`]: The in-memory catalog state
//! - [`commands`]: One module per operation
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `Draft`, `DraftUpdate`, `Context`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`init`]: Data directory resolution and context setup
//! - `cli`: Argument parsing, interactive session and printing for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
