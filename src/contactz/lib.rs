//! # Contactz Architecture
//!
//! Contactz is a **UI-agnostic address book library** with a small CLI client
//! on top. The core keeps an ordered list of contacts in memory and rewrites
//! the whole list to disk after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, confirms deletes, formats output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses user index strings into DisplayIndex values       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves display indexes, validates required fields      │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore: in-memory list + write-through             │
//! │  - ContactBackend: FileBackend (JSON), MemBackend (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! The store never returns errors. Bad positions are no-ops (or `None` for
//! reads), and persistence failures are logged through the `log` facade and
//! swallowed. Callers that want to know whether a save worked can use
//! [`store::ContactBackend::try_save`] directly.
//!
//! Validation of required fields (name, phone number) is a presentation
//! concern and happens in the command layer, not in the store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: `ContactStore` and persistence backends
//! - [`model`]: The `Contact` record
//! - [`index`]: 1-based display indexes
//! - [`config`]: Configuration file handling
//! - [`logging`]: Logger bootstrap for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
