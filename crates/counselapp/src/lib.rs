//! # Counselapp Architecture
//!
//! Counselapp is the **UI-agnostic core** of the counseling admin console: the records an
//! administrator manages, the filters applied to them, and the screen state of the
//! management view. The `counsel` CLI is one client of it; nothing in here assumes a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Single entry point for every UI                          │
//! │  - Owns the stores, the view controller and the config      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs)                                       │
//! │  - List / Create / Edit / ConfirmDelete state machine       │
//! │  - Holds the active collection, filter and open form        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: create, update, delete, list, dashboard  │
//! │  - Inputs validated through forms.rs and filter.rs          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, whole-collection replacement          │
//! │  - MemoryStore; Campus bundles the three collections        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Code in this crate takes plain arguments and returns `Result` values. It never writes
//! to stdout or stderr and never exits the process. Diagnostics go through `tracing`;
//! whether and where they appear is up to the client that installs a subscriber.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: the bulk of the tests, run against `MemoryStore` fixtures.
//! 2. **View**: transition rules, including illegal requests and stale targets.
//! 3. **API**: dispatch and the session scenarios in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`view`]: the view state controller
//! - [`commands`]: business logic
//! - [`filter`]: filter state and the record predicate
//! - [`forms`]: counselor form payloads and validation
//! - [`store`]: storage abstraction and the in-memory implementation
//! - [`model`]: records, statuses, collections and colleges
//! - [`data`]: seed datasets
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod forms;
pub mod model;
pub mod store;
pub mod view;
