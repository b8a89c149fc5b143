//! # Masterblog Architecture
//!
//! Masterblog is a **UI-agnostic blog-post repository**. The binary in this
//! package is one client of it; an HTTP service would be another, built on the
//! same [`api::BlogApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, picks exit codes       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The repository: owns the store behind a mutex            │
//! │  - One critical section per operation                       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, validation.rs)               │
//! │  - Id assignment, validation, mutation, sort, search        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait: load / save the whole collection        │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules the core keeps
//!
//! - Ids come from `max(existing ids) + 1`, recomputed on every create.
//! - Nothing is persisted with a blank title or content.
//! - A rejected mutation never reaches the store.
//! - Storage failures come back as [`error::BlogError::StorageUnavailable`],
//!   never retried.
//!
//! ## Module Overview
//!
//! - [`api`]: The repository facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Field checks and id assignment
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Post`, `Field`, `FieldMap`)
//! - [`config`]: Configuration management
//! - [`logging`]: Subscriber setup for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
