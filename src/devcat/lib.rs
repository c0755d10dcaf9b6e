//! # Devcat Architecture
//!
//! Devcat keeps a catalog of phones and laptops in a plain text file, one
//! device per line. The library does all of the work; the `devcat` binary is
//! one thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the loaded catalog                    │
//! │  - Saves after commands that modify the catalog             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: model.rs, catalog.rs, query.rs, codec.rs, store/     │
//! │  - Devices, the ordered catalog, queries, the line format   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The only I/O is the store reading and writing its file, and
//! that happens inside a single load or save call. Diagnostics go through
//! `tracing`; the subscriber is the binary's business.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: Core data types (`Device`, `DeviceKind`, `Variant`)
//! - [`catalog`]: The ordered, index-addressed collection
//! - [`query`]: Filters, counts, sorts and per-variant maxima
//! - [`codec`]: The one-line text format
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
