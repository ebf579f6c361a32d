//! # Movierent Architecture
//!
//! Movierent keeps the movies, customers and rentals of a small rental shop in
//! a SQLite database and exposes them through a positional command line.
//! The library holds everything except terminal handling, which lives in the
//! binary's `cli` module.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Strict argument parsing into a command enum, usage text  │
//! │  - Table / JSON rendering, stdout/stderr, exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, one method per verb                      │
//! │  - Supplies today's date for rent/return                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult + messages           │
//! │  - Not-found and rejected writes become messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, SqliteStore implementation              │
//! │  - Schema creation, one statement per operation             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process;
//! diagnostics go through `tracing` and the binary decides where they land.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Outcome of each operation
//! - [`store`]: Storage abstraction and the SQLite implementation
//! - [`model`]: `Movie`, `Customer`, `Rental`, `RentalRecord`
//! - [`config`]: Configuration file and database location
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
