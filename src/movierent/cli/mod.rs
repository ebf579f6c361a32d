//! # CLI Layer
//!
//! One possible client of the movierent library: argument parsing, rendering
//! and exit codes. Business outcomes come back from the API as `CmdResult`
//! values and are only formatted here.
//!
//! - `setup`: clap definitions and usage text
//! - `commands`: dispatch from parsed command to API call
//! - `render`: tables, JSON and messages
//! - `styles`: terminal styles

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
