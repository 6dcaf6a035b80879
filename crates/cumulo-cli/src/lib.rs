//! Cumulo CLI library.
//!
//! The binary in `main.rs` is a thin shell over these modules: [`cli`]
//! parses arguments, [`commands`] executes them against the API, and
//! [`output`] renders the results as tables or JSON.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
