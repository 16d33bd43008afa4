//! CLI command implementations.
//!
//! Each command has a `run` entry point used by `main` and an `execute`
//! function writing to any [`std::io::Write`] for testing.

pub mod caplets;
pub mod demo;
pub mod scenario;
