//! Common utilities for the cssel crates.
//!
//! This crate provides shared infrastructure used by the library crates and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for recoverable oddities

pub mod warning;
