//! Common utilities for the tagtree pipeline.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for non-fatal diagnostics

pub mod warning;
