//! bracefmt version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time so the CLI and library report
//! the same string.

/// The bracefmt version string (for example, `0.1.0`).
pub const BRACEFMT_VERSION: &str = env!("CARGO_PKG_VERSION");
