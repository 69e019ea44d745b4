#![forbid(unsafe_code)]
//! bracefmt: positional `{0}`-style placeholder formatting
//!
//! This crate is the front door over [`bracefmt_core`]: it adds [`FormatOptions`] to pick a substitution
//! strategy, `tracing` instrumentation, and the `bracefmt` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use bracefmt::{FormatOptions, format_with_options};
//!
//! let options = FormatOptions::new();
//! assert_eq!(format_with_options("{0}, {1}!", &["Hello", "world"], &options), "Hello, world!");
//! ```

pub mod cli;
pub mod config;
pub mod render;
pub mod version;

pub use bracefmt_core::{
    Placeholder, SubstitutionMode, bracefmt, format_positional, format_sequential, format_with_mode,
    max_placeholder_index, placeholder_count, scan_placeholders,
};

pub use config::FormatOptions;
pub use render::{format_str, format_with_options};
pub use version::BRACEFMT_VERSION;
