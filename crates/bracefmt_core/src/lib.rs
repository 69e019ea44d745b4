//! Provide pure placeholder semantics for `bracefmt`: scanning `{i}` tokens and substituting positional values.
//!
//! This crate is intentionally small and dependency-free. Both the `bracefmt` front crate (library + CLI) and
//! any embedding code use these helpers so every entry point agrees on what a placeholder is and how it is
//! replaced.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no logging.
//! - A placeholder is `{` + canonical decimal digits + `}` (see [`placeholders`] for the exact grammar).
//! - Two substitution strategies exist (see [`SubstitutionMode`]); the single-pass strategy is the default.
//!
//! ## Examples
//! ```rust
//! use bracefmt_core::{bracefmt, format_positional};
//!
//! assert_eq!(format_positional("{0}-{1}", &["a", "b"]), "a-b");
//! assert_eq!(bracefmt!("{0} is {1} years old", "Ada", 36), "Ada is 36 years old");
//! ```

pub mod placeholders;
pub mod substitute;

pub use placeholders::{Placeholder, Placeholders, max_placeholder_index, placeholder_count, scan_placeholders};
pub use substitute::{SubstitutionMode, format_positional, format_sequential, format_with_mode};

/// Format a template with a variadic list of heterogeneous [`Display`](core::fmt::Display) values.
///
/// `bracefmt!(template, a, b, ...)` is equivalent to calling [`format_positional`] with
/// `&[&a as &dyn Display, &b as &dyn Display, ...]`. The template may be anything that is `AsRef<str>`.
///
/// ## Examples
/// ```rust
/// use bracefmt_core::bracefmt;
///
/// assert_eq!(bracefmt!("{0}{1}{0}", 'x', 1.5), "x1.5x");
/// assert_eq!(bracefmt!("untouched {0}"), "untouched {0}");
/// ```
#[macro_export]
macro_rules! bracefmt {
    ($template:expr $(,)?) => {
        $crate::format_positional::<&dyn ::core::fmt::Display>(::core::convert::AsRef::<str>::as_ref(&$template), &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format_positional(
            ::core::convert::AsRef::<str>::as_ref(&$template),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    };
}
