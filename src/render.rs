//! Format entry point that applies [`FormatOptions`] and records what it did.

use std::fmt::Display;

use bracefmt_core::{format_with_mode, max_placeholder_index};

use crate::config::FormatOptions;

/// Format `template` with the default options (single-pass).
pub fn format_str<T: Display>(template: &str, args: &[T]) -> String {
    format_with_options(template, args, &FormatOptions::default())
}

/// Format `template` using the strategy chosen in `options`.
///
/// Emits a `debug` event when the template refers to indices beyond the supplied arguments. Such tokens are
/// still left in place; the event only helps when tracking down an unfilled `{i}` in output.
#[tracing::instrument(skip_all, fields(template_len = template.len(), arg_count = args.len(), mode = options.mode.as_str()))]
pub fn format_with_options<T: Display>(template: &str, args: &[T], options: &FormatOptions) -> String {
    match max_placeholder_index(template) {
        Some(max_index) if max_index >= args.len() => {
            tracing::debug!(max_index, "template has placeholders without a matching argument");
        }
        _ => {}
    }
    tracing::debug!(mode = options.mode.as_str(), "substituting");
    format_with_mode(template, args, options.mode)
}
