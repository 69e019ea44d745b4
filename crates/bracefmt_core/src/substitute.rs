//! Substitute positional values into placeholder tokens.
//!
//! ## Notes
//! - Zero arguments: the template is returned unchanged.
//! - Tokens whose index has no argument are left as-is. Nothing is validated or reported.
//! - Values are inserted literally through their `Display` impl; no character in a value is special.
//! - Each argument is rendered once per call, even when its token appears several times.

use std::fmt::Display;

use crate::placeholders::Placeholders;

/// Select how substitution treats text produced by earlier substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubstitutionMode {
    /// Scan the template once and substitute from a fixed snapshot of arguments.
    /// Substituted text is never re-scanned.
    #[default]
    SinglePass,
    /// Replace `{0}` everywhere, then `{1}` in the result, and so on.
    /// A value containing `{j}` for a later `j` gets that token replaced too.
    Sequential,
}

impl SubstitutionMode {
    /// Return the stable lowercase name of this mode (used in logs and CLI help).
    pub fn as_str(self) -> &'static str {
        match self {
            SubstitutionMode::SinglePass => "single-pass",
            SubstitutionMode::Sequential => "sequential",
        }
    }
}

/// Format `template` by replacing each `{i}` with `args[i]`, in a single pass.
///
/// ## Parameters
/// - `template`: string containing zero or more placeholder tokens.
/// - `args`: ordered substitution values.
///
/// ## Returns
/// - (`String`): the formatted string.
///
/// ## Examples
/// ```rust
/// use bracefmt_core::format_positional;
///
/// assert_eq!(format_positional("{0} {0}", &["z"]), "z z");
/// assert_eq!(format_positional("{2}", &["only one"]), "{2}");
/// // Substituted text is not scanned again.
/// assert_eq!(format_positional("{0}{1}", &["{1}", "x"]), "{1}x");
/// ```
pub fn format_positional<T: Display>(template: &str, args: &[T]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();

    let mut out = String::with_capacity(template.len());
    let mut copied_up_to = 0;
    for placeholder in Placeholders::new(template) {
        let Some(value) = rendered.get(placeholder.index) else {
            continue;
        };
        out.push_str(&template[copied_up_to..placeholder.span.start]);
        out.push_str(value);
        copied_up_to = placeholder.span.end;
    }
    out.push_str(&template[copied_up_to..]);
    out
}

/// Format `template` by replacing `{0}` globally, then `{1}` in that result, and so on.
///
/// This is the legacy strategy: because every pass scans the output of the previous one, a value that
/// itself contains a token for a later index is substituted again. Prefer [`format_positional`] unless
/// that behavior is wanted.
///
/// ## Examples
/// ```rust
/// use bracefmt_core::format_sequential;
///
/// assert_eq!(format_sequential("{0}-{1}", &["a", "b"]), "a-b");
/// assert_eq!(format_sequential("{0}{1}", &["{1}", "x"]), "xx");
/// ```
pub fn format_sequential<T: Display>(template: &str, args: &[T]) -> String {
    let mut out = template.to_owned();
    for (index, arg) in args.iter().enumerate() {
        let token = format!("{{{index}}}");
        if out.contains(&token) {
            out = out.replace(&token, &arg.to_string());
        }
    }
    out
}

/// Format `template` with the strategy selected by `mode`.
pub fn format_with_mode<T: Display>(template: &str, args: &[T], mode: SubstitutionMode) -> String {
    match mode {
        SubstitutionMode::SinglePass => format_positional(template, args),
        SubstitutionMode::Sequential => format_sequential(template, args),
    }
}
