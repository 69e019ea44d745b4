//! Locate placeholder tokens in a template string.
//!
//! A placeholder token is `{` followed by canonical decimal digits followed by `}`:
//!
//! - one or more ASCII digits, no sign and no whitespace;
//! - no leading zeros, except for the single digit `0`;
//! - the value must fit in `usize`.
//!
//! Anything else (`{00}`, `{ 1 }`, `{-1}`, `{name}`, `{}`) is literal text and is never matched.
//!
//! ## Notes
//! - Scanning works on bytes. `{`, `}` and ASCII digits never occur inside a multi-byte UTF-8 sequence, so
//!   every reported span starts and ends on a char boundary.
//! - Tokens never overlap. A `{` that does not open a well-formed token is skipped on its own, so `{{0}}`
//!   contains exactly one token, `{0}` at `1..4`.

use std::iter::FusedIterator;
use std::ops::Range;

/// Represent one placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// Argument position the token refers to (`{3}` → `3`).
    pub index: usize,
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
}

/// Iterate the placeholder tokens of a template, left to right.
///
/// Created by [`Placeholders::new`]; [`scan_placeholders`] collects it.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Placeholders<'a> {
    /// Start scanning `template` from its first byte.
    pub fn new(template: &'a str) -> Self {
        Self {
            bytes: template.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for Placeholders<'_> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Placeholder> {
        while let Some(offset) = self.bytes[self.pos..].iter().position(|&b| b == b'{') {
            let start = self.pos + offset;
            match token_at(self.bytes, start) {
                Some((index, end)) => {
                    self.pos = end;
                    return Some(Placeholder {
                        index,
                        span: start..end,
                    });
                }
                None => self.pos = start + 1,
            }
        }
        self.pos = self.bytes.len();
        None
    }
}

impl FusedIterator for Placeholders<'_> {}

/// Collect every placeholder token in `template`.
///
/// ## Parameters
/// - `template`: the string to scan.
///
/// ## Returns
/// - (`Vec<Placeholder>`): tokens in left-to-right order; spans are strictly increasing and non-overlapping.
///
/// ## Examples
/// ```rust
/// use bracefmt_core::scan_placeholders;
///
/// let found = scan_placeholders("{1} and {0}, not {01}");
/// assert_eq!(found.iter().map(|p| p.index).collect::<Vec<_>>(), vec![1, 0]);
/// assert_eq!(found[0].span, 0..3);
/// ```
pub fn scan_placeholders(template: &str) -> Vec<Placeholder> {
    Placeholders::new(template).collect()
}

/// Return the largest placeholder index in `template`, or `None` if it has no tokens.
pub fn max_placeholder_index(template: &str) -> Option<usize> {
    Placeholders::new(template).map(|p| p.index).max()
}

/// Count placeholder tokens in `template` (repeated indices count once per occurrence).
pub fn placeholder_count(template: &str) -> usize {
    Placeholders::new(template).count()
}

/// Try to read a token whose `{` sits at `start`. Returns `(index, end)` with `end` one past the `}`.
fn token_at(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let digits_start = start + 1;
    let digits_len = bytes
        .get(digits_start..)?
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    let digits_end = digits_start + digits_len;
    if bytes.get(digits_end) != Some(&b'}') {
        return None;
    }
    parse_canonical_index(&bytes[digits_start..digits_end]).map(|index| (index, digits_end + 1))
}

/// Parse ASCII digits as a `usize`, rejecting leading zeros and overflow.
fn parse_canonical_index(digits: &[u8]) -> Option<usize> {
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }
    digits
        .iter()
        .try_fold(0usize, |acc, &d| acc.checked_mul(10)?.checked_add(usize::from(d - b'0')))
}
