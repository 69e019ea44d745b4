//! Integration tests for the bracefmt public API

use std::fmt;

use bracefmt::{FormatOptions, SubstitutionMode, bracefmt, format_str, format_with_options};

#[test]
fn test_documented_behavior() {
    assert_eq!(format_str("{0}", &["x"]), "x");
    assert_eq!(format_str("{0}-{1}", &["a", "b"]), "a-b");
    assert_eq!(format_str("{0} {0}", &["z"]), "z z");
    assert_eq!(format_str("{2}", &["one"]), "{2}");
    assert_eq!(format_str::<&str>("{0} {1}", &[]), "{0} {1}");
    assert_eq!(format_str("nothing to replace", &["a"]), "nothing to replace");
}

#[test]
fn test_rescanning_is_opt_in() {
    let args = ["{1}", "done"];
    assert_eq!(format_with_options("{0}/{1}", &args, &FormatOptions::default()), "{1}/done");
    assert_eq!(
        format_with_options("{0}/{1}", &args, &FormatOptions::new().with_mode(SubstitutionMode::Sequential)),
        "done/done"
    );
}

#[test]
fn test_no_escape_syntax() {
    // Doubled braces are not an escape: the inner token is still replaced.
    assert_eq!(format_str("{{0}}", &["v"]), "{v}");
}

struct Money {
    cents: u64,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[test]
fn test_custom_display_values() {
    let total = Money { cents: 1205 };
    assert_eq!(bracefmt!("Total: {0} ({1} items)", total, 3), "Total: $12.05 (3 items)");
}

#[test]
fn test_display_rendered_once_per_argument() {
    use std::cell::Cell;

    struct Counting<'a>(&'a Cell<usize>);

    impl fmt::Display for Counting<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("c")
        }
    }

    let calls = Cell::new(0);
    let value = Counting(&calls);
    assert_eq!(bracefmt!("{0}{0}{0}", value), "ccc");
    assert_eq!(calls.get(), 1);
}
