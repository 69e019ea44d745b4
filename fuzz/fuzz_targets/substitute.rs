#![no_main]

use bracefmt_core::{format_positional, format_sequential, scan_placeholders};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // First line is the template, the rest are arguments
    let mut lines = s.split('\n');
    let template = lines.next().unwrap_or("");
    let args: Vec<&str> = lines.collect();

    for p in scan_placeholders(template) {
        assert_eq!(&template[p.span.clone()], format!("{{{}}}", p.index));
    }
    let _ = format_positional(template, &args);
    let _ = format_sequential(template, &args);
});
