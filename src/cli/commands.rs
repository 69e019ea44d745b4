//! CLI command implementations
//!
//! Commands write to a caller-supplied sink so they can be exercised in tests without a process.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use bracefmt_core::scan_placeholders;

use super::{CliError, CliResult, ExitCode};
use crate::config::FormatOptions;
use crate::render::format_with_options;

/// Where a template came from. File/stdin templates are printed verbatim; inline ones get a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplateInput {
    text: String,
    from_file: bool,
}

/// Read the template from `path`, or stdin when `path` is `-`.
fn read_template_file(path: &Path) -> CliResult<TemplateInput> {
    let label = path.display().to_string();
    if path == Path::new("-") {
        read_template_from(io::stdin(), label)
    } else {
        let file = fs::File::open(path).map_err(|source| CliError::ReadTemplate {
            path: label.clone(),
            source,
        })?;
        read_template_from(file, label)
    }
}

/// Read a whole template from `reader`; `label` names the source in errors and logs.
fn read_template_from(reader: impl Read, label: String) -> CliResult<TemplateInput> {
    let text = io::read_to_string(reader).map_err(|source| CliError::ReadTemplate {
        path: label.clone(),
        source,
    })?;
    tracing::debug!(source = %label, len = text.len(), "read template");
    Ok(TemplateInput { text, from_file: true })
}

/// Format a template and write the result to `out`.
///
/// Without `file`, the first entry of `values` is the template and the rest are its arguments.
pub fn render(
    file: Option<&Path>,
    mut values: Vec<String>,
    sequential: bool,
    out: &mut impl Write,
) -> CliResult<ExitCode> {
    let template = match file {
        Some(path) => read_template_file(path)?,
        None => {
            if values.is_empty() {
                return Err(CliError::MissingTemplate);
            }
            TemplateInput {
                text: values.remove(0),
                from_file: false,
            }
        }
    };
    render_template(&template, &values, sequential, out)
}

fn render_template(
    template: &TemplateInput,
    values: &[String],
    sequential: bool,
    out: &mut impl Write,
) -> CliResult<ExitCode> {
    let options = if sequential {
        FormatOptions::new().sequential()
    } else {
        FormatOptions::new()
    };
    let formatted = format_with_options(&template.text, values, &options);

    write_output(out, &formatted, !template.from_file)?;
    Ok(ExitCode::SUCCESS)
}

/// List the placeholder tokens of a template, one `<index>\t<start>..<end>` line each.
pub fn scan(file: Option<&Path>, template: Option<String>, out: &mut impl Write) -> CliResult<ExitCode> {
    let template = match (file, template) {
        (Some(path), _) => read_template_file(path)?.text,
        (None, Some(text)) => text,
        (None, None) => return Err(CliError::MissingTemplate),
    };

    let mut listing = String::new();
    for p in scan_placeholders(&template) {
        listing.push_str(&format!("{}\t{}..{}\n", p.index, p.span.start, p.span.end));
    }
    write_output(out, &listing, false)?;
    Ok(ExitCode::SUCCESS)
}

fn write_output(out: &mut impl Write, text: &str, newline: bool) -> CliResult<()> {
    out.write_all(text.as_bytes()).map_err(CliError::Write)?;
    if newline {
        out.write_all(b"\n").map_err(CliError::Write)?;
    }
    out.flush().map_err(CliError::Write)
}
