//! Metadata summary grid.
//!
//! Default tier shows the file path and identified language; verbose adds
//! run details and a function analysis summary. Both tiers list per-technique
//! string counts, with `Disabled` standing in for techniques that did not run.

use crate::error::RenderResult;
use crate::language::StringLanguage;
use crate::render::format::{format_runtime, format_start_date, pad_right, wrap};
use crate::render::layout::{BorderStyle, Grid, Layout, Text};
use crate::render::policy::RenderPolicy;
use crate::results::model::{Metadata, ResultDocument};
use crate::sanitize::Sanitizer;

pub const MIN_WIDTH_LEFT_COL: usize = 22;
pub const MIN_WIDTH_RIGHT_COL: usize = 82;

pub const DISABLED: &str = "Disabled";

type Row = (String, String);

fn row(label: &str, value: impl Into<String>) -> Row {
    (label.to_string(), value.into())
}

/// `"{language}{ (version)}{ - selected: X}"`, suffixes only when populated.
pub fn language_summary(meta: &Metadata) -> String {
    let mut summary = meta.language.clone();
    if meta.language != "unknown" && !meta.language_version.is_empty() {
        summary.push_str(&format!(" ({})", meta.language_version));
    }
    if !meta.language_selected.is_empty() {
        summary.push_str(&format!(" - selected: {}", meta.language_selected));
    }
    summary
}

/// Whether the language strings technique applies to this document.
pub fn language_strings_enabled(doc: &ResultDocument) -> bool {
    doc.analysis.enable_language_strings
        && StringLanguage::from_tag(&doc.metadata.language).is_some()
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// One row per technique: record count, plus character totals for static
/// and language strings.
pub fn string_type_rows(doc: &ResultDocument) -> Vec<Row> {
    let analysis = &doc.analysis;
    let strings = &doc.strings;

    let len_ss = strings.static_strings.len();
    let len_ls = strings.language_strings.len();
    let chars_ss: usize = strings
        .static_strings
        .iter()
        .map(|s| s.string.chars().count())
        .sum();
    let chars_ls: usize = strings
        .language_strings
        .iter()
        .map(|s| s.string.chars().count())
        .sum();

    // Language counts align under the static counts.
    let count_w = digits(len_ss);
    let chars_w = digits(chars_ss);

    let count_or_disabled = |enabled: bool, n: usize| {
        if enabled {
            n.to_string()
        } else {
            DISABLED.to_string()
        }
    };

    vec![
        row(
            " static strings",
            if analysis.enable_static_strings {
                format!("{len_ss} ({chars_ss} characters)")
            } else {
                DISABLED.to_string()
            },
        ),
        row(
            "  language strings",
            if analysis.enable_language_strings && !doc.metadata.language.is_empty() {
                format!("{len_ls:>count_w$} ({chars_ls:>chars_w$} characters)")
            } else {
                DISABLED.to_string()
            },
        ),
        row(
            " stack strings",
            count_or_disabled(analysis.enable_stack_strings, strings.stack_strings.len()),
        ),
        row(
            " tight strings",
            count_or_disabled(analysis.enable_tight_strings, strings.tight_strings.len()),
        ),
        row(
            " decoded strings",
            count_or_disabled(
                analysis.enable_decoded_strings,
                strings.decoded_strings.len(),
            ),
        ),
    ]
}

/// Function analysis summary; collapses to a single `Disabled` row when the
/// emulation engine never ran.
///
/// `path_width` is the display width of the file path as shown in the grid;
/// the candidate list wraps to it or to the minimum column width.
pub fn function_analysis_rows(doc: &ResultDocument, path_width: usize) -> Vec<Row> {
    if doc.metadata.runtime.vivisect == 0.0 {
        return vec![row("analyzed functions", DISABLED)];
    }

    let analysis = &doc.analysis;
    let functions = &analysis.functions;

    let mut rows = vec![
        row("analyzed functions", ""),
        row(" discovered", functions.discovered.to_string()),
        row(" library", functions.library.to_string()),
    ];
    if analysis.enable_stack_strings {
        rows.push(row(
            " stack strings",
            functions.analyzed_stack_strings.to_string(),
        ));
    }
    if analysis.enable_tight_strings {
        rows.push(row(
            " tight strings",
            functions.analyzed_tight_strings.to_string(),
        ));
    }
    if analysis.enable_decoded_strings {
        rows.push(row(
            " decoded strings",
            functions.analyzed_decoded_strings.to_string(),
        ));
    }

    if !functions.decoding_function_scores.is_empty() {
        let candidates = functions
            .decoding_function_scores
            .iter()
            .map(|(fva, d)| format!("0x{fva:x} ({:.3}, xrefs_to: {})", d.score, d.xrefs_to))
            .collect::<Vec<_>>()
            .join(", ");
        let width = path_width.max(MIN_WIDTH_RIGHT_COL);
        rows.push(row(
            "  identified decoding functions\n  (offset, score, and number of xrefs to)",
            wrap(&candidates, width),
        ));
    }

    rows
}

/// Render the metadata grid.
pub fn render_meta<L, S>(
    doc: &ResultDocument,
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) -> RenderResult<()>
where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    let meta = &doc.metadata;
    let path = sanitizer.sanitize(&meta.file_path, false);
    let path_width = console::measure_text_width(&path);
    let file_path = (
        pad_right("file path", MIN_WIDTH_LEFT_COL),
        pad_right(&path, MIN_WIDTH_RIGHT_COL),
    );

    let mut rows: Vec<Row> = vec![file_path];
    if policy.is_verbose() {
        rows.extend([
            row("start date", format_start_date(meta.runtime.start_date)?),
            row("runtime", format_runtime(meta.runtime.total)),
            row("version", meta.version.as_str()),
            row("identified language", language_summary(meta)),
            row("imagebase", format!("0x{:x}", meta.imagebase)),
            row("min string length", meta.min_length.to_string()),
        ]);
    } else {
        rows.push(row("identified language", language_summary(meta)));
    }

    rows.push(row("extracted strings", ""));
    rows.extend(string_type_rows(doc));
    if policy.is_verbose() {
        rows.extend(function_analysis_rows(doc, path_width));
    }

    let mut grid = Grid::new(["field", "value"])
        .show_header(false)
        .border(BorderStyle::Ascii);
    for (label, value) in rows {
        grid.push_row(vec![Text::plain(label), Text::plain(value)])?;
    }

    tracing::debug!(rows = grid.len(), "rendered metadata");
    layout.grid(&grid);
    Ok(())
}
