//! Static, language, stack and tight string sections.

use crate::error::RenderResult;
use crate::language::StringLanguage;
use crate::render::format::{hex_offset, hex_upper, hex_width};
use crate::render::layout::{BorderStyle, Grid, Layout, Text, Tone};
use crate::render::policy::RenderPolicy;
use crate::render::title;
use crate::results::model::{LanguageString, StackString, StaticString, StringEncoding};
use crate::sanitize::Sanitizer;
use crate::util::deterministic::sort_by_offset;

/// A bare value in the default tier, `0x{offset} {value}` in verbose.
fn offset_line(policy: &RenderPolicy, offset: u64, width: usize, value: String) -> Text {
    if policy.is_verbose() {
        Text::plain(format!("{} ", hex_offset(offset, width))).push(value, Tone::Value)
    } else {
        Text::plain(value)
    }
}

/// Render static strings as an ASCII and a UTF-16LE sub-section.
///
/// Both sub-sections share one offset width so their columns line up.
pub fn render_static_strings<L, S>(
    strings: &[StaticString],
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) -> RenderResult<()>
where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    layout.heading(
        &title(&format!("STATIC STRINGS ({})", strings.len())),
        policy.is_verbose(),
    );

    let ascii: Vec<&StaticString> = strings
        .iter()
        .filter(|s| s.encoding == StringEncoding::Ascii)
        .collect();
    let utf16: Vec<&StaticString> = strings
        .iter()
        .filter(|s| s.encoding == StringEncoding::Utf16Le)
        .collect();

    let width = hex_width(strings.iter().map(|s| s.offset).max().unwrap_or(0));

    render_static_subset(&ascii, StringEncoding::Ascii, width, layout, policy, sanitizer);
    layout.blank();
    render_static_subset(&utf16, StringEncoding::Utf16Le, width, layout, policy, sanitizer);

    tracing::debug!(
        ascii = ascii.len(),
        utf16 = utf16.len(),
        "rendered static strings"
    );
    Ok(())
}

fn render_static_subset<L, S>(
    strings: &[&StaticString],
    encoding: StringEncoding,
    width: usize,
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    let prefix = title("STATIC STRINGS: ");
    let label = if policy.is_verbose() {
        Text::plain(prefix).push(encoding.label(), Tone::Accent)
    } else {
        Text::plain(format!("{prefix}{}", encoding.label()))
    };
    layout.sub_heading(label, strings.len());

    let ascii_only = encoding == StringEncoding::Ascii;
    for s in strings {
        let value = sanitizer.sanitize(&s.string, ascii_only);
        layout.line(offset_line(policy, s.offset, width, value));
    }
}

/// Render Go/Rust runtime strings, found and missed, in offset order.
pub fn render_language_strings<L, S>(
    language: StringLanguage,
    found: &[LanguageString],
    missed: &[LanguageString],
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) -> RenderResult<()>
where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    let mut strings: Vec<&LanguageString> = found.iter().chain(missed).collect();
    sort_by_offset(&mut strings);

    layout.heading(
        &title(&format!("{} STRINGS ({})", language.label(), strings.len())),
        policy.is_verbose(),
    );

    let width = hex_width(strings.last().map(|s| s.offset).unwrap_or(0));
    for s in &strings {
        let value = sanitizer.sanitize(&s.string, false);
        layout.line(offset_line(policy, s.offset, width, value));
    }

    tracing::debug!(?language, count = strings.len(), "rendered language strings");
    Ok(())
}

/// Render stack or tight strings; `label` names the technique in the heading.
///
/// The verbose table is omitted entirely when there are no records.
pub fn render_stack_strings<L, S>(
    label: &str,
    strings: &[StackString],
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) -> RenderResult<()>
where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    layout.heading(
        &title(&format!("{label} STRINGS ({})", strings.len())),
        policy.is_verbose(),
    );

    if !policy.is_verbose() {
        for s in strings {
            layout.line(Text::plain(sanitizer.sanitize(&s.string, false)));
        }
    } else if !strings.is_empty() {
        let mut grid = Grid::new(["Function", "Function Offset", "Frame Offset", "String"])
            .show_header(policy.headers_enabled())
            .border(BorderStyle::AsciiInner);
        for s in strings {
            grid.push_row(vec![
                Text::plain(hex_upper(s.function)),
                Text::plain(hex_upper(s.program_counter)),
                Text::plain(hex_upper(s.frame_offset)),
                Text::value(sanitizer.sanitize(&s.string, false)),
            ])?;
        }
        layout.grid(&grid);
    }

    tracing::debug!(label, count = strings.len(), "rendered stack strings");
    Ok(())
}
