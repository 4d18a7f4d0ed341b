//! Decoded strings section.

use crate::error::RenderResult;
use crate::render::layout::{BorderStyle, Grid, Layout, Text, Tone};
use crate::render::policy::RenderPolicy;
use crate::render::title;
use crate::results::model::{AddressType, DecodedString};
use crate::sanitize::Sanitizer;
use crate::util::deterministic::group_by_routine;

/// First column of a decoded string row: a region tag or the absolute address.
pub fn location(ds: &DecodedString) -> String {
    match ds.address_type {
        AddressType::Stack => "[stack]".to_string(),
        AddressType::Heap => "[heap]".to_string(),
        AddressType::Global => format!("0x{:x}", ds.address.unwrap_or(0)),
    }
}

/// Render decoded strings.
///
/// Verbose output groups records by decoding routine, in first-seen order,
/// with one sub-heading and one table per routine.
pub fn render_decoded_strings<L, S>(
    strings: &[DecodedString],
    layout: &mut L,
    policy: &RenderPolicy,
    sanitizer: &S,
) -> RenderResult<()>
where
    L: Layout,
    S: Sanitizer + ?Sized,
{
    layout.heading(
        &title(&format!("DECODED STRINGS ({})", strings.len())),
        policy.is_verbose(),
    );

    if !policy.is_verbose() {
        for ds in strings {
            layout.line(Text::plain(sanitizer.sanitize(&ds.string, false)));
        }
        return Ok(());
    }

    let groups = group_by_routine(strings);
    for (fva, members) in &groups {
        layout.sub_heading(
            Text::plain(" FUNCTION at ").push(format!("0x{fva:x}"), Tone::Accent),
            members.len(),
        );

        let mut grid = Grid::new(["Offset", "Called At", "String"])
            .show_header(policy.headers_enabled())
            .border(BorderStyle::AsciiInner);
        for ds in members {
            grid.push_row(vec![
                Text::plain(location(ds)),
                Text::plain(format!("0x{:x}", ds.decoded_at)),
                Text::value(sanitizer.sanitize(&ds.string, false)),
            ])?;
        }
        layout.grid(&grid);
        layout.blank();
    }

    tracing::debug!(
        count = strings.len(),
        routines = groups.len(),
        "rendered decoded strings"
    );
    Ok(())
}
