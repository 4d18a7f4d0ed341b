//! Layout primitives: headings, sub-headings, grids and plain lines.
//!
//! Section renderers describe *what* to show through the [`Layout`] trait
//! using toned [`Text`]; the backend decides how tones and borders are drawn.
//! [`ConsoleLayout`] is the terminal backend: `console` styles the spans,
//! `tabled` draws boxes and grids, and everything is buffered into a `String`.
//!
//! Example output of the pieces drawn here:
//!
//! ```text
//!  ─────────────────────────
//!   STREX TIGHT STRINGS (0)
//!  ─────────────────────────
//!
//! +---------------------------------+
//! | STREX STATIC STRINGS: ASCII (2) |
//! +---------------------------------+
//!
//!  Function | Function Offset | Frame Offset | String
//! ----------+-----------------+--------------+--------
//!  0x401000 | 0x401020        | 0x20         | hello
//! ```

use console::Style;
use tabled::builder::Builder;
use tabled::settings::style::{HorizontalLine, Style as TableStyle};

use crate::error::{RenderError, RenderResult};

/// Semantic styling class of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Headings and addresses called out in headings.
    Accent,
    /// Extracted string values.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

/// A run of toned spans; may contain `\n` for multi-line grid cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    spans: Vec<Span>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push(text, Tone::Plain)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new().push(text, Tone::Accent)
    }

    pub fn value(text: impl Into<String>) -> Self {
        Self::new().push(text, Tone::Value)
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, tone });
        }
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Unstyled content.
    pub fn as_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Split at `\n`, keeping each span's tone.
    pub fn lines(&self) -> Vec<Text> {
        let mut lines = vec![Text::new()];
        for span in &self.spans {
            for (i, part) in span.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Text::new());
                }
                if let Some(line) = lines.pop() {
                    lines.push(line.push(part, span.tone));
                }
            }
        }
        lines
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::plain(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::plain(s)
    }
}

/// Border drawing for grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// `+`, `-`, `|` with an outer frame.
    #[default]
    Ascii,
    /// `-`, `|` and `+` between columns only; no outer frame.
    AsciiInner,
}

/// A fixed-column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<String>,
    rows: Vec<Vec<Text>>,
    show_header: bool,
    border: BorderStyle,
}

impl Grid {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(columns: I) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            show_header: true,
            border: BorderStyle::Ascii,
        }
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Append a row; its arity must match the column schema.
    pub fn push_row(&mut self, row: Vec<Text>) -> RenderResult<()> {
        if row.len() != self.columns.len() {
            return Err(RenderError::ColumnArityMismatch {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Display width of each drawn line of the last column, top to bottom.
    /// `None` marks the rule under the header.
    fn last_column_lines(&self) -> Vec<Option<usize>> {
        let mut lines = Vec::new();
        if self.show_header {
            let name = self.columns.last().map(String::as_str).unwrap_or("");
            lines.push(Some(console::measure_text_width(name)));
            lines.push(None);
        }
        for row in &self.rows {
            let height = row.iter().map(|cell| cell.lines().len()).max().unwrap_or(1);
            let last = row.last().map(Text::lines).unwrap_or_default();
            for i in 0..height {
                let used = last
                    .get(i)
                    .map(|l| console::measure_text_width(&l.as_plain()))
                    .unwrap_or(0);
                lines.push(Some(used));
            }
        }
        lines
    }
}

/// Abstract drawing surface for the report.
pub trait Layout {
    /// Single-line heading between horizontal rules. Skipped when headers are disabled.
    fn heading(&mut self, text: &str, styled: bool);

    /// Boxed label with a trailing `(count)`. Skipped when headers are disabled.
    fn sub_heading(&mut self, label: Text, count: usize);

    fn grid(&mut self, grid: &Grid);

    fn line(&mut self, text: Text);

    fn blank(&mut self);
}

/// Terminal layout: `console` for styles, `tabled` for boxes and grids.
#[derive(Debug)]
pub struct ConsoleLayout {
    out: String,
    headers: bool,
    accent: Style,
    value: Style,
}

impl ConsoleLayout {
    pub fn new(headers: bool, colors: bool) -> Self {
        Self {
            out: String::new(),
            headers,
            accent: Style::new().cyan().force_styling(colors),
            value: Style::new().green().force_styling(colors),
        }
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn paint(&self, text: &Text) -> String {
        text.spans()
            .iter()
            .map(|span| match span.tone {
                Tone::Plain => span.text.clone(),
                Tone::Accent => self.accent.apply_to(&span.text).to_string(),
                Tone::Value => self.value.apply_to(&span.text).to_string(),
            })
            .collect()
    }

    /// Paint line by line so no style runs across a line break.
    fn paint_cell(&self, text: &Text) -> String {
        text.lines()
            .iter()
            .map(|line| self.paint(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
}

impl Layout for ConsoleLayout {
    fn heading(&mut self, text: &str, styled: bool) {
        if !self.headers {
            return;
        }
        let width = console::measure_text_width(text) + 2;
        let rule = format!(" {}", "─".repeat(width));
        let body = format!("  {text}");
        let (rule, body) = if styled {
            (
                self.accent.apply_to(rule).to_string(),
                self.accent.apply_to(body).to_string(),
            )
        } else {
            (rule, body)
        };
        self.push_line(&rule);
        self.push_line(&body);
        self.push_line(&rule);
        self.blank();
    }

    fn sub_heading(&mut self, label: Text, count: usize) {
        if !self.headers {
            return;
        }
        let label = label.push(format!(" ({count})"), Tone::Plain);

        let mut builder = Builder::default();
        builder.push_record([self.paint(&label)]);
        let mut table = builder.build();
        table.with(TableStyle::ascii());

        for line in table.to_string().lines() {
            self.push_line(line);
        }
        self.blank();
    }

    fn grid(&mut self, grid: &Grid) {
        if grid.rows.is_empty() && !grid.show_header {
            return;
        }

        let mut builder = Builder::default();
        if grid.show_header {
            builder.push_record(grid.columns.iter().cloned());
        }
        for row in &grid.rows {
            builder.push_record(row.iter().map(|cell| self.paint_cell(cell)));
        }
        let mut table = builder.build();

        match (grid.border, grid.show_header) {
            (BorderStyle::Ascii, true) => {
                table.with(
                    TableStyle::ascii()
                        .remove_horizontal()
                        .horizontals([(1, HorizontalLine::inherit(TableStyle::ascii()))]),
                );
            }
            (BorderStyle::Ascii, false) => {
                table.with(TableStyle::ascii().remove_horizontal());
            }
            (BorderStyle::AsciiInner, true) => {
                table.with(TableStyle::psql());
            }
            (BorderStyle::AsciiInner, false) => {
                table.with(TableStyle::empty().vertical('|'));
            }
        }

        let rendered = table.to_string();
        if grid.border == BorderStyle::Ascii {
            for line in rendered.lines() {
                self.push_line(line);
            }
            return;
        }

        // With no right border, the last column is padded to its width plus
        // one space. Strip exactly that padding and keep the cell intact.
        let tails = grid.last_column_lines();
        let width = tails.iter().flatten().copied().max().unwrap_or(0);
        let mut tails = tails.into_iter();
        for line in rendered.lines() {
            match tails.next().flatten() {
                Some(used) => {
                    let pad = " ".repeat(width.saturating_sub(used) + 1);
                    self.push_line(line.strip_suffix(pad.as_str()).unwrap_or(line));
                }
                None => self.push_line(line),
            }
        }
    }

    fn line(&mut self, text: Text) {
        let painted = self.paint(&text);
        self.push_line(&painted);
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x2(border: BorderStyle, header: bool) -> Grid {
        let mut grid = Grid::new(["Key", "Value"]).border(border).show_header(header);
        grid.push_row(vec!["a".into(), "one".into()]).unwrap();
        grid.push_row(vec!["bbbb".into(), "2".into()]).unwrap();
        grid
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let mut grid = Grid::new(["A", "B", "C"]);
        let err = grid.push_row(vec!["x".into()]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ColumnArityMismatch {
                expected: 3,
                found: 1
            }
        ));
        assert!(grid.is_empty());
    }

    #[test]
    fn framed_grid_with_header() {
        let mut layout = ConsoleLayout::new(true, false);
        layout.grid(&grid_2x2(BorderStyle::Ascii, true));

        assert_eq!(
            layout.into_output(),
            "+------+-------+\n\
             | Key  | Value |\n\
             +------+-------+\n\
             | a    | one   |\n\
             | bbbb | 2     |\n\
             +------+-------+\n"
        );
    }

    #[test]
    fn inner_grid_without_header() {
        let mut layout = ConsoleLayout::new(true, false);
        layout.grid(&grid_2x2(BorderStyle::AsciiInner, false));

        assert_eq!(layout.into_output(), " a    | one\n bbbb | 2\n");
    }

    #[test]
    fn inner_grid_with_header() {
        let mut layout = ConsoleLayout::new(true, false);
        layout.grid(&grid_2x2(BorderStyle::AsciiInner, true));

        assert_eq!(
            layout.into_output(),
            " Key  | Value\n\
             ------+-------\n\
             \x20a    | one\n\
             \x20bbbb | 2\n"
        );
    }

    #[test]
    fn inner_grid_keeps_whitespace_of_last_cell() {
        for header in [true, false] {
            let mut grid = Grid::new(["Key", "Value"])
                .border(BorderStyle::AsciiInner)
                .show_header(header);
            grid.push_row(vec!["a".into(), "pass ".into()]).unwrap();
            grid.push_row(vec!["b".into(), "   ".into()]).unwrap();
            grid.push_row(vec!["c".into(), "  lead".into()]).unwrap();

            let mut layout = ConsoleLayout::new(true, false);
            layout.grid(&grid);
            let out = layout.into_output();

            let lines: Vec<&str> = out.lines().collect();
            assert!(lines.iter().any(|l| l.starts_with(" a ") && l.ends_with("| pass ")));
            assert!(lines.iter().any(|l| l.starts_with(" b ") && l.ends_with("|    ")));
            assert!(lines.iter().any(|l| l.starts_with(" c ") && l.ends_with("|   lead")));
        }
    }

    #[test]
    fn empty_grid_without_header_draws_nothing() {
        let mut layout = ConsoleLayout::new(true, false);
        layout.grid(&Grid::new(["a"]).border(BorderStyle::AsciiInner).show_header(false));
        assert_eq!(layout.into_output(), "");
    }

    #[test]
    fn multi_line_cells_expand_rows() {
        let mut grid = Grid::new(["k", "v"]).show_header(false);
        grid.push_row(vec!["first\nsecond".into(), "x".into()]).unwrap();

        let mut layout = ConsoleLayout::new(true, false);
        layout.grid(&grid);

        assert_eq!(
            layout.into_output(),
            "+--------+---+\n\
             | first  | x |\n\
             | second |   |\n\
             +--------+---+\n"
        );
    }

    #[test]
    fn heading_and_sub_heading_shapes() {
        let mut layout = ConsoleLayout::new(true, false);
        layout.heading("TITLE (0)", false);
        layout.sub_heading(Text::plain("SUB"), 3);

        assert_eq!(
            layout.into_output(),
            " ───────────\n  TITLE (0)\n ───────────\n\n\
             +---------+\n| SUB (3) |\n+---------+\n\n"
        );
    }

    #[test]
    fn headings_vanish_when_disabled() {
        let mut layout = ConsoleLayout::new(false, false);
        layout.heading("TITLE", true);
        layout.sub_heading(Text::plain("SUB"), 1);
        assert_eq!(layout.into_output(), "");
    }

    #[test]
    fn tones_are_styled_only_with_colors() {
        let text = Text::plain("0x10 ").push("hello", Tone::Value);

        let mut plain = ConsoleLayout::new(true, false);
        plain.line(text.clone());
        assert_eq!(plain.into_output(), "0x10 hello\n");

        let mut colored = ConsoleLayout::new(true, true);
        colored.line(text);
        let out = colored.into_output();
        assert!(out.contains("\x1b["));
        assert_eq!(console::strip_ansi_codes(&out), "0x10 hello\n");
    }

    #[test]
    fn styled_cells_keep_alignment() {
        let mut grid = Grid::new(["s", "n"])
            .border(BorderStyle::AsciiInner)
            .show_header(false);
        grid.push_row(vec![Text::value("ab"), "1".into()]).unwrap();
        grid.push_row(vec![Text::value("abcd"), "2".into()]).unwrap();

        let mut layout = ConsoleLayout::new(true, true);
        layout.grid(&grid);
        let out = layout.into_output();

        assert_eq!(console::strip_ansi_codes(&out), " ab   | 1\n abcd | 2\n");
    }

    #[test]
    fn text_lines_split_spans() {
        let text = Text::accent("a\nb").push("c", Tone::Value);
        let lines = text.lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_plain(), "a");
        assert_eq!(lines[1].as_plain(), "bc");
        assert_eq!(lines[1].spans()[0].tone, Tone::Accent);
        assert_eq!(lines[1].spans()[1].tone, Tone::Value);
    }
}
