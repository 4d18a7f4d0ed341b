//! Terminal-safe display of untrusted strings.
//!
//! Every string in a results document was pulled out of a binary that may
//! be hostile. Before a value reaches the report it passes through a
//! [`Sanitizer`], which rewrites anything a terminal could interpret:
//!
//! - `\n`, `\r`, `\t` become their two-character escapes
//! - other control characters (C0, DEL, C1, including ESC) become `\xNN`
//! - bidirectional overrides and isolates become `\u{NNNN}`
//! - with `is_ascii_only`, every non-ASCII character becomes `\xNN` / `\u{NNNN}`
//!
//! Backslashes pass through untouched, so sanitizing twice is a no-op.

/// Rewrites untrusted text so it can be written to a terminal verbatim.
pub trait Sanitizer {
    fn sanitize(&self, value: &str, is_ascii_only: bool) -> String;
}

/// Default sanitizer used by the report renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSanitizer;

impl Sanitizer for TerminalSanitizer {
    fn sanitize(&self, value: &str, is_ascii_only: bool) -> String {
        sanitize(value, is_ascii_only)
    }
}

/// Escape control, bidi, and (optionally) non-ASCII characters in `input`.
pub fn sanitize(input: &str, is_ascii_only: bool) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || is_bidi_control(c) => push_escaped(&mut out, c),
            c if is_ascii_only && !c.is_ascii() => push_escaped(&mut out, c),
            c => out.push(c),
        }
    }

    out
}

fn is_bidi_control(c: char) -> bool {
    matches!(
        c,
        '\u{061c}' | '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}'
    )
}

fn push_escaped(out: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xff {
        out.push_str(&format!("\\x{code:02x}"));
    } else {
        out.push_str(&format!("\\u{{{code:04x}}}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize("cmd.exe /c whoami", true), "cmd.exe /c whoami");
        assert_eq!(sanitize("héllo wörld", false), "héllo wörld");
    }

    #[test]
    fn whitespace_controls_use_short_escapes() {
        assert_eq!(sanitize("a\nb\rc\td", false), "a\\nb\\rc\\td");
    }

    #[test]
    fn escape_sequences_are_neutralized() {
        let csi = "\x1b[31mred\x1b[0m";
        let out = sanitize(csi, true);
        assert_eq!(out, "\\x1b[31mred\\x1b[0m");
        assert!(!out.contains('\x1b'));

        let osc = "\x1b]0;pwned\x07";
        assert_eq!(sanitize(osc, false), "\\x1b]0;pwned\\x07");
    }

    #[test]
    fn c1_controls_are_escaped() {
        assert_eq!(sanitize("\u{9b}2J", false), "\\x9b2J");
    }

    #[test]
    fn bidi_overrides_are_escaped() {
        assert_eq!(sanitize("abc\u{202e}fdp.exe", false), "abc\\u{202e}fdp.exe");
    }

    #[test]
    fn ascii_only_escapes_non_ascii() {
        assert_eq!(sanitize("caf\u{e9}", true), "caf\\xe9");
        assert_eq!(sanitize("\u{4e2d}", true), "\\u{4e2d}");
        assert_eq!(sanitize("caf\u{e9}", false), "caf\u{e9}");
    }

    #[test]
    fn trait_object_delegates_to_function() {
        let s: &dyn Sanitizer = &TerminalSanitizer;
        assert_eq!(s.sanitize("a\tb", true), sanitize("a\tb", true));
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in any::<String>(), ascii in any::<bool>()) {
            let once = sanitize(&input, ascii);
            prop_assert_eq!(sanitize(&once, ascii), once);
        }

        #[test]
        fn output_never_contains_controls(input in any::<String>(), ascii in any::<bool>()) {
            let out = sanitize(&input, ascii);
            prop_assert!(!out.chars().any(|c| c.is_control() || is_bidi_control(c)));
            if ascii {
                prop_assert!(out.is_ascii());
            }
        }
    }
}
