//! Languages whose runtime string tables get a dedicated report section.

/// Compiled languages with language-aware string extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringLanguage {
    Go,
    Rust,
}

impl StringLanguage {
    /// Match the language tag recorded in the results metadata.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "go" => Some(StringLanguage::Go),
            "rust" => Some(StringLanguage::Rust),
            _ => None,
        }
    }

    /// Uppercase label used in section headings.
    pub fn label(self) -> &'static str {
        match self {
            StringLanguage::Go => "GO",
            StringLanguage::Rust => "RUST",
        }
    }
}
