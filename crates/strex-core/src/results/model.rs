use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Top-level results document produced by the extraction pipeline.
///
/// The renderer only ever borrows this value; it is never constructed
/// or mutated during rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultDocument {
    pub metadata: Metadata,
    pub analysis: Analysis,
    pub strings: Strings,
}

/// Run metadata for the analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub file_path: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub imagebase: u64,
    #[serde(default)]
    pub min_length: u32,
    #[serde(default)]
    pub runtime: Runtime,
    /// Identified language tag; empty when identification did not run.
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub language_version: String,
    /// Language forced by the user, overriding identification.
    #[serde(default)]
    pub language_selected: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            version: String::new(),
            imagebase: 0,
            min_length: 4,
            runtime: Runtime::default(),
            language: String::new(),
            language_version: String::new(),
            language_selected: String::new(),
        }
    }
}

/// Per-phase timings, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runtime {
    #[serde(default = "epoch", with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default)]
    pub total: f64,
    /// Time spent in the disassembly/emulation engine. Zero means it never ran.
    #[serde(default)]
    pub vivisect: f64,
    #[serde(default)]
    pub find_features: f64,
    #[serde(default)]
    pub static_strings: f64,
    #[serde(default)]
    pub language_strings: f64,
    #[serde(default)]
    pub stack_strings: f64,
    #[serde(default)]
    pub decoded_strings: f64,
    #[serde(default)]
    pub tight_strings: f64,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            start_date: epoch(),
            total: 0.0,
            vivisect: 0.0,
            find_features: 0.0,
            static_strings: 0.0,
            language_strings: 0.0,
            stack_strings: 0.0,
            decoded_strings: 0.0,
            tight_strings: 0.0,
        }
    }
}

fn epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

fn enabled() -> bool {
    true
}

/// Which extraction techniques ran, plus function analysis counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default = "enabled")]
    pub enable_static_strings: bool,
    #[serde(default = "enabled")]
    pub enable_stack_strings: bool,
    #[serde(default = "enabled")]
    pub enable_tight_strings: bool,
    #[serde(default = "enabled")]
    pub enable_decoded_strings: bool,
    /// Older documents predate this flag; the language section then
    /// depends only on the identified language.
    #[serde(default = "enabled")]
    pub enable_language_strings: bool,
    #[serde(default)]
    pub functions: Functions,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            enable_static_strings: true,
            enable_stack_strings: true,
            enable_tight_strings: true,
            enable_decoded_strings: true,
            enable_language_strings: true,
            functions: Functions::default(),
        }
    }
}

/// Function analysis counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Functions {
    #[serde(default)]
    pub discovered: u64,
    #[serde(default)]
    pub library: u64,
    #[serde(default)]
    pub analyzed_stack_strings: u64,
    #[serde(default)]
    pub analyzed_tight_strings: u64,
    #[serde(default)]
    pub analyzed_decoded_strings: u64,
    /// Candidate decoding routines keyed by function address.
    /// JSON object keys carry the address in decimal.
    #[serde(default)]
    pub decoding_function_scores: BTreeMap<u64, DecodingFunctionScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingFunctionScore {
    pub score: f64,
    pub xrefs_to: u64,
}

/// Extracted strings, one sequence per technique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Strings {
    #[serde(default)]
    pub stack_strings: Vec<StackString>,
    #[serde(default)]
    pub tight_strings: Vec<TightString>,
    #[serde(default)]
    pub decoded_strings: Vec<DecodedString>,
    #[serde(default)]
    pub static_strings: Vec<StaticString>,
    #[serde(default)]
    pub language_strings: Vec<LanguageString>,
    #[serde(default)]
    pub language_strings_missed: Vec<LanguageString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringEncoding {
    #[serde(rename = "ASCII")]
    Ascii,
    #[serde(rename = "UTF-16LE")]
    Utf16Le,
}

impl StringEncoding {
    pub fn label(self) -> &'static str {
        match self {
            StringEncoding::Ascii => "ASCII",
            StringEncoding::Utf16Le => "UTF-16LE",
        }
    }
}

/// String found by scanning the file bytes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticString {
    pub string: String,
    pub offset: u64,
    pub encoding: StringEncoding,
}

/// String recovered from a Go or Rust runtime string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageString {
    pub string: String,
    pub offset: u64,
}

/// String reconstructed from stack writes during emulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackString {
    /// Address of the function that built the string.
    pub function: u64,
    pub string: String,
    /// Program counter when the string was captured.
    pub program_counter: u64,
    #[serde(default)]
    pub stack_pointer: u64,
    #[serde(default)]
    pub original_stack_pointer: u64,
    #[serde(default)]
    pub offset: u64,
    pub frame_offset: u64,
}

/// Tight strings share the stack string layout.
pub type TightString = StackString;

/// Where a decoded string was found in emulator memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    Stack,
    Global,
    Heap,
}

/// String recovered by emulating a decoding routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedString {
    #[serde(default)]
    pub address: Option<u64>,
    pub address_type: AddressType,
    pub string: String,
    /// Call site of the decoding routine.
    pub decoded_at: u64,
    pub decoding_routine: u64,
}
