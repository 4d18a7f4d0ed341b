//! Report orchestration.
//!
//! Responsibilities:
//! - Resolve rendering options into a [`RenderPolicy`] before any output exists
//! - Decide which sections appear, and in what order
//! - Own the output buffer for a single render call
//!
//! Non-responsibilities:
//! - Sanitizing string values (each section does that for the records it shows)
//! - Mutating or completing the results document
//!
//! Section order: title and metadata, static, language, stack, tight, decoded.
//! Sections whose technique is disabled are skipped; included sections are
//! separated by a blank line.

pub mod decoded;
pub mod format;
pub mod layout;
pub mod meta;
pub mod policy;
pub mod strings;

use crate::TOOL_NAME;
use crate::error::RenderResult;
use crate::language::StringLanguage;
use crate::render::layout::{ConsoleLayout, Layout, Text};
use crate::render::policy::{RenderOptions, RenderPolicy};
use crate::results::model::ResultDocument;
use crate::sanitize::{Sanitizer, TerminalSanitizer};

/// Prefix a heading with the uppercase tool name.
pub(crate) fn title(text: &str) -> String {
    format!("{} {text}", TOOL_NAME.to_uppercase())
}

/// Renders results documents under a fixed policy.
#[derive(Debug, Clone)]
pub struct ReportRenderer<S = TerminalSanitizer> {
    policy: RenderPolicy,
    sanitizer: S,
}

impl ReportRenderer<TerminalSanitizer> {
    /// Fails with `InvalidColorPreference` for an unknown color preference.
    pub fn new(options: &RenderOptions) -> RenderResult<Self> {
        Self::with_sanitizer(options, TerminalSanitizer)
    }
}

impl<S: Sanitizer> ReportRenderer<S> {
    pub fn with_sanitizer(options: &RenderOptions, sanitizer: S) -> RenderResult<Self> {
        Ok(Self {
            policy: RenderPolicy::from_options(options)?,
            sanitizer,
        })
    }

    pub fn policy(&self) -> &RenderPolicy {
        &self.policy
    }

    pub fn sanitizer(&self) -> &S {
        &self.sanitizer
    }

    /// Render the full report into a string.
    pub fn render(&self, doc: &ResultDocument) -> RenderResult<String> {
        let policy = &self.policy;
        let sanitizer = &self.sanitizer;
        let analysis = &doc.analysis;
        let strings = &doc.strings;

        let mut layout = ConsoleLayout::new(policy.headers_enabled(), policy.colors_enabled());
        let mut started = false;

        if policy.headers_enabled() {
            let heading = title(&format!("RESULTS (version {})", doc.metadata.version));
            layout.line(if policy.is_verbose() {
                Text::accent(heading)
            } else {
                Text::plain(heading)
            });
            layout.blank();
            meta::render_meta(doc, &mut layout, policy, sanitizer)?;
            started = true;
        }

        if analysis.enable_static_strings {
            separate(&mut layout, &mut started);
            strings::render_static_strings(
                &strings.static_strings,
                &mut layout,
                policy,
                sanitizer,
            )?;
        }

        if let Some(language) = language_section(doc) {
            separate(&mut layout, &mut started);
            strings::render_language_strings(
                language,
                &strings.language_strings,
                &strings.language_strings_missed,
                &mut layout,
                policy,
                sanitizer,
            )?;
        }

        if analysis.enable_stack_strings {
            separate(&mut layout, &mut started);
            strings::render_stack_strings(
                "STACK",
                &strings.stack_strings,
                &mut layout,
                policy,
                sanitizer,
            )?;
        }

        if analysis.enable_tight_strings {
            separate(&mut layout, &mut started);
            strings::render_stack_strings(
                "TIGHT",
                &strings.tight_strings,
                &mut layout,
                policy,
                sanitizer,
            )?;
        }

        if analysis.enable_decoded_strings {
            separate(&mut layout, &mut started);
            decoded::render_decoded_strings(
                &strings.decoded_strings,
                &mut layout,
                policy,
                sanitizer,
            )?;
        }

        Ok(layout.into_output())
    }
}

/// Language for the language strings section, if it applies.
fn language_section(doc: &ResultDocument) -> Option<StringLanguage> {
    meta::language_strings_enabled(doc)
        .then(|| StringLanguage::from_tag(&doc.metadata.language))
        .flatten()
}

fn separate<L: Layout>(layout: &mut L, started: &mut bool) {
    if *started {
        layout.blank();
    }
    *started = true;
}

/// Render `doc` with the default sanitizer.
pub fn render(doc: &ResultDocument, options: &RenderOptions) -> RenderResult<String> {
    ReportRenderer::new(options)?.render(doc)
}
