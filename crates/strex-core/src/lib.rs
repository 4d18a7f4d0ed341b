pub mod error;
pub mod language;
pub mod render;
pub mod results;
pub mod sanitize;
pub mod util;

pub use error::{RenderError, RenderResult};
pub use render::policy::{ColorMode, RenderOptions, RenderPolicy, Verbosity};
pub use render::{ReportRenderer, render};
pub use results::model::ResultDocument;
pub use results::read::{parse_results, read_results};
pub use sanitize::{Sanitizer, TerminalSanitizer};

pub const TOOL_NAME: &str = "strex";
