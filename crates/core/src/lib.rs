//! Normalization for text produced by AI generators and word processors.
//!
//! A single pure function applies a fixed, ordered table of find/replace
//! steps: invisible and bidi control marks are removed, smart quotes and
//! dashes straightened, non-breaking spaces and trailing whitespace handled,
//! and spacing around punctuation tidied. Each rule group is switched by one
//! field of [`CleanOptions`].
//!
//! ```ignore
//! use textscrub::{CleanOptions, clean_ai_text};
//!
//! let result = clean_ai_text("“Hi”\u{A0}there…", &CleanOptions::default());
//! assert_eq!(result.text, "\"Hi\" there...");
//! ```

mod options;
mod patterns;
mod pipeline;
mod rules;
mod types;

pub use options::{CleanOptions, PartialCleanOptions};
pub use pipeline::{clean_ai_text, clean_ai_text_report, clean_ai_text_with};
pub use rules::{PIPELINE, RuleGroup, Step};
pub use types::{CleanReport, CleanResult};
