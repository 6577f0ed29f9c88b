//! Suggestion matching and text-rewrite engine.
//!
//! Pure text in, text out: nothing here touches an editor. The plugin layer
//! feeds in live buffer state and applies the edits these functions compute,
//! so every piece is testable against plain strings.

pub mod format;
pub mod matching;
pub mod query;
pub mod text;
pub mod weight;

pub use format::{Formatted, format_insertion, replacement_start};
pub use matching::collect_matches;
pub use query::{Query, QueryKind, classify};
pub use weight::{Direction, WeightEdit, adjust_weight};
