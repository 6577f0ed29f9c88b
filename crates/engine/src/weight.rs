//! Inline `(word:number)` weight adjustment.
//!
//! Stateless: every invocation re-derives the annotation from the live line
//! text. Only flat, single-level annotations are handled; nested parens are
//! out of scope.

use std::sync::LazyLock;

use regex::Regex;

/// Direction of a weight adjustment command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Increase,
	Decrease,
}

/// A computed weight edit.
///
/// `start`/`end` are absolute char offsets into the buffer, derived from the
/// line the cursor is on.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEdit {
	pub start: usize,
	pub end: usize,
	pub text: String,
	/// How far the cursor shifts: +1 when a fresh annotation is synthesized
	/// (the inserted opening paren), 0 when one is rewritten in place.
	pub cursor_offset: usize,
}

static ANNOTATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\((.+):(-?\d+\.?\d*)\)").expect("annotation pattern is valid"));

/// Adjusts the weight annotation enclosing the target span, or synthesizes
/// a fresh one around the target.
///
/// `line` is the text of the cursor's line, `line_start` its absolute char
/// offset, and `target_start`/`target_end` the absolute span of the selection
/// or word under the cursor. Returns `None` when the target is empty or a
/// captured weight does not parse; nothing is ever partially applied.
pub fn adjust_weight(
	line: &str,
	line_start: usize,
	target_start: usize,
	target_end: usize,
	target_text: &str,
	direction: Direction,
	step: f64,
) -> Option<WeightEdit> {
	if target_start == target_end || target_text.is_empty() {
		return None;
	}

	let mut word = target_text;
	let mut weight = 1.0f64;
	let mut start = target_start;
	let mut end = target_end;
	let mut cursor_offset = 1;

	for caps in ANNOTATION.captures_iter(line) {
		let (Some(m), Some(w), Some(num)) = (caps.get(0), caps.get(1), caps.get(2)) else {
			continue;
		};
		let m_start = line_start + char_offset(line, m.start());
		let m_end = line_start + char_offset(line, m.end());
		if m_start <= target_start && m_end >= target_end {
			word = w.as_str();
			weight = num.as_str().parse().ok()?;
			start = m_start;
			end = m_end;
			cursor_offset = 0;
			tracing::debug!(word, weight, "weight.annotation.matched");
			break;
		}
	}

	let weight = match direction {
		Direction::Increase => weight + step,
		Direction::Decrease => weight - step,
	};

	Some(WeightEdit {
		start,
		end,
		text: format!("({word}:{weight})"),
		cursor_offset,
	})
}

/// Converts a regex byte offset into a char offset.
fn char_offset(line: &str, byte: usize) -> usize {
	line[..byte].chars().count()
}
