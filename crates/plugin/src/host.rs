//! Host editor boundary.
//!
//! Everything the plugin needs from the embedding editor, char-indexed. The
//! plugin owns no buffer state of its own: every handler re-reads what it
//! needs through this trait and writes back through [`HostEditor::replace_range`],
//! which keeps handlers safe against redelivered events.

use kigo_engine::text;

/// Editor operations required by the plugin.
///
/// Positions are char offsets into the buffer. `current_word` and
/// `word_bounds` have default implementations in terms of the line
/// operations; hosts with native word queries can override them.
pub trait HostEditor {
	fn cursor(&self) -> usize;
	fn move_cursor_to(&mut self, pos: usize);

	/// Selection bounds; empty (`start == end`) when nothing is selected.
	fn selection(&self) -> (usize, usize);
	fn selected_text(&self) -> String;

	/// Bounds of the line containing `pos`, excluding the line break.
	fn line_bounds(&self, pos: usize) -> (usize, usize);
	fn text_range(&self, start: usize, end: usize) -> String;
	fn replace_range(&mut self, start: usize, end: usize, text: &str);

	/// Shows the suggestion popup anchored `typed_len` chars behind the
	/// cursor, without pre-filtering by the typed text.
	fn show_suggestions(&mut self, typed_len: usize, items: &[String]);

	/// File name of the active buffer.
	fn buffer_name(&self) -> String;

	/// The word at `pos`; with `prior_only`, only characters before `pos`.
	fn current_word(&self, pos: usize, prior_only: bool) -> String {
		let (line_start, line_end) = self.line_bounds(pos);
		let line = self.text_range(line_start, line_end);
		let rel = pos - line_start;
		if prior_only {
			text::word_before(&line, rel).1
		} else {
			let (start, end) = text::word_range_at(&line, rel);
			line.chars().skip(start).take(end - start).collect()
		}
	}

	/// Full word-character span around `pos`.
	fn word_bounds(&self, pos: usize) -> (usize, usize) {
		let (line_start, line_end) = self.line_bounds(pos);
		let line = self.text_range(line_start, line_end);
		let (start, end) = text::word_range_at(&line, pos - line_start);
		(line_start + start, line_start + end)
	}
}

/// Host events the plugin subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
	TokenTyped,
	SuggestionAccepted,
	BufferSwitched,
}

/// The set of host events currently subscribed.
///
/// Replaced as a whole on every buffer switch: the previous set is dropped
/// before the new one is installed, so a redelivered activation event can
/// never double-register a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriptions {
	events: Vec<EventKind>,
}

impl Subscriptions {
	/// No subscriptions: the plugin is dormant for this buffer.
	pub fn none() -> Self {
		Self::default()
	}

	/// The typing set: token and acceptance events.
	pub fn typing() -> Self {
		Self {
			events: vec![EventKind::TokenTyped, EventKind::SuggestionAccepted],
		}
	}

	pub fn contains(&self, event: EventKind) -> bool {
		self.events.contains(&event)
	}

	/// Atomically replaces this set with `other`.
	pub fn replace(&mut self, other: Subscriptions) {
		self.events = other.events;
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}

#[cfg(test)]
mod tests;
