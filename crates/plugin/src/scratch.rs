//! In-memory host for tests and examples.

use ropey::Rope;

use crate::host::HostEditor;

/// A [`HostEditor`] backed by a rope, with a settable cursor/selection and a
/// record of the last popup shown.
///
/// Single-threaded plain state, like the host event model: one event is fully
/// processed before the next arrives.
#[derive(Debug, Clone)]
pub struct ScratchHost {
	text: Rope,
	cursor: usize,
	selection: (usize, usize),
	name: String,
	/// Last popup shown: anchor offset and candidate texts.
	pub last_popup: Option<(usize, Vec<String>)>,
}

impl ScratchHost {
	pub fn new(name: &str, text: &str) -> Self {
		Self {
			text: Rope::from_str(text),
			cursor: 0,
			selection: (0, 0),
			name: name.to_string(),
			last_popup: None,
		}
	}

	/// Moves the cursor, collapsing any selection.
	pub fn set_cursor(&mut self, pos: usize) {
		let pos = pos.min(self.text.len_chars());
		self.cursor = pos;
		self.selection = (pos, pos);
	}

	/// Selects `start..end` and puts the cursor at the selection end.
	pub fn select(&mut self, start: usize, end: usize) {
		let len = self.text.len_chars();
		self.selection = (start.min(len), end.min(len));
		self.cursor = self.selection.1;
	}

	/// Inserts text at the cursor, as typing (or a popup insertion) would.
	pub fn type_str(&mut self, s: &str) {
		self.text.insert(self.cursor, s);
		self.cursor += s.chars().count();
		self.selection = (self.cursor, self.cursor);
	}

	/// Switches the host to a different buffer.
	pub fn open(&mut self, name: &str, text: &str) {
		self.name = name.to_string();
		self.text = Rope::from_str(text);
		self.set_cursor(0);
		self.last_popup = None;
	}

	/// Full buffer contents.
	pub fn text(&self) -> String {
		self.text.to_string()
	}
}

impl HostEditor for ScratchHost {
	fn cursor(&self) -> usize {
		self.cursor
	}

	fn move_cursor_to(&mut self, pos: usize) {
		self.set_cursor(pos);
	}

	fn selection(&self) -> (usize, usize) {
		self.selection
	}

	fn selected_text(&self) -> String {
		let (start, end) = self.selection;
		self.text.slice(start..end).to_string()
	}

	fn line_bounds(&self, pos: usize) -> (usize, usize) {
		let pos = pos.min(self.text.len_chars());
		let line_idx = self.text.char_to_line(pos);
		let start = self.text.line_to_char(line_idx);
		let line = self.text.line(line_idx);
		let mut len = line.len_chars();
		// line() includes the break; the bounds exclude it.
		while len > 0 {
			let last = line.char(len - 1);
			if last == '\n' || last == '\r' {
				len -= 1;
			} else {
				break;
			}
		}
		(start, start + len)
	}

	fn text_range(&self, start: usize, end: usize) -> String {
		self.text.slice(start..end).to_string()
	}

	fn replace_range(&mut self, start: usize, end: usize, text: &str) {
		self.text.remove(start..end);
		self.text.insert(start, text);
	}

	fn show_suggestions(&mut self, typed_len: usize, items: &[String]) {
		self.last_popup = Some((typed_len, items.to_vec()));
	}

	fn buffer_name(&self) -> String {
		self.name.clone()
	}
}

#[cfg(test)]
mod tests;
