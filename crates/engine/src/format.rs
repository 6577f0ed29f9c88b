//! Replacement formatting for accepted suggestions.
//!
//! Follows the pattern where the engine computes both where the replacement
//! begins and the exact text to insert, and the caller applies the single
//! resulting edit.

use kigo_config::Config;
use kigo_sources::Candidate;

use crate::query::QueryKind;

/// A formatted insertion ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
	/// Final insertion text, separator included when applicable.
	pub text: String,
	/// Chars of buffer lookahead (trailing spaces) the replacement consumes
	/// in addition to the token span.
	pub consumed_after: usize,
}

/// Computes where a replacement begins.
///
/// The popup is always opened with a zero-length pre-filter, so the span
/// covers both the typed token and the candidate text the popup inserted.
/// All lengths are char counts.
pub fn replacement_start(accept_pos: usize, typed_len: usize, inserted_len: usize) -> usize {
	accept_pos.saturating_sub(typed_len + inserted_len)
}

/// Formats the insertion text for an accepted candidate.
///
/// `lookahead` is the buffer text immediately after the accept position up to
/// the end of the line; it drives the trim and separator-suppression
/// decisions. The resulting cursor position is the replacement start plus the
/// char length of [`Formatted::text`].
pub fn format_insertion(
	candidate: &Candidate,
	kind: QueryKind,
	config: &Config,
	lookahead: &str,
) -> Formatted {
	let mut text = match kind {
		QueryKind::Tag => format_tag(&candidate.text, config),
		QueryKind::Wildcard => {
			if candidate.is_dir {
				format!("__{}/*__", candidate.text)
			} else {
				format!("__{}__", candidate.text)
			}
		}
		QueryKind::Lora => {
			let name = candidate.text.rsplit('/').next().unwrap_or(&candidate.text);
			format!("<lora:{}:{}>", name, config.lora.default_strength)
		}
	};

	let consumed_after = if config.trim_spaces {
		lookahead.chars().take_while(|&c| c == ' ').count()
	} else {
		0
	};

	let append = match kind {
		QueryKind::Tag => true,
		QueryKind::Wildcard => config.wildcard.append_separator,
		QueryKind::Lora => config.lora.append_separator,
	};
	// Consumed spaces are ASCII, so the char count doubles as a byte offset.
	let rest = &lookahead[consumed_after..];
	if append && !rest.starts_with(&config.separator) {
		text.push_str(&config.separator);
	}

	Formatted { text, consumed_after }
}

fn format_tag(tag: &str, config: &Config) -> String {
	let mut out = String::with_capacity(tag.len() + 2);
	for c in tag.chars() {
		let c = if config.underscore_to_space && c == '_' { ' ' } else { c };
		if config.escape_chars.contains(c) {
			out.push('\\');
		}
		out.push(c);
	}
	out
}
