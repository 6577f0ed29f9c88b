//! Query classification.
//!
//! The typed token's prefix decides which candidate source it addresses. The
//! decision is made once, here, and carried as an explicit [`QueryKind`];
//! nothing downstream re-checks string prefixes.

/// Which candidate source a typed token addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
	Tag,
	Wildcard,
	Lora,
}

/// A classified query derived from the raw typed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	pub kind: QueryKind,
	/// Char length of the raw on-screen token (popup anchor width).
	pub raw_len: usize,
	/// Prefix-stripped, case-folded text to match with.
	pub search: String,
}

const LORA_PREFIX: &str = "____";
const WILDCARD_PREFIX: &str = "__";

/// Classifies a raw token by its source prefix.
///
/// A prefix whose source is not configured falls through to the next check:
/// `____foo` with no LoRA source behaves as a tag query on the literal token
/// (or, with wildcards configured, as a wildcard query on `__foo`).
pub fn classify(raw: &str, have_wildcard: bool, have_lora: bool) -> Query {
	let raw_len = raw.chars().count();

	if have_lora {
		if let Some(rest) = raw.strip_prefix(LORA_PREFIX) {
			return Query {
				kind: QueryKind::Lora,
				raw_len,
				search: rest.to_lowercase(),
			};
		}
	}
	if have_wildcard {
		if let Some(rest) = raw.strip_prefix(WILDCARD_PREFIX) {
			return Query {
				kind: QueryKind::Wildcard,
				raw_len,
				search: rest.to_lowercase(),
			};
		}
	}
	Query {
		kind: QueryKind::Tag,
		raw_len,
		search: raw.to_lowercase(),
	}
}
