//! Candidate matching.

use kigo_config::MatchMode;
use kigo_sources::{Candidate, CandidateStore};

/// Collects up to `cap` candidates matching `search`.
///
/// Scans in source order and stops as soon as the cap is reached; candidates
/// past that point are never inspected, so order ties beyond the cap cannot
/// surface. `search` must already be case-folded. Minimum-length gating is
/// the caller's responsibility, done before this is invoked.
pub fn collect_matches<'a>(
	search: &str,
	store: &'a CandidateStore,
	mode: MatchMode,
	cap: usize,
) -> Vec<&'a Candidate> {
	let mut matches = Vec::new();
	if cap == 0 {
		return matches;
	}

	for candidate in store.iter() {
		let hit = match mode {
			MatchMode::Prefix => candidate.folded.starts_with(search),
			MatchMode::Substring => candidate.folded.contains(search),
		};
		if hit {
			matches.push(candidate);
			if matches.len() >= cap {
				break;
			}
		}
	}
	matches
}

#[cfg(test)]
mod tests;
