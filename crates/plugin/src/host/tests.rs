use super::*;
use crate::scratch::ScratchHost;

#[test]
fn subscriptions_replace_is_wholesale() {
	let mut subs = Subscriptions::typing();
	assert!(subs.contains(EventKind::TokenTyped));
	assert!(subs.contains(EventKind::SuggestionAccepted));

	subs.replace(Subscriptions::none());
	assert!(subs.is_empty());
	assert!(!subs.contains(EventKind::TokenTyped));

	// Replacing twice with the typing set never accumulates duplicates.
	subs.replace(Subscriptions::typing());
	subs.replace(Subscriptions::typing());
	assert_eq!(subs, Subscriptions::typing());
}

#[test]
fn default_current_word_reads_prior_chars_only() {
	let mut host = ScratchHost::new("prompt.txt", "hello flat chest");
	host.set_cursor(10);
	assert_eq!(host.current_word(10, true), "flat");
	assert_eq!(host.current_word(8, true), "fl");
	assert_eq!(host.current_word(8, false), "flat");
}

#[test]
fn default_word_bounds_cover_the_full_word() {
	let host = ScratchHost::new("prompt.txt", "hello flat chest");
	assert_eq!(host.word_bounds(8), (6, 10));
	// A position just past a word still belongs to it.
	assert_eq!(host.word_bounds(5), (0, 5));
}

#[test]
fn word_queries_stay_within_the_line() {
	let host = ScratchHost::new("prompt.txt", "one\ntwo\nthree");
	assert_eq!(host.word_bounds(5), (4, 7));
	assert_eq!(host.current_word(6, true), "tw");
}
