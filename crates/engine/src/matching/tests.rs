use kigo_sources::SourceKind;

use super::*;

fn store(texts: &[&str]) -> CandidateStore {
	CandidateStore::new(SourceKind::Tag, texts.iter().map(|t| t.to_string()))
}

#[test]
fn prefix_matches_case_insensitively() {
	let store = store(&["From_Behind", "behind", "ahead", "BEHAVE"]);
	let matches = collect_matches("beh", &store, MatchMode::Prefix, 10);
	let texts: Vec<&str> = matches.iter().map(|c| c.text.as_str()).collect();
	assert_eq!(texts, ["behind", "BEHAVE"]);
}

#[test]
fn substring_matches_anywhere_in_source_order() {
	let store = store(&["From_Behind", "behind", "ahead", "left"]);
	let matches = collect_matches("behind", &store, MatchMode::Substring, 10);
	let texts: Vec<&str> = matches.iter().map(|c| c.text.as_str()).collect();
	assert_eq!(texts, ["From_Behind", "behind"]);
}

#[test]
fn cap_short_circuits_the_scan() {
	let store = store(&["aa1", "aa2", "aa3", "aa4"]);
	let matches = collect_matches("aa", &store, MatchMode::Prefix, 2);
	let texts: Vec<&str> = matches.iter().map(|c| c.text.as_str()).collect();
	assert_eq!(texts, ["aa1", "aa2"]);
}

#[test]
fn result_never_exceeds_cap() {
	let store = store(&["a", "ab", "abc", "abcd", "abcde"]);
	for cap in 0..6 {
		let matches = collect_matches("a", &store, MatchMode::Prefix, cap);
		assert!(matches.len() <= cap);
	}
}

#[test]
fn no_matches_is_an_empty_vec() {
	let store = store(&["cat", "dog"]);
	assert!(collect_matches("zzz", &store, MatchMode::Prefix, 5).is_empty());
	assert!(collect_matches("zzz", &store, MatchMode::Substring, 5).is_empty());
}

#[test]
fn empty_query_matches_everything_up_to_cap() {
	let store = store(&["cat", "dog", "bird"]);
	let matches = collect_matches("", &store, MatchMode::Prefix, 2);
	assert_eq!(matches.len(), 2);
}
