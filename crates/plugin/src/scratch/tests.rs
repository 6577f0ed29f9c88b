use super::*;

#[test]
fn typing_advances_the_cursor() {
	let mut host = ScratchHost::new("prompt.txt", "");
	host.type_str("fla");
	assert_eq!(host.text(), "fla");
	assert_eq!(host.cursor(), 3);
}

#[test]
fn replace_range_rewrites_a_span() {
	let mut host = ScratchHost::new("prompt.txt", "a cat b");
	host.replace_range(2, 5, "(cat:1.1)");
	assert_eq!(host.text(), "a (cat:1.1) b");
}

#[test]
fn line_bounds_exclude_the_break() {
	let host = ScratchHost::new("prompt.txt", "one\ntwo\nthree");
	assert_eq!(host.line_bounds(0), (0, 3));
	assert_eq!(host.line_bounds(5), (4, 7));
	assert_eq!(host.line_bounds(9), (8, 13));
}

#[test]
fn line_bounds_handle_crlf() {
	let host = ScratchHost::new("prompt.txt", "one\r\ntwo");
	assert_eq!(host.line_bounds(1), (0, 3));
	assert_eq!(host.line_bounds(6), (5, 8));
}

#[test]
fn selection_tracks_text() {
	let mut host = ScratchHost::new("prompt.txt", "flat chest, smile");
	host.select(0, 10);
	assert_eq!(host.selected_text(), "flat chest");
	assert_eq!(host.cursor(), 10);

	host.set_cursor(3);
	assert_eq!(host.selection(), (3, 3));
	assert_eq!(host.selected_text(), "");
}
