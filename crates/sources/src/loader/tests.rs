use std::fs;
use std::path::Path;

use kigo_config::Config;

use super::*;

fn write(path: &Path, contents: &str) {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(path, contents).unwrap();
}

#[test]
fn word_list_takes_first_field_and_skips_blanks() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tags.csv");
	write(
		&path,
		"flat_chest,0,12345\n\n,orphan field\nsmile,1\n  spaced  ,9\n\"quoted tag\",3\n",
	);

	let words = load_word_list(&path).unwrap();
	assert_eq!(words, ["flat_chest", "smile", "spaced", "quoted tag"]);
}

#[test]
fn word_list_keeps_duplicates_in_order() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tags.csv");
	write(&path, "cat\ndog\ncat\n");

	let words = load_word_list(&path).unwrap();
	assert_eq!(words, ["cat", "dog", "cat"]);
}

#[test]
fn word_list_missing_file_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = load_word_list(&dir.path().join("absent.csv")).unwrap_err();
	assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn scan_collects_relative_slash_paths_and_dirs() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path();
	write(&root.join("colors.txt"), "");
	write(&root.join("poses/standing.txt"), "");
	write(&root.join("poses/sitting.txt"), "");
	write(&root.join("poses/notes.md"), "");

	let scan = scan_dir(root, ".txt");
	assert_eq!(scan.files, ["colors", "poses/sitting", "poses/standing"]);
	assert!(scan.dirs.contains("poses"));
	assert_eq!(scan.dirs.len(), 1);
}

#[test]
fn scan_strips_only_the_configured_extension() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path();
	write(&root.join("chars/v1.0.safetensors"), "");
	write(&root.join("chars/readme.txt"), "");

	let scan = scan_dir(root, ".safetensors");
	assert_eq!(scan.files, ["chars/v1.0"]);
}

#[test]
fn tag_store_degrades_to_empty_when_unconfigured_or_missing() {
	let config = Config::default();
	assert!(tag_store(&config).is_empty());

	let dir = tempfile::tempdir().unwrap();
	let config = Config {
		tag_file: Some(dir.path().join("absent.csv")),
		..Config::default()
	};
	assert!(tag_store(&config).is_empty());
}

#[test]
fn wildcard_store_marks_directories() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path();
	write(&root.join("poses/standing.txt"), "");

	let config = Config {
		wildcard: kigo_config::WildcardConfig {
			dir: Some(root.to_path_buf()),
			..Default::default()
		},
		..Config::default()
	};
	let store = wildcard_store(&config);
	let entries: Vec<(&str, bool)> = store.iter().map(|c| (c.text.as_str(), c.is_dir)).collect();
	assert_eq!(entries, [("poses/standing", false), ("poses", true)]);
}

#[test]
fn lora_store_lists_model_files() {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path();
	write(&root.join("characters/foo.safetensors"), "");
	write(&root.join("style.safetensors"), "");

	let config = Config {
		lora: kigo_config::LoraConfig {
			dir: Some(root.to_path_buf()),
			..Default::default()
		},
		..Config::default()
	};
	let store = lora_store(&config);
	let texts: Vec<&str> = store.iter().map(|c| c.text.as_str()).collect();
	assert_eq!(texts, ["characters/foo", "style"]);
}
