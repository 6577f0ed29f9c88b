//! Filesystem loaders for candidate sources.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use kigo_config::Config;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::store::{CandidateStore, SourceKind};

/// Errors from reading candidate source material.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The list file could not be opened or read.
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Reads an ordered word list from a delimited text file.
///
/// Each record contributes its first field (text up to the first comma),
/// trimmed, with one level of surrounding double quotes removed. Blank
/// records and blank first fields are skipped.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, LoadError> {
	let io_err = |source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	};
	let file = File::open(path).map_err(io_err)?;
	let reader = BufReader::new(file);

	let mut words = Vec::new();
	for line in reader.lines() {
		let line = line.map_err(io_err)?;
		let field = line.split(',').next().unwrap_or("").trim();
		let field = field
			.strip_prefix('"')
			.and_then(|f| f.strip_suffix('"'))
			.unwrap_or(field);
		if field.is_empty() {
			continue;
		}
		words.push(field.to_string());
	}

	tracing::info!(count = words.len(), path = %path.display(), "sources.list.loaded");
	Ok(words)
}

/// Result of a candidate directory scan.
#[derive(Debug, Default)]
pub struct DirScan {
	/// Root-relative, slash-normalized, extension-stripped file paths, in
	/// walk order (sorted by file name).
	pub files: Vec<String>,
	/// Root-relative directory paths seen during the walk.
	pub dirs: FxHashSet<String>,
}

/// Recursively enumerates `root` for files with the given extension.
///
/// Hidden entries are skipped; walk errors (unreadable subtrees) are logged
/// and skipped rather than propagated.
pub fn scan_dir(root: &Path, extension: &str) -> DirScan {
	let wanted_ext = extension.trim_start_matches('.');
	let mut scan = DirScan::default();

	let walk = WalkBuilder::new(root)
		.standard_filters(false)
		.hidden(true)
		.follow_links(false)
		.sort_by_file_name(|a, b| a.cmp(b))
		.build();

	for entry in walk {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				tracing::debug!(error = %err, "sources.scan.skipped");
				continue;
			}
		};
		let path = entry.path();
		let Ok(relative) = path.strip_prefix(root) else {
			continue;
		};
		if relative.as_os_str().is_empty() {
			continue;
		}
		let Some(file_type) = entry.file_type() else {
			continue;
		};

		let display = relative.to_string_lossy().replace('\\', "/");
		if file_type.is_dir() {
			scan.dirs.insert(display);
		} else if file_type.is_file() {
			let ext_matches = relative
				.extension()
				.and_then(|ext| ext.to_str())
				.is_some_and(|ext| ext.eq_ignore_ascii_case(wanted_ext));
			if !ext_matches {
				continue;
			}
			let stem = &display[..display.len() - wanted_ext.len() - 1];
			if !stem.is_empty() {
				scan.files.push(stem.to_string());
			}
		}
	}

	scan
}

/// Builds the tag store, degrading to empty when the list is unavailable.
pub fn tag_store(config: &Config) -> CandidateStore {
	let Some(path) = config.tag_file.as_deref() else {
		return CandidateStore::empty(SourceKind::Tag);
	};
	match load_word_list(path) {
		Ok(words) => CandidateStore::new(SourceKind::Tag, words),
		Err(err) => {
			tracing::warn!(error = %err, "sources.tags.unavailable");
			CandidateStore::empty(SourceKind::Tag)
		}
	}
}

/// Builds the wildcard store: files and directories under the configured root.
///
/// Directory candidates come after the files, sorted, and carry the directory
/// mark the formatter turns into a trailing `/*`.
pub fn wildcard_store(config: &Config) -> CandidateStore {
	let Some(root) = config.wildcard.dir.as_deref() else {
		return CandidateStore::empty(SourceKind::Wildcard);
	};
	if !root.is_dir() {
		tracing::warn!(root = %root.display(), "sources.wildcards.unavailable");
		return CandidateStore::empty(SourceKind::Wildcard);
	}

	let scan = scan_dir(root, &config.wildcard.extension);
	tracing::info!(
		files = scan.files.len(),
		dirs = scan.dirs.len(),
		root = %root.display(),
		"sources.wildcards.loaded"
	);

	let mut dirs: Vec<&String> = scan.dirs.iter().collect();
	dirs.sort();
	let entries = scan
		.files
		.iter()
		.map(|file| (file.clone(), false))
		.chain(dirs.into_iter().map(|dir| (dir.clone(), true)));
	CandidateStore::from_entries(SourceKind::Wildcard, entries)
}

/// Builds the LoRA store from model files under the configured root.
pub fn lora_store(config: &Config) -> CandidateStore {
	let Some(root) = config.lora.dir.as_deref() else {
		return CandidateStore::empty(SourceKind::Lora);
	};
	if !root.is_dir() {
		tracing::warn!(root = %root.display(), "sources.loras.unavailable");
		return CandidateStore::empty(SourceKind::Lora);
	}

	let scan = scan_dir(root, &config.lora.extension);
	tracing::info!(files = scan.files.len(), root = %root.display(), "sources.loras.loaded");
	CandidateStore::new(SourceKind::Lora, scan.files)
}

#[cfg(test)]
mod tests;
