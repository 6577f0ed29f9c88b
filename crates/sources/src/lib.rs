//! Candidate sources.
//!
//! A [`CandidateStore`] is a plain in-memory lookup table loaded once at
//! plugin activation and replaced wholesale on reload. The loaders in this
//! crate fill stores from a word-list file (tags) or a directory tree
//! (wildcards, LoRA models); a missing or unconfigured source degrades to an
//! empty store with a logged warning rather than an error.

mod loader;
mod store;

pub use loader::{DirScan, LoadError, load_word_list, lora_store, scan_dir, tag_store, wildcard_store};
pub use store::{Candidate, CandidateStore, SourceKind};
