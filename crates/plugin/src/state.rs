//! Plugin lifetime and event handling.
//!
//! A [`PluginState`] is the whole of the plugin: construction is activation,
//! [`PluginState::deactivate`] (or drop) is teardown. There is no global
//! flag; the host-integration layer owns the value and forwards events to it.

use kigo_config::Config;
use kigo_engine::format::{format_insertion, replacement_start};
use kigo_engine::matching::collect_matches;
use kigo_engine::query::{QueryKind, classify};
use kigo_engine::weight::{self, Direction};
use kigo_sources::{CandidateStore, lora_store, tag_store, wildcard_store};
use thiserror::Error;

use crate::host::{EventKind, HostEditor, Subscriptions};

/// Errors from plugin activation.
#[derive(Debug, Error)]
pub enum ActivateError {
	/// Every candidate source loaded empty; there is nothing to suggest.
	#[error("no candidate sources available")]
	NoSources,
}

/// Popup bookkeeping between showing suggestions and the accept event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPopup {
	/// Chars the user had typed when the popup was shown.
	typed_len: usize,
	/// Source the shown suggestions came from.
	kind: QueryKind,
}

/// Live plugin state.
#[derive(Debug)]
pub struct PluginState {
	config: Config,
	tags: CandidateStore,
	wildcards: CandidateStore,
	loras: CandidateStore,
	subscriptions: Subscriptions,
	pending: Option<PendingPopup>,
}

impl PluginState {
	/// Loads all candidate sources and evaluates the currently-active buffer.
	///
	/// Individual sources degrade to empty when missing; activation fails
	/// only when every source is empty.
	pub fn activate<H: HostEditor>(host: &mut H, config: Config) -> Result<Self, ActivateError> {
		let tags = tag_store(&config);
		let wildcards = wildcard_store(&config);
		let loras = lora_store(&config);
		Self::from_stores(host, config, tags, wildcards, loras)
	}

	/// Builds a state from already-loaded stores.
	///
	/// Host layers that manage their own candidate loading can use this
	/// instead of [`PluginState::activate`].
	pub fn from_stores<H: HostEditor>(
		host: &mut H,
		config: Config,
		tags: CandidateStore,
		wildcards: CandidateStore,
		loras: CandidateStore,
	) -> Result<Self, ActivateError> {
		if tags.is_empty() && wildcards.is_empty() && loras.is_empty() {
			return Err(ActivateError::NoSources);
		}
		tracing::info!(
			tags = tags.len(),
			wildcards = wildcards.len(),
			loras = loras.len(),
			"plugin.activated"
		);

		let mut state = Self {
			config,
			tags,
			wildcards,
			loras,
			subscriptions: Subscriptions::none(),
			pending: None,
		};
		state.buffer_switched(host);
		Ok(state)
	}

	/// Replaces every candidate store from its configured source.
	pub fn reload_sources(&mut self) {
		self.tags = tag_store(&self.config);
		self.wildcards = wildcard_store(&self.config);
		self.loras = lora_store(&self.config);
		tracing::info!(
			tags = self.tags.len(),
			wildcards = self.wildcards.len(),
			loras = self.loras.len(),
			"plugin.sources.reloaded"
		);
	}

	/// Explicit teardown: drops all subscriptions.
	pub fn deactivate(&mut self) {
		self.subscriptions.replace(Subscriptions::none());
		self.pending = None;
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Whether the typing handlers are installed for the current buffer.
	pub fn is_enabled(&self) -> bool {
		self.subscriptions.contains(EventKind::TokenTyped)
	}

	/// Handles a buffer switch.
	///
	/// Prior subscriptions are dropped first, then the typing set is
	/// installed when the new buffer's name matches the configured suffix,
	/// so a redelivered switch event can never double-register.
	pub fn buffer_switched<H: HostEditor>(&mut self, host: &mut H) {
		self.subscriptions.replace(Subscriptions::none());
		self.pending = None;

		let name = host.buffer_name();
		if name.ends_with(&self.config.target_suffix) {
			self.subscriptions.replace(Subscriptions::typing());
			tracing::info!(file = %name, "plugin.enabled");
		} else {
			tracing::debug!(file = %name, "plugin.disabled");
		}
	}

	/// Handles a typed character: classifies the token, matches, and shows
	/// the popup when there is anything to show.
	pub fn token_typed<H: HostEditor>(&mut self, host: &mut H) {
		if !self.subscriptions.contains(EventKind::TokenTyped) {
			return;
		}

		let pos = host.cursor();
		let raw = host.current_word(pos, true);
		if raw.chars().count() < self.config.min_chars {
			self.pending = None;
			return;
		}

		let query = classify(&raw, !self.wildcards.is_empty(), !self.loras.is_empty());
		let store = self.store_for(query.kind);
		let matches = collect_matches(
			&query.search,
			store,
			self.config.match_mode,
			self.config.max_suggestions,
		);
		if matches.is_empty() {
			self.pending = None;
			return;
		}

		let items: Vec<String> = matches.iter().map(|c| c.text.clone()).collect();
		self.pending = Some(PendingPopup {
			typed_len: query.raw_len,
			kind: query.kind,
		});
		host.show_suggestions(query.raw_len, &items);
	}

	/// Handles an accepted suggestion: computes the replacement span from the
	/// pending popup state and applies the formatted insertion.
	pub fn suggestion_accepted<H: HostEditor>(&mut self, host: &mut H, selected: &str) {
		if !self.subscriptions.contains(EventKind::SuggestionAccepted) {
			return;
		}
		// An accept without a shown popup (redelivered event) is ignored.
		let Some(pending) = self.pending.take() else {
			return;
		};
		let store = self.store_for(pending.kind);
		let Some(candidate) = store.iter().find(|c| c.text == selected) else {
			return;
		};

		let accept_pos = host.cursor();
		let inserted_len = selected.chars().count();
		let start = replacement_start(accept_pos, pending.typed_len, inserted_len);
		let (_, line_end) = host.line_bounds(accept_pos);
		let lookahead = host.text_range(accept_pos, line_end);

		let formatted = format_insertion(candidate, pending.kind, &self.config, &lookahead);
		let end = accept_pos + formatted.consumed_after;
		host.replace_range(start, end, &formatted.text);
		host.move_cursor_to(start + formatted.text.chars().count());
		tracing::debug!(selected, "plugin.accepted");
	}

	/// Handles a weight increment/decrement command.
	///
	/// The target is the selection when one exists, else the word under the
	/// cursor; an empty target or unparseable weight leaves the buffer
	/// untouched.
	pub fn adjust_weight<H: HostEditor>(&mut self, host: &mut H, direction: Direction) {
		let cursor = host.cursor();
		let (sel_start, sel_end) = host.selection();
		let (target_start, target_end, target_text) = if sel_start == sel_end {
			let (start, end) = host.word_bounds(cursor);
			(start, end, host.current_word(cursor, false))
		} else {
			(sel_start, sel_end, host.selected_text())
		};
		if target_start == target_end {
			return;
		}

		let (line_start, line_end) = host.line_bounds(cursor);
		let line = host.text_range(line_start, line_end);
		let Some(edit) = weight::adjust_weight(
			&line,
			line_start,
			target_start,
			target_end,
			&target_text,
			direction,
			self.config.weight_step,
		) else {
			return;
		};

		host.replace_range(edit.start, edit.end, &edit.text);
		host.move_cursor_to(cursor + edit.cursor_offset);
	}

	fn store_for(&self, kind: QueryKind) -> &CandidateStore {
		match kind {
			QueryKind::Tag => &self.tags,
			QueryKind::Wildcard => &self.wildcards,
			QueryKind::Lora => &self.loras,
		}
	}
}
