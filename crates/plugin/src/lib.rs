//! Host integration for the prompt-tag completion plugin.
//!
//! [`HostEditor`](host::HostEditor) is the boundary to the embedding editor;
//! [`PluginState`](state::PluginState) owns the candidate stores and handles
//! the events the host forwards. [`ScratchHost`](scratch::ScratchHost) is an
//! in-memory host for tests and examples.

pub mod host;
pub mod scratch;
pub mod state;

pub use host::{EventKind, HostEditor, Subscriptions};
pub use scratch::ScratchHost;
pub use state::{ActivateError, PluginState};
