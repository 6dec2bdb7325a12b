//! Snipkit - a tab-triggered snippet expansion engine for code editors.
//!
//! Snipkit stores named snippets scoped to file-type patterns and expands a
//! trigger word into its replacement text when the host editor reports an
//! expansion-key press. The host supplies the buffer through the
//! [`EditorBuffer`](editor::EditorBuffer) contract; snippet definitions live
//! in a config file owned by [`ConfigStore`](store::ConfigStore).

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

// Re-export
pub use config::{get_config_dir, get_snippets_file_path};
pub use editor::{EditorBuffer, ScratchBuffer};
pub use engine::{expand, extract_word, find_snippet, match_file_type, on_expansion_key};
pub use error::{Result, SnipkitError};
pub use models::SnippetRecord;
pub use store::{group_by_file_types, load_records, snapshot, ConfigStore};
