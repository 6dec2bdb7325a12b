use crate::error::{Result, SnipkitError};
use crate::models::SnippetRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Load all snippet records from the given path.
///
/// A missing file is not an error and yields an empty set, as does a blank
/// file. A file that exists but cannot be parsed fails with `ConfigLoad`.
pub fn load_records(path: &Path) -> Result<Vec<SnippetRecord>> {
    if !path.exists() {
        return Ok(vec![]);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| SnipkitError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    // Handle an empty snippets file
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    serde_json::from_str(&content)
        .map_err(|e| SnipkitError::ConfigLoad(format!("{}: {}", path.display(), e)))
}

/// Serialize the given records to the path, replacing the file contents
/// entirely. Fails with `ConfigSave` if the target is not writable.
pub fn save_records(path: &Path, records: &[SnippetRecord]) -> Result<()> {
    let serialized = serde_json::to_string_pretty(records)
        .map_err(|e| SnipkitError::ConfigSave(e.to_string()))?;

    fs::write(path, serialized)
        .map_err(|e| SnipkitError::ConfigSave(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

/// Return an independent deep copy of every record.
///
/// Records are plain value types, so the copy shares no storage with the
/// source: mutating one side never affects the other. This is the unit of
/// the edit/cancel transaction.
pub fn snapshot(records: &[SnippetRecord]) -> Vec<SnippetRecord> {
    records.to_vec()
}

/// Partition records by string-equal `file_types`, preserving first-seen
/// group order and stored record order within each group.
///
/// This is a computed display projection, recomputed on demand - grouping is
/// never stored alongside the flat record list.
pub fn group_by_file_types(records: &[SnippetRecord]) -> Vec<(&str, Vec<&SnippetRecord>)> {
    let mut groups: Vec<(&str, Vec<&SnippetRecord>)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(key, _)| *key == record.file_types.as_str())
        {
            Some((_, members)) => members.push(record),
            None => groups.push((record.file_types.as_str(), vec![record])),
        }
    }

    groups
}

/// Owner of the live snippet set and its persistence path.
///
/// Editing follows a single-session transaction: `open_edit_session` hands
/// out a working snapshot, and only `commit_session` makes it the live set
/// (persisting first, swapping after). `cancel_session` discards it. A
/// second session cannot be opened while one is unresolved.
pub struct ConfigStore {
    path: PathBuf,
    records: Vec<SnippetRecord>,
    editing: bool,
}

impl ConfigStore {
    /// Load the live set from `path` (empty if the file does not exist).
    pub fn open(path: PathBuf) -> Result<Self> {
        let records = load_records(&path)?;
        Ok(Self {
            path,
            records,
            editing: false,
        })
    }

    /// Load the live set from `path`, degrading a present-but-unparseable
    /// file to an empty set so a broken config never disables expansion.
    /// The bad file is left on disk untouched; the warning goes to stderr.
    pub fn open_lenient(path: PathBuf) -> Self {
        match load_records(&path) {
            Ok(records) => Self {
                path,
                records,
                editing: false,
            },
            Err(e) => {
                eprintln!("Warning: {}; continuing with an empty snippet set", e);
                Self {
                    path,
                    records: vec![],
                    editing: false,
                }
            }
        }
    }

    /// The live snippet set, in stored order.
    pub fn records(&self) -> &[SnippetRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Begin an edit session and return the working copy.
    ///
    /// Fails with `EditSessionActive` if a previous session has not been
    /// committed or cancelled.
    pub fn open_edit_session(&mut self) -> Result<Vec<SnippetRecord>> {
        if self.editing {
            return Err(SnipkitError::EditSessionActive);
        }
        self.editing = true;
        Ok(snapshot(&self.records))
    }

    /// Persist the working set and swap it in as the new live set.
    ///
    /// The file is rewritten wholesale before the swap; if the write fails
    /// the live set is untouched and the session stays open so the caller
    /// can retry or cancel.
    pub fn commit_session(&mut self, working: Vec<SnippetRecord>) -> Result<()> {
        save_records(&self.path, &working)?;
        self.records = working;
        self.editing = false;
        Ok(())
    }

    /// Discard the working set, leaving the live set untouched.
    pub fn cancel_session(&mut self, working: Vec<SnippetRecord>) {
        drop(working);
        self.editing = false;
    }
}
