use crate::cli::Commands;
use snipkit::config::{ensure_config_dir, get_snippets_file_path};
use snipkit::editor::ScratchBuffer;
use snipkit::engine::on_expansion_key;
use snipkit::error::{Result, SnipkitError};
use snipkit::models::SnippetRecord;
use snipkit::store::{group_by_file_types, ConfigStore};
use std::fs;
use std::path::PathBuf;

/// Dispatch a parsed CLI command against the snippets file.
pub fn handle_command(config_file: Option<PathBuf>, command: Commands) -> Result<()> {
    let path = match config_file {
        Some(path) => path,
        None => {
            ensure_config_dir()?;
            get_snippets_file_path()
        }
    };
    match command {
        Commands::Add {
            file_types,
            name,
            trigger,
            text,
        } => {
            let mut store = ConfigStore::open(path)?;
            add_snippet(&mut store, file_types, name, trigger, text)
        }
        Commands::Delete { name } => {
            let mut store = ConfigStore::open(path)?;
            delete_snippets(&mut store, &name)
        }
        Commands::Update {
            name,
            file_types,
            trigger,
            text,
        } => {
            let mut store = ConfigStore::open(path)?;
            update_snippets(&mut store, &name, file_types, trigger, text)
        }
        Commands::List => {
            list_snippets(&ConfigStore::open(path)?);
            Ok(())
        }
        Commands::Expand { file, offset } => {
            // Only expansion tolerates a broken snippets file; the editing
            // commands must not commit over a file they could not read.
            expand_in_file(&ConfigStore::open_lenient(path), &file, offset)
        }
    }
}

fn add_snippet(
    store: &mut ConfigStore,
    file_types: String,
    name: String,
    trigger: String,
    text: String,
) -> Result<()> {
    let mut working = store.open_edit_session()?;
    working.push(SnippetRecord::new(file_types, name, trigger, text));
    store.commit_session(working)?;
    println!("Snippet added");
    Ok(())
}

fn delete_snippets(store: &mut ConfigStore, name: &str) -> Result<()> {
    let mut working = store.open_edit_session()?;
    let before = working.len();
    working.retain(|record| record.name != name);

    if working.len() == before {
        store.cancel_session(working);
        return Err(SnipkitError::NameNotFound(name.to_string()));
    }

    let removed = before - working.len();
    store.commit_session(working)?;
    println!("Deleted {} snippet(s)", removed);
    Ok(())
}

fn update_snippets(
    store: &mut ConfigStore,
    name: &str,
    file_types: Option<String>,
    trigger: Option<String>,
    text: Option<String>,
) -> Result<()> {
    let mut working = store.open_edit_session()?;
    let mut updated = 0;

    for record in working.iter_mut().filter(|r| r.name == name) {
        if let Some(file_types) = &file_types {
            record.file_types = file_types.clone();
        }
        if let Some(trigger) = &trigger {
            record.trigger = trigger.clone();
        }
        if let Some(text) = &text {
            record.text = text.clone();
        }
        updated += 1;
    }

    if updated == 0 {
        store.cancel_session(working);
        return Err(SnipkitError::NameNotFound(name.to_string()));
    }

    store.commit_session(working)?;
    println!("Updated {} snippet(s)", updated);
    Ok(())
}

fn list_snippets(store: &ConfigStore) {
    let records = store.records();
    if records.is_empty() {
        println!("No snippets defined in {}", store.path().display());
        return;
    }

    for (file_types, members) in group_by_file_types(records) {
        let heading = if file_types.is_empty() {
            "(no file types)"
        } else {
            file_types
        };
        println!("{}", heading);
        for record in members {
            println!("  {} -> {}", record.trigger, record.name);
        }
    }
}

fn expand_in_file(store: &ConfigStore, file: &PathBuf, offset: Option<usize>) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let cursor = offset.unwrap_or(content.len());
    let mut buffer = ScratchBuffer::new(content, cursor, Some(file.clone()));

    if on_expansion_key(&mut buffer, store.records()) {
        println!("{}", buffer.content());
    } else {
        println!("Not handled: no snippet matched at offset {}", cursor);
    }
    Ok(())
}
