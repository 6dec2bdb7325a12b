use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "snipkit - a snippet expansion engine for code editors",
    long_about = "snipkit stores snippets scoped to file types and expands a trigger word\ninto its replacement text at the cursor."
)]
pub struct Snipkit {
    /// Snippets file to operate on (defaults to ~/.snipkit/snippets.json)
    #[clap(long, global = true)]
    pub config_file: Option<PathBuf>,

    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new snippet
    Add {
        #[clap(long, short = 'f', help = "Comma/space-delimited file-type patterns")]
        file_types: String,

        #[clap(long, short = 'n', help = "Display name for the snippet")]
        name: String,

        #[clap(long, short = 't', help = "Trigger word that expands")]
        trigger: String,

        #[clap(long, short = 'x', help = "The replacement text")]
        text: String,
    },
    /// Delete snippets by name
    Delete {
        #[clap(long, short, help = "Name of the snippet(s) to delete")]
        name: String,
    },
    /// Update snippets by name
    Update {
        #[clap(long, short = 'n', help = "Name of the snippet(s) to update")]
        name: String,

        #[clap(long, short = 'f', help = "New file-type patterns")]
        file_types: Option<String>,

        #[clap(long, short = 't', help = "New trigger word")]
        trigger: Option<String>,

        #[clap(long, short = 'x', help = "New replacement text")]
        text: Option<String>,
    },
    /// List all snippets, grouped by file types
    List,
    /// Dry-run an expansion-key press against a file on disk
    Expand {
        /// File whose content becomes the buffer
        file: PathBuf,

        #[clap(long, short, help = "Cursor byte offset (defaults to end of file)")]
        offset: Option<usize>,
    },
}
