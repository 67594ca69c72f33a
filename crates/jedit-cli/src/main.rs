//! `jedit` -- interactive editor for JSON documents addressed by path
//! expressions.
//!
//! ## Usage
//!
//! ```sh
//! # Edit a file (loaded if it exists, created on the first `save`)
//! jedit config.json
//!
//! # Start from an empty document
//! jedit
//!
//! # Scripted use: commands on stdin
//! printf 'set servers[0].host "db1"\nsave\n' | jedit config.json
//! ```
//!
//! Inside a session:
//!
//! ```text
//! $> set servers[0].host "db1"
//! $> edit servers[0]
//! $.servers[0]> show
//! {
//!     "host": "db1"
//! }
//! $.servers[0]> up
//! $.servers> top
//! $> save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jedit_core::Value;

mod repl;

#[derive(Parser)]
#[command(
    name = "jedit",
    version,
    about = "Interactive path-directed JSON editor"
)]
struct Cli {
    /// JSON file to edit. Loaded if it exists; otherwise the session
    /// starts from an empty document and `save` creates the file.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = match &cli.file {
        Some(path) if path.exists() => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let value = text
                .parse::<Value>()
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            log::debug!("loaded {} ({} bytes)", path.display(), text.len());
            value
        }
        _ => Value::object(),
    };

    repl::run(document, cli.file)
}
