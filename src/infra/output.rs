use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;

use crate::domain::models::Show;

pub const DEFAULT_OUTPUT: &str = "seen_episodes.json";

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub pretty: bool,
    pub skip_confirm: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

pub fn to_json(shows: &[Show], pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(shows)?
    } else {
        serde_json::to_string(shows)?
    };
    Ok(content)
}

pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    println!("Overwrite \"{}\"? [y/N] ", path.display());

    let mut rl = DefaultEditor::new()?;
    loop {
        let input = rl.readline("").unwrap_or_default();
        let input = input.trim().to_lowercase();

        if input == "y" || input == "yes" {
            return Ok(true);
        } else if input == "n" || input == "no" || input.is_empty() {
            return Ok(false);
        } else {
            println!("Please enter 'y' or 'n'.");
        }
    }
}

/// Writes the document to `path`. An existing file is only replaced when
/// `options.skip_confirm` is set or `confirm` agrees.
pub fn write_document<F>(
    shows: &[Show],
    path: &Path,
    options: WriteOptions,
    confirm: F,
) -> Result<WriteOutcome>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if path.exists() && !options.skip_confirm && !confirm(path)? {
        tracing::info!(path = %path.display(), "overwrite declined");
        return Ok(WriteOutcome::Skipped);
    }

    // Destination stays untouched if serialization fails
    let content = to_json(shows, options.pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), shows = shows.len(), "wrote document");
    Ok(WriteOutcome::Written)
}
