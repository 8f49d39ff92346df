use anyhow::{Context, Result};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;

use crate::domain::error::HistoryError;
use crate::domain::models::RawRow;

/// Reads export rows positionally against the fixed column schema.
///
/// Each row is paired with the file line it starts on. The file's own header
/// line is not consumed here: it comes through as line 1 and the normalizer
/// drops it.
pub fn history_rows(
    data: Rc<[u8]>,
) -> impl Iterator<Item = Result<(u64, RawRow), HistoryError>> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_reader(Cursor::new(Rc::clone(&data)))
        .into_records()
        .map(move |record| -> Result<(u64, RawRow), HistoryError> {
            let record = record?;
            let line = record.position().map_or(0, |pos| record_line(&data, pos));
            Ok((line, record.deserialize(None)?))
        })
}

/// csv stamps a record with the position where the previous one ended, before
/// any blank lines it skips.
fn record_line(data: &[u8], pos: &csv::Position) -> u64 {
    let skipped_lines = data
        .get(pos.byte() as usize..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + skipped_lines as u64
}

pub fn open_history(
    path: &Path,
) -> Result<impl Iterator<Item = Result<(u64, RawRow), HistoryError>>> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to open watch history {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = data.len(), "reading watch history");
    Ok(history_rows(Rc::from(data)))
}
