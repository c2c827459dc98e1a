//! Newline-delimited JSON record files and plain id files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use kbforge_core::errors::{KbResult, StorageError};

/// Read one record per non-blank line.
pub fn read_jsonl<T: DeserializeOwned>(path: impl AsRef<Path>) -> KbResult<Vec<T>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| StorageError::MalformedRecord {
            path: path.display().to_string(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    info!(path = %path.display(), records = records.len(), "jsonl loaded");
    Ok(records)
}

/// Write one record per line, replacing the file.
pub fn write_jsonl<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> KbResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "jsonl written");
    Ok(())
}

/// Read a file of one id per line, trimmed, skipping blank lines.
pub fn read_id_file(path: impl AsRef<Path>) -> KbResult<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Write one id per line.
pub fn write_id_file<I, S>(path: impl AsRef<Path>, ids: I) -> KbResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for id in ids {
        writeln!(writer, "{}", id.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}
