//! Output document writer.
//!
//! The export artifact is a single UTF-8 JSON document: a pretty-printed
//! top-level array of Schema.org `Dataset` records. The file is opened
//! once, written once, closed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::schema::SchemaDataset;

/// Writes the dataset collection to a writer as one JSON array.
///
/// # Arguments
///
/// * `writer` - The output writer (e.g., a file or an in-memory buffer)
/// * `datasets` - The mapped records, already in output order
pub fn write_datasets<W: Write>(
    writer: &mut W,
    datasets: &[SchemaDataset],
) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *writer, datasets)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the dataset collection to a file, creating parent directories.
pub fn write_datasets_to_path(
    path: &Path,
    datasets: &[SchemaDataset],
) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_datasets(&mut writer, datasets)
}
