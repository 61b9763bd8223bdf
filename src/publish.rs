use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::GenomeldError;
use crate::schema::Dataset;

/// Writes the transformed records as one pretty-printed JSON array,
/// creating the output directory if needed. Returns the path of the
/// written file.
pub fn write_datasets(
    output_dir: &Utf8Path,
    filename: &str,
    datasets: &[Dataset],
) -> Result<Utf8PathBuf, GenomeldError> {
    fs::create_dir_all(output_dir).map_err(|err| {
        GenomeldError::Filesystem(format!("create dir {output_dir}: {err}"))
    })?;
    let path = output_dir.join(filename);
    let json = serde_json::to_string_pretty(datasets)
        .map_err(|err| GenomeldError::Filesystem(err.to_string()))?;
    fs::write(&path, json)
        .map_err(|err| GenomeldError::Filesystem(format!("write {path}: {err}")))?;
    Ok(path)
}
