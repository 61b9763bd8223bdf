use camino::Utf8PathBuf;
use serde::Serialize;
use serde_json::Value;

use crate::error::GenomeldError;
use crate::fetch::TimelineClient;
use crate::publish::write_datasets;
use crate::transform::transform_document;

/// Fixed build inputs, passed explicitly rather than read from globals.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub data_url: String,
    pub output_dir: Utf8PathBuf,
    pub output_filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub transformed: usize,
    pub skipped: usize,
    pub output_path: String,
}

pub struct App<T: TimelineClient> {
    client: T,
}

impl<T: TimelineClient> App<T> {
    pub fn new(client: T) -> Self {
        Self { client }
    }

    /// Runs the whole pipeline: fetch, parse, transform, write.
    ///
    /// Fetch, top-level parse, and write failures abort the build;
    /// per-entry mapping failures only reduce the output and show up
    /// in the report's skipped count. Nothing is written until the
    /// transform has finished, so a failed build leaves any previous
    /// output file untouched.
    pub fn build(&self, config: &BuildConfig) -> Result<BuildReport, GenomeldError> {
        let body = self.client.fetch_timeline(&config.data_url)?;
        let document: Value = serde_json::from_str(&body)
            .map_err(|err| GenomeldError::TimelineParse(err.to_string()))?;

        let outcome = transform_document(&document);
        let path = write_datasets(
            &config.output_dir,
            &config.output_filename,
            &outcome.datasets,
        )?;

        Ok(BuildReport {
            transformed: outcome.datasets.len(),
            skipped: outcome.skipped,
            output_path: path.into_string(),
        })
    }
}
