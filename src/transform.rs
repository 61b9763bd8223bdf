use serde::Deserialize;
use serde_json::Value;

use crate::authors::parse_authors;
use crate::error::GenomeldError;
use crate::schema::{self, Dataset};

/// One raw genome record from the timeline feed. Every field is
/// optional; sources disagree on which keys they carry. A present key
/// with the wrong type fails deserialization, which the batch driver
/// treats as a per-entry skip.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenomeEntry {
    #[serde(rename = "ScientificName")]
    pub scientific_name: Option<String>,
    #[serde(rename = "Genus")]
    pub genus: Option<String>,
    pub common: Option<String>,
    #[serde(rename = "GenomeSize")]
    pub genome_size: Option<Value>,
    #[serde(rename = "Species")]
    pub species: Option<Value>,
    #[serde(rename = "Source")]
    pub source: Option<String>,
    #[serde(rename = "PubDoi")]
    pub pub_doi: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    pub start: Option<String>,
    #[serde(rename = "PubYear")]
    pub pub_year: Option<String>,
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    pub group: Option<String>,
    #[serde(rename = "Authorship")]
    pub authorship: Option<String>,
}

#[derive(Debug)]
pub struct TransformOutcome {
    pub datasets: Vec<Dataset>,
    pub skipped: usize,
}

/// Walks the `genomes` list of the parsed feed document. A missing or
/// non-array `genomes` key is an empty batch, not an error. Entries
/// that fail to map are logged and skipped; output order follows input
/// order.
pub fn transform_document(document: &Value) -> TransformOutcome {
    let entries = document
        .get("genomes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut datasets = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for (index, entry) in entries.iter().enumerate() {
        match transform_entry(entry) {
            Ok(dataset) => datasets.push(dataset),
            Err(err) => {
                tracing::warn!("skipping entry {index}: {err}");
                skipped += 1;
            }
        }
    }
    TransformOutcome { datasets, skipped }
}

/// Maps a single genome entry to a Schema.org `Dataset`.
pub fn transform_entry(raw: &Value) -> Result<Dataset, GenomeldError> {
    let entry: GenomeEntry = serde_json::from_value(raw.clone())
        .map_err(|err| GenomeldError::EntryMapping(err.to_string()))?;

    // Presence wins over emptiness: an explicit empty ScientificName
    // still shadows Genus, matching the feed's own conventions.
    let sci_name = entry
        .scientific_name
        .clone()
        .or_else(|| entry.genus.clone())
        .unwrap_or_else(|| "Unknown Organism".to_string());

    let description = build_description(&entry, &sci_name)?;
    let keywords = build_keywords(&entry, &sci_name);

    let doi = entry.pub_doi.clone().unwrap_or_default();
    let authors = entry.authorship.as_deref().map(parse_authors);

    Ok(Dataset {
        context: schema::SCHEMA_CONTEXT.to_string(),
        dataset_type: schema::DATASET_TYPE.to_string(),
        id: format!("{}{}", schema::DOI_BASE, doi),
        identifier: doi,
        name: entry
            .title
            .clone()
            .unwrap_or_else(|| format!("Genome of {sci_name}")),
        description,
        date_published: entry
            .start
            .clone()
            .or_else(|| entry.pub_year.clone())
            .unwrap_or_default(),
        keywords,
        license: schema::DATASET_LICENSE.to_string(),
        citation: entry.source.clone().unwrap_or_default(),
        publisher: schema::publisher(),
        author: authors.clone(),
        creator: authors,
    })
}

fn build_description(entry: &GenomeEntry, sci_name: &str) -> Result<String, GenomeldError> {
    let mut parts = vec![format!("Genomic dataset for {sci_name}.")];

    if let Some(common) = &entry.common {
        if !common.is_empty() {
            parts.push(format!("Commonly known as {common}."));
        }
    }

    if let Some(size) = &entry.genome_size {
        parts.push(format!("Genome size: {} Mb.", genome_size_text(size)?));
    }

    let species = nested_species_names(entry);
    if !species.is_empty() {
        parts.push(format!("Includes data for: {}.", species.join(", ")));
    }

    if let Some(source) = &entry.source {
        parts.push(format!("Originally published in: {source}"));
    }

    Ok(parts.join(" "))
}

/// Genome sizes appear as bare numbers in some source records and as
/// strings in others.
fn genome_size_text(value: &Value) -> Result<String, GenomeldError> {
    match value {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        other => Err(GenomeldError::EntryMapping(format!(
            "GenomeSize has unsupported type: {other}"
        ))),
    }
}

fn nested_species_names(entry: &GenomeEntry) -> Vec<&str> {
    let Some(Value::Array(items)) = &entry.species else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| item.get("ScientificName").and_then(Value::as_str))
        .collect()
}

fn build_keywords(entry: &GenomeEntry, sci_name: &str) -> String {
    let candidates = [
        Some(sci_name),
        entry.class_name.as_deref(),
        entry.group.as_deref(),
        entry.common.as_deref(),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(|keyword| !keyword.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
