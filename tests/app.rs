use assert_matches::assert_matches;
use camino::Utf8PathBuf;
use serde_json::Value;

use genomeld::app::{App, BuildConfig};
use genomeld::error::GenomeldError;
use genomeld::fetch::TimelineClient;

struct StubTimeline {
    body: &'static str,
}

impl TimelineClient for StubTimeline {
    fn fetch_timeline(&self, _url: &str) -> Result<String, GenomeldError> {
        Ok(self.body.to_string())
    }
}

struct FailingTimeline;

impl TimelineClient for FailingTimeline {
    fn fetch_timeline(&self, _url: &str) -> Result<String, GenomeldError> {
        Err(GenomeldError::TimelineStatus {
            status: 503,
            message: "unavailable".to_string(),
        })
    }
}

fn config_in(dir: &tempfile::TempDir) -> BuildConfig {
    BuildConfig {
        data_url: "https://example.test/genomes.json".to_string(),
        output_dir: Utf8PathBuf::from_path_buf(dir.path().join("public")).unwrap(),
        output_filename: "genomes.json".to_string(),
    }
}

#[test]
fn build_writes_transformed_records_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);
    let app = App::new(StubTimeline {
        body: r#"{"genomes": [{"ScientificName":"Zea mays","GenomeSize":2300,"PubDoi":"10.1/x"}]}"#,
    });

    let report = app.build(&config).unwrap();
    assert_eq!(report.transformed, 1);
    assert_eq!(report.skipped, 0);

    let written = std::fs::read_to_string(&report.output_path).unwrap();
    let records: Vec<Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["@id"], "https://doi.org/10.1/x");
    assert_eq!(
        records[0]["description"],
        "Genomic dataset for Zea mays. Genome size: 2300 Mb."
    );
    // Pretty-printed with two-space indent.
    assert!(written.starts_with("[\n  {\n    \"@context\""));
}

#[test]
fn build_reports_skipped_entries() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);
    let app = App::new(StubTimeline {
        body: r#"{"genomes": [{"Genus":"Vitis"}, {"Authorship": []}]}"#,
    });

    let report = app.build(&config).unwrap();
    assert_eq!(report.transformed, 1);
    assert_eq!(report.skipped, 1);
}

#[test]
fn fetch_failure_aborts_before_any_write() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);
    let app = App::new(FailingTimeline);

    let err = app.build(&config).unwrap_err();
    assert_matches!(err, GenomeldError::TimelineStatus { status: 503, .. });
    assert!(!config.output_dir.exists());
}

#[test]
fn malformed_document_is_fatal_and_previous_output_survives() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);

    std::fs::create_dir_all(&config.output_dir).unwrap();
    let previous = config.output_dir.join(&config.output_filename);
    std::fs::write(&previous, "[]").unwrap();

    let app = App::new(StubTimeline {
        body: "{not valid json",
    });
    let err = app.build(&config).unwrap_err();
    assert_matches!(err, GenomeldError::TimelineParse(_));
    assert_eq!(std::fs::read_to_string(&previous).unwrap(), "[]");
}

#[test]
fn rerunning_the_build_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let config = config_in(&temp);
    let body = r#"{"genomes": [
        {"ScientificName":"Oryza sativa","Authorship":"Yu J, Hu S","PubYear":"2002"},
        {"Genus":"Triticum","GenomeSize":"~17000"}
    ]}"#;

    let app = App::new(StubTimeline { body });
    let first_report = app.build(&config).unwrap();
    let first = std::fs::read(&first_report.output_path).unwrap();

    let second_report = app.build(&config).unwrap();
    let second = std::fs::read(&second_report.output_path).unwrap();
    assert_eq!(first, second);
}
