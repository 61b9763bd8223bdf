use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use genomeld::app::{App, BuildConfig};
use genomeld::error::GenomeldError;
use genomeld::fetch::TimelineHttpClient;

const DATA_URL: &str = "https://www.plabipd.de/json/genomes_timeline1.json";
const OUTPUT_DIR: &str = "public";
const OUTPUT_FILENAME: &str = "genomes.json";

#[derive(Parser)]
#[command(name = "genomeld")]
#[command(about = "Builds a static Schema.org Dataset API from the genome timeline feed")]
#[command(version, author)]
struct Cli {}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<GenomeldError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &GenomeldError) -> u8 {
    match error {
        GenomeldError::TimelineHttp(_) | GenomeldError::TimelineStatus { .. } => 3,
        GenomeldError::TimelineParse(_) => 2,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let client = TimelineHttpClient::new().into_diagnostic()?;
    let app = App::new(client);
    let config = BuildConfig {
        data_url: DATA_URL.to_string(),
        output_dir: Utf8PathBuf::from(OUTPUT_DIR),
        output_filename: OUTPUT_FILENAME.to_string(),
    };

    println!("Fetching data from {DATA_URL}...");
    let report = app.build(&config).into_diagnostic()?;
    println!(
        "Transformed {} records ({} skipped).",
        report.transformed, report.skipped
    );
    println!("Static API generated at: {}", report.output_path);
    Ok(())
}
