use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GenomeldError {
    #[error("timeline request failed: {0}")]
    TimelineHttp(String),

    #[error("timeline endpoint returned status {status}: {message}")]
    TimelineStatus { status: u16, message: String },

    #[error("failed to parse timeline JSON: {0}")]
    TimelineParse(String),

    #[error("entry mapping failed: {0}")]
    EntryMapping(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
