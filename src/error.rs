use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline conditions. Anything else that goes wrong per-file is
/// skipped silently (see `data::expression`).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The sample sheet is missing; nothing downstream can run.
    #[error("sample sheet not found: {}", .0.display())]
    SheetNotFound(PathBuf),

    /// A group ended up with zero usable expression values. The plot
    /// annotates each box at its group maximum, so an empty group cannot
    /// be rendered; we refuse to write a partial figure.
    #[error("no usable expression values for group '{0}'")]
    EmptyGroup(&'static str),
}
