//! Typed error taxonomy shared across both pipelines.
//!
//! Variants and their carried data are fixed by the call sites; messages are
//! shaped to the user-facing contract (see SPEC_FULL.md §errors). Each variant
//! converts into `anyhow::Error` via `?`/`.into()`, and `AppError` doubles as
//! the `FromStr::Err` for cost-center parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Bad/missing date input; no I/O is attempted.
  #[error("invalid range: {0}")]
  InvalidRange(String),

  /// Any network/pagination error during aggregation; aborts the run.
  #[error("GitHub fetch failed: {0}")]
  FetchFailed(String),

  /// A required input file does not exist.
  #[error("file not found: {0}")]
  FileNotFound(String),

  /// A project table argument that is not a .csv file.
  #[error("invalid file type: {0} (expected a .csv file)")]
  InvalidFileType(String),

  /// A home cost center that is not one of the known labels.
  #[error("invalid cost center: {0:?} (expected one of G&A, R&D, S&M, CoR)")]
  InvalidCostCenter(String),
}
