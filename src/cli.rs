use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::Parser;

use crate::error::AppError;
use crate::range::DateRange;
use crate::status::projects::CostCenter;

#[derive(Parser, Debug)]
#[command(
    name = "github-daily-activity",
    version,
    about = "Aggregate your GitHub activity into a per-day text report",
    long_about = None
)]
pub struct ActivityCli {
  /// GitHub token used for every API call
  #[arg(long)]
  pub token: Option<String>,

  /// Single report date, e.g. 2021-01-01
  #[arg(long)]
  pub date: Option<String>,

  /// Range start (pair with --endDate)
  #[arg(long = "startDate", alias = "start-date")]
  pub start_date: Option<String>,

  /// Range end, inclusive (pair with --startDate)
  #[arg(long = "endDate", alias = "end-date")]
  pub end_date: Option<String>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct ActivityConfig {
  pub token: String,
  pub range: DateRange,
}

/// Validate the raw flags into an effective config. No network happens here;
/// a bad invocation never gets as far as a request.
pub fn normalize_activity(cli: ActivityCli) -> Result<ActivityConfig> {
  let token = match cli.token {
    Some(t) if !t.trim().is_empty() => t,
    _ => bail!("No GitHub token provided. Example:\n\tgithub-daily-activity --token=XXX --date=2021-01-01"),
  };

  // Validate date selection
  let range = match (&cli.date, &cli.start_date, &cli.end_date) {
    (Some(d), None, None) => DateRange::single(d)?,
    (None, Some(s), Some(e)) => DateRange::bounded(s, e)?,
    (None, None, None) => bail!("Provide either --date or (--startDate AND --endDate)"),
    _ => bail!("Ambiguous date selection: choose --date or the --startDate/--endDate pair"),
  };

  Ok(ActivityConfig { token, range })
}

#[derive(Parser, Debug)]
#[command(
    name = "status-tagger",
    version,
    about = "Tag a daily status dump with project cost centers",
    long_about = None
)]
pub struct StatusCli {
  /// Path to the status dump text file
  pub dump: PathBuf,

  /// Path to the project table CSV
  pub projects: PathBuf,

  /// Your home cost center: G&A, R&D, S&M, or CoR
  pub home_cost_center: String,
}

#[derive(Debug)]
pub struct StatusConfig {
  pub dump: PathBuf,
  pub projects: PathBuf,
  pub home: CostCenter,
}

pub fn normalize_status(cli: StatusCli) -> Result<StatusConfig> {
  if !cli.dump.exists() {
    return Err(AppError::FileNotFound(cli.dump.display().to_string()).into());
  }

  if cli.projects.extension().and_then(|e| e.to_str()) != Some("csv") {
    return Err(AppError::InvalidFileType(cli.projects.display().to_string()).into());
  }

  if !cli.projects.exists() {
    return Err(AppError::FileNotFound(cli.projects.display().to_string()).into());
  }

  let home = CostCenter::from_str(&cli.home_cost_center)?;

  Ok(StatusConfig {
    dump: cli.dump,
    projects: cli.projects,
    home,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn base_cli() -> ActivityCli {
    ActivityCli {
      token: Some("t".into()),
      date: None,
      start_date: None,
      end_date: None,
      gen_man: false,
    }
  }

  #[test]
  fn single_date_normalizes() {
    let mut cli = base_cli();
    cli.date = Some("2021-01-01".into());
    let cfg = normalize_activity(cli).unwrap();
    assert_eq!(cfg.range.start, cfg.range.end);
  }

  #[test]
  fn start_end_pair_normalizes() {
    let mut cli = base_cli();
    cli.start_date = Some("2021-01-01".into());
    cli.end_date = Some("2021-01-02".into());
    let cfg = normalize_activity(cli).unwrap();
    assert_eq!(cfg.range.days().len(), 2);
  }

  #[test]
  fn missing_token_is_rejected() {
    let mut cli = base_cli();
    cli.token = None;
    cli.date = Some("2021-01-01".into());
    let err = normalize_activity(cli).unwrap_err();
    assert!(err.to_string().contains("token"));
  }

  #[test]
  fn date_and_pair_together_are_ambiguous() {
    let mut cli = base_cli();
    cli.date = Some("2021-01-01".into());
    cli.start_date = Some("2021-01-01".into());
    cli.end_date = Some("2021-01-02".into());
    assert!(normalize_activity(cli).is_err());
  }

  #[test]
  fn half_a_pair_is_rejected() {
    let mut cli = base_cli();
    cli.start_date = Some("2021-01-01".into());
    assert!(normalize_activity(cli).is_err());
  }

  #[test]
  fn no_date_selection_is_rejected() {
    assert!(normalize_activity(base_cli()).is_err());
  }

  #[test]
  fn status_args_validate_existence_and_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let dump = dir.path().join("dump.txt");
    std::fs::File::create(&dump).unwrap().write_all(b"").unwrap();
    let csv = dir.path().join("projects.csv");
    std::fs::File::create(&csv).unwrap().write_all(b"").unwrap();

    let ok = normalize_status(StatusCli {
      dump: dump.clone(),
      projects: csv.clone(),
      home_cost_center: "CoR".into(),
    })
    .unwrap();
    assert_eq!(ok.home, CostCenter::CostOfRevenue);

    let missing_dump = normalize_status(StatusCli {
      dump: dir.path().join("nope.txt"),
      projects: csv.clone(),
      home_cost_center: "CoR".into(),
    })
    .unwrap_err();
    assert!(missing_dump.to_string().contains("not found"));

    let not_csv = normalize_status(StatusCli {
      dump: dump.clone(),
      projects: dump.clone(),
      home_cost_center: "CoR".into(),
    })
    .unwrap_err();
    assert!(not_csv.to_string().contains(".csv"));

    let bad_center = normalize_status(StatusCli {
      dump,
      projects: csv,
      home_cost_center: "Engineering".into(),
    })
    .unwrap_err();
    assert!(bad_center.to_string().contains("cost center"));
  }
}
