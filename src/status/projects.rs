// === Module Header (agents-tooling) START ===
// purpose: Load the project table CSV into typed records with cost centers
// role: status/projects
// inputs: CSV path with the source sheet's verbatim column headers
// outputs: ProjectRecord list in row order
// side_effects: Reads the CSV file
// invariants:
// - Aliases are comma-split, trimmed, empties discarded
// - Short or malformed rows degrade to whatever fields they carry
// - Unknown cost centers leave the field unset rather than failing the load
// errors: Only unreadable files surface; row-level problems never do
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use serde::Deserialize;

use crate::error::AppError;

/// The four organizational cost centers a project can bill to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCenter {
  GeneralAdmin,
  ResearchDev,
  SalesMarketing,
  CostOfRevenue,
}

pub const ALL_COST_CENTERS: [CostCenter; 4] = [
  CostCenter::GeneralAdmin,
  CostCenter::ResearchDev,
  CostCenter::SalesMarketing,
  CostCenter::CostOfRevenue,
];

impl CostCenter {
  pub fn label(&self) -> &'static str {
    match self {
      CostCenter::GeneralAdmin => "G&A",
      CostCenter::ResearchDev => "R&D",
      CostCenter::SalesMarketing => "S&M",
      CostCenter::CostOfRevenue => "CoR",
    }
  }

  /// Stable slot used by the per-month counter array.
  pub fn index(&self) -> usize {
    match self {
      CostCenter::GeneralAdmin => 0,
      CostCenter::ResearchDev => 1,
      CostCenter::SalesMarketing => 2,
      CostCenter::CostOfRevenue => 3,
    }
  }
}

impl fmt::Display for CostCenter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for CostCenter {
  type Err = AppError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    ALL_COST_CENTERS
      .into_iter()
      .find(|c| c.label() == s.trim())
      .ok_or_else(|| AppError::InvalidCostCenter(s.to_string()))
  }
}

/// One project row, as matched against status lines.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
  pub name: String,
  pub aliases: Vec<String>,
  pub cost_center: Option<CostCenter>,
}

// Raw row under the sheet's verbatim headers; missing columns default empty.
#[derive(Debug, Default, Deserialize)]
struct RawProjectRow {
  #[serde(
    rename = "Project (PLEASE DON'T CHANGE PROJECT NAMES ONCE THEY'RE IN HERE. Add them to Aliases)",
    default
  )]
  project: String,
  #[serde(rename = "Project Aliases", default)]
  aliases: String,
  #[serde(rename = "Cost Center", default)]
  cost_center: String,
}

/// Parse the CSV into records, dropping rows that do not deserialize at all.
pub fn load_project_table(path: &Path) -> Result<Vec<ProjectRecord>> {
  let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
  let mut out: Vec<ProjectRecord> = Vec::new();

  for row in reader.deserialize::<RawProjectRow>() {
    let Ok(row) = row else { continue };

    let aliases: Vec<String> = row
      .aliases
      .split(',')
      .map(str::trim)
      .filter(|a| !a.is_empty())
      .map(str::to_string)
      .collect();

    out.push(ProjectRecord {
      name: row.project.trim().to_string(),
      aliases,
      cost_center: CostCenter::from_str(&row.cost_center).ok(),
    });
  }

  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  const PROJECT_HEADER: &str =
    "Project (PLEASE DON'T CHANGE PROJECT NAMES ONCE THEY'RE IN HERE. Add them to Aliases)";

  fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
  }

  #[test]
  fn cost_center_labels_round_trip() {
    for center in ALL_COST_CENTERS {
      assert_eq!(CostCenter::from_str(center.label()).unwrap(), center);
    }
    assert!(CostCenter::from_str("Engineering").is_err());
  }

  #[test]
  fn loads_rows_with_aliases() {
    let csv = format!(
      "{},Project Aliases,Cost Center\nFoo,\"foo-app, FooBar\",R&D\nBilling,,G&A\n",
      PROJECT_HEADER
    );
    let f = write_csv(&csv);
    let table = load_project_table(f.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].name, "Foo");
    assert_eq!(table[0].aliases, vec!["foo-app", "FooBar"]);
    assert_eq!(table[0].cost_center, Some(CostCenter::ResearchDev));
    assert!(table[1].aliases.is_empty());
  }

  #[test]
  fn unknown_cost_center_degrades_to_none() {
    let csv = format!("{},Project Aliases,Cost Center\nFoo,,Engineering\n", PROJECT_HEADER);
    let f = write_csv(&csv);
    let table = load_project_table(f.path()).unwrap();

    assert_eq!(table[0].cost_center, None);
  }

  #[test]
  fn short_rows_keep_their_populated_fields() {
    let csv = format!("{},Project Aliases,Cost Center\nFoo\n", PROJECT_HEADER);
    let f = write_csv(&csv);
    let table = load_project_table(f.path()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].name, "Foo");
    assert!(table[0].aliases.is_empty());
    assert_eq!(table[0].cost_center, None);
  }
}
