// === Module Header (agents-tooling) START ===
// purpose: Tag status lines with matched cost centers and finalize per-month totals
// role: status/tagging
// inputs: Segmented dump, project table, home cost center
// outputs: Tagged tree with annotations; totals filled once the month is complete
// side_effects: None
// invariants:
// - Counters are owned by the month scan, reset per month, bumped in day/content order
// - Home-cost-center projects never annotate
// - First matching project in table order wins
// - Finalization only fills empty totals, so running it again changes nothing
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::status::dump::{MonthSection, YearSection};
use crate::status::projects::{CostCenter, ProjectRecord};

/// A cost-center hit on a single status line. `total` stays None until the
/// month is finalized and renders as `?` in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
  pub cost_center: CostCenter,
  pub project: String,
  pub count: u32,
  pub total: Option<u32>,
}

impl Annotation {
  pub fn render(&self) -> String {
    let total = self.total.map_or_else(|| "?".to_string(), |t| t.to_string());
    format!("[{} {}/{} – {}]", self.cost_center, self.count, total, self.project)
  }
}

#[derive(Debug, Clone)]
pub struct TaggedLine {
  pub text: String,
  pub annotation: Option<Annotation>,
}

#[derive(Debug, Clone)]
pub struct TaggedEntry {
  pub date: String,
  pub weekday: String,
  pub lines: Vec<TaggedLine>,
}

#[derive(Debug, Clone)]
pub struct TaggedMonth {
  pub name: String,
  pub entries: Vec<TaggedEntry>,
}

#[derive(Debug, Clone)]
pub struct TaggedYear {
  pub year: String,
  pub months: Vec<TaggedMonth>,
}

/// Running per-cost-center tallies for one month's scan.
#[derive(Debug, Default)]
pub struct MonthCounters {
  counts: [u32; 4],
}

impl MonthCounters {
  fn bump(&mut self, center: CostCenter) -> u32 {
    self.counts[center.index()] += 1;
    self.counts[center.index()]
  }

  fn total(&self, center: CostCenter) -> u32 {
    self.counts[center.index()]
  }
}

/// Tag every month in the dump against the project table.
pub fn tag_dump(years: Vec<YearSection>, table: &[ProjectRecord], home: CostCenter) -> Vec<TaggedYear> {
  years
    .into_iter()
    .map(|year| TaggedYear {
      year: year.year,
      months: year.months.into_iter().map(|m| tag_month(m, table, home)).collect(),
    })
    .collect()
}

/// Scan one month with fresh counters, then backfill the totals.
pub fn tag_month(month: MonthSection, table: &[ProjectRecord], home: CostCenter) -> TaggedMonth {
  let mut counters = MonthCounters::default();

  let mut tagged = TaggedMonth {
    name: month.name,
    entries: month
      .entries
      .into_iter()
      .map(|entry| TaggedEntry {
        date: entry.date,
        weekday: entry.weekday,
        lines: entry
          .lines
          .into_iter()
          .map(|text| tag_line(text, table, home, &mut counters))
          .collect(),
      })
      .collect(),
  };

  finalize_month(&mut tagged, &counters);

  tagged
}

fn tag_line(text: String, table: &[ProjectRecord], home: CostCenter, counters: &mut MonthCounters) -> TaggedLine {
  for record in table {
    let Some(center) = record.cost_center else { continue };

    if center == home {
      continue;
    }

    let hit = std::iter::once(record.name.as_str())
      .chain(record.aliases.iter().map(String::as_str))
      .filter(|keyword| !keyword.is_empty())
      .any(|keyword| text.contains(keyword));

    if hit {
      let count = counters.bump(center);
      return TaggedLine {
        text,
        annotation: Some(Annotation {
          cost_center: center,
          project: record.name.clone(),
          count,
          total: None,
        }),
      };
    }
  }

  TaggedLine { text, annotation: None }
}

/// Fill each annotation's total from the month's final tallies. Totals that
/// are already set are left alone, which makes a second pass a no-op.
pub fn finalize_month(month: &mut TaggedMonth, counters: &MonthCounters) {
  for entry in &mut month.entries {
    for line in &mut entry.lines {
      if let Some(annotation) = &mut line.annotation {
        if annotation.total.is_none() {
          annotation.total = Some(counters.total(annotation.cost_center));
        }
      }
    }
  }
}
