// === Module Header (agents-tooling) START ===
// purpose: Tokenize the raw status dump into year -> month -> day-entry sections
// role: status/segmentation
// inputs: Raw dump text; fixed year/month/day-header vocabularies
// outputs: YearSection tree in encounter order
// side_effects: None
// invariants:
// - Three marker levels: year line, month line, day-header line
// - Text outside any open region is dropped (best-effort parse of a human dump)
// - Blank lines never become content lines
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

pub const YEARS: [&str; 3] = ["2019", "2020", "2021"];

pub const MONTHS: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

const MONTHS_ABBREV: [&str; 12] = [
  "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAYS: [&str; 5] = ["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY"];

// e.g. "MAR 2ND 2020 MONDAY" -> captures ("2ND", "MONDAY")
static DAY_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&format!(
    r"^(?:{}) (\d+(?:ST|ND|RD|TH)) \d+ ({})$",
    MONTHS_ABBREV.join("|"),
    WEEKDAYS.join("|")
  ))
  .unwrap()
});

#[derive(Debug, Clone)]
pub struct DayEntry {
  /// Ordinal day label from the header, e.g. "2ND".
  pub date: String,
  pub weekday: String,
  pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MonthSection {
  pub name: String,
  pub entries: Vec<DayEntry>,
}

#[derive(Debug, Clone)]
pub struct YearSection {
  pub year: String,
  pub months: Vec<MonthSection>,
}

/// Scan the dump line by line, opening a new region at each marker and
/// accumulating content under the innermost open day entry.
pub fn segment(dump: &str) -> Vec<YearSection> {
  let mut years: Vec<YearSection> = Vec::new();

  for raw in dump.lines() {
    let line = raw.trim();

    if YEARS.contains(&line) {
      years.push(YearSection {
        year: line.to_string(),
        months: Vec::new(),
      });
      continue;
    }

    let Some(year) = years.last_mut() else { continue };

    if MONTHS.contains(&line) {
      year.months.push(MonthSection {
        name: line.to_string(),
        entries: Vec::new(),
      });
      continue;
    }

    let Some(month) = year.months.last_mut() else { continue };

    if let Some(caps) = DAY_HEADER_RE.captures(line) {
      month.entries.push(DayEntry {
        date: caps[1].to_string(),
        weekday: caps[2].to_string(),
        lines: Vec::new(),
      });
      continue;
    }

    if line.is_empty() {
      continue;
    }

    if let Some(entry) = month.entries.last_mut() {
      entry.lines.push(line.to_string());
    }
  }

  years
}
