// === Module Header (agents-tooling) START ===
// purpose: Resolve user-supplied dates into the report day range and search-window instants
// role: range/resolution
// inputs: CLI date strings (%Y-%m-%d)
// outputs: DateRange with inclusive day sequence and LA-timezone instant bounds
// side_effects: None
// invariants:
// - start <= end, validated before use
// - lookback_start is exactly 14 calendar days before start
// - instants carry the America/Los_Angeles UTC offset in effect on that day
// errors: InvalidRange on unparseable dates or inverted bounds
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::AppError;

/// All day bucketing and search windows are anchored to this timezone.
pub const REPORT_TZ: Tz = chrono_tz::America::Los_Angeles;

const DATE_FMT: &str = "%Y-%m-%d";
const INSTANT_FMT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Inclusive calendar-day range plus the widened review-candidate window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end: NaiveDate,
  pub lookback_start: NaiveDate,
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), DATE_FMT)
    .map_err(|_| AppError::InvalidRange(format!("{:?} is not a {} date", raw, DATE_FMT)).into())
}

impl DateRange {
  /// Single-day report: start == end == date.
  pub fn single(date: &str) -> Result<Self> {
    let day = parse_day(date)?;
    Self::from_days(day, day)
  }

  /// Multi-day report over [start, end].
  pub fn bounded(start: &str, end: &str) -> Result<Self> {
    Self::from_days(parse_day(start)?, parse_day(end)?)
  }

  fn from_days(start: NaiveDate, end: NaiveDate) -> Result<Self> {
    if start > end {
      return Err(AppError::InvalidRange(format!("start date {} is after end date {}", start, end)).into());
    }

    Ok(DateRange {
      start,
      end,
      lookback_start: start - Duration::days(14),
    })
  }

  /// Every calendar day in [start, end], ascending.
  pub fn days(&self) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cur = self.start;

    while cur <= self.end {
      out.push(cur);
      cur = cur.succ_opt().expect("calendar day overflow");
    }

    out
  }

  pub fn start_instant(&self) -> String {
    day_start_instant(self.start)
  }

  pub fn end_instant(&self) -> String {
    day_end_instant(self.end)
  }

  pub fn lookback_instant(&self) -> String {
    day_start_instant(self.lookback_start)
  }
}

fn day_start_instant(day: NaiveDate) -> String {
  let local = REPORT_TZ
    .from_local_datetime(&day.and_hms_opt(0, 0, 0).unwrap())
    .earliest()
    .unwrap();
  local.format(INSTANT_FMT).to_string()
}

fn day_end_instant(day: NaiveDate) -> String {
  let local = REPORT_TZ
    .from_local_datetime(&day.and_hms_opt(23, 59, 59).unwrap())
    .earliest()
    .unwrap();
  local.format(INSTANT_FMT).to_string()
}

/// Calendar day of an RFC3339 instant once converted to the report timezone.
/// None when the timestamp does not parse.
pub fn day_in_report_tz(iso: &str) -> Option<NaiveDate> {
  DateTime::parse_from_rfc3339(iso)
    .ok()
    .map(|dt| dt.with_timezone(&REPORT_TZ).date_naive())
}
