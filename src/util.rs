// === Module Header (agents-tooling) START ===
// purpose: Formatting helpers shared by both report renderers, plus man page rendering
// role: utilities/helpers
// inputs: Calendar days; day numbers; clap CommandFactory
// outputs: Uppercased day labels, English ordinal suffixes, troff man page text
// side_effects: None
// invariants:
// - ordinal_day covers the 11th-13th exception block
// - day_label is locale-independent (English month/weekday names, ASCII uppercase)
// errors: Man page IO errors bubble up
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::CommandFactory;

/// English ordinal form of a day-of-month, uppercased: 1 -> "1ST", 22 -> "22ND".
pub fn ordinal_day(day: u32) -> String {
  let suffix = match day % 100 {
    11..=13 => "TH",
    _ => match day % 10 {
      1 => "ST",
      2 => "ND",
      3 => "RD",
      _ => "TH",
    },
  };

  format!("{}{}", day, suffix)
}

/// Uppercased day label used for report section headers, e.g. "JAN 1ST 2021 FRIDAY".
pub fn day_label(day: NaiveDate) -> String {
  format!(
    "{} {} {} {}",
    day.format("%b"),
    ordinal_day(day.day()),
    day.format("%Y"),
    day.format("%A"),
  )
  .to_uppercase()
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[test]
  fn ordinal_day_regular_suffixes() {
    assert_eq!(ordinal_day(1), "1ST");
    assert_eq!(ordinal_day(2), "2ND");
    assert_eq!(ordinal_day(3), "3RD");
    assert_eq!(ordinal_day(4), "4TH");
    assert_eq!(ordinal_day(21), "21ST");
    assert_eq!(ordinal_day(30), "30TH");
  }

  #[test]
  fn ordinal_day_teens_are_th() {
    assert_eq!(ordinal_day(11), "11TH");
    assert_eq!(ordinal_day(12), "12TH");
    assert_eq!(ordinal_day(13), "13TH");
  }

  #[test]
  fn day_label_matches_header_form() {
    let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    assert_eq!(day_label(d), "JAN 1ST 2021 FRIDAY");

    let d2 = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
    assert_eq!(day_label(d2), "MAR 2ND 2020 MONDAY");
  }

  #[derive(Parser, Debug)]
  #[command(name = "dummy", version, about = "Dummy CLI", long_about = None)]
  struct DummyCli;

  #[test]
  fn render_man_page_produces_troff_text() {
    let page = render_man_page::<DummyCli>().expect("render manpage");
    assert!(page.contains(".TH"));
    assert!(page.to_lowercase().contains("dummy"));
  }
}
