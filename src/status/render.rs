// === Module Header (agents-tooling) START ===
// purpose: Print the tagged dump grouped by year, month, and day entry
// role: status/render
// inputs: Tagged year tree
// outputs: Multi-line text for stdout
// invariants:
// - Years print in ascending numeric order; months keep encounter order
// - Entry headers read "WEEKDAY DATE Month Year"
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::status::tagger::{TaggedLine, TaggedYear};

pub fn render_dump(years: &[TaggedYear]) -> String {
  let mut ordered: Vec<&TaggedYear> = years.iter().collect();
  ordered.sort_by_key(|y| y.year.parse::<i32>().unwrap_or(i32::MAX));

  let mut out = String::new();

  for year in ordered {
    out.push_str(&year.year);
    out.push('\n');

    for month in &year.months {
      out.push_str(&month.name);
      out.push('\n');

      for entry in &month.entries {
        out.push_str(&format!("{} {} {} {}\n", entry.weekday, entry.date, month.name, year.year));

        for line in &entry.lines {
          out.push_str(&render_line(line));
          out.push('\n');
        }

        out.push('\n');
      }

      out.push('\n');
    }

    out.push_str("\n\n");
  }

  out
}

fn render_line(line: &TaggedLine) -> String {
  match &line.annotation {
    Some(annotation) => format!("{} {}", line.text, annotation.render()),
    None => line.text.clone(),
  }
}
