// === Module Header (agents-tooling) START ===
// purpose: Render ordered day buckets as the plain-text activity report
// role: render/report
// inputs: (day, DayBucket) pairs ascending
// outputs: Multi-line report text for stdout
// side_effects: None
// invariants:
// - Every day in the range renders a section, empty days included
// - Commit lines group by associated pull number; numbers already listed as
//   created items are not repeated
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::model::DayBucket;
use crate::util::day_label;

const SECTION_MARKER: &str = "[Note: GH Activity]";

/// Render the whole report, one labeled section per day.
pub fn render_report(buckets: &[(NaiveDate, DayBucket)]) -> String {
  let mut out = String::new();

  for (day, bucket) in buckets {
    out.push('\n');
    out.push_str(&format!("{} {}\n", day_label(*day), SECTION_MARKER));
    render_bucket(&mut out, bucket);
  }

  out
}

fn render_bucket(out: &mut String, bucket: &DayBucket) {
  let mut listed_numbers: HashSet<i64> = HashSet::new();

  for item in &bucket.created {
    listed_numbers.insert(item.number);
    out.push_str(&format!(
      "• GH: [{} #{}]({}) – {}\n",
      item.kind.tag(),
      item.number,
      item.html_url,
      item.title
    ));
  }

  // Group commit links under their pull request, in pull-number order.
  let mut groups: BTreeMap<i64, (String, Vec<String>)> = BTreeMap::new();
  for commit in &bucket.commits {
    for pull in &commit.pull_requests {
      groups
        .entry(pull.number)
        .or_insert_with(|| (pull.html_url.clone(), Vec::new()))
        .1
        .push(commit.html_url.clone());
    }
  }

  for (number, (pull_url, commit_urls)) in &groups {
    if listed_numbers.contains(number) {
      continue;
    }
    out.push_str(&format!(
      "• GH: [PR #{}]({}) Commits – [\n\t• {}\n  ]\n",
      number,
      pull_url,
      commit_urls.join("\n\t• ")
    ));
  }

  for review in &bucket.reviews {
    out.push_str(&format!(
      "• GH: Reviewed [PR #{}]({})\n",
      review.pull_number, review.html_url
    ));
  }

  if !bucket.comments.is_empty() {
    let urls: Vec<&str> = bucket.comments.iter().map(|c| c.html_url.as_str()).collect();
    out.push_str(&format!("• GH: Comments – [\n\t• {}\n  ]\n", urls.join("\n\t• ")));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{ActivityItem, AssociatedPull, Commit, CommentItem, ItemKind, ReviewEvent};

  fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn commit_with_pulls(sha: &str, pulls: &[(i64, &str)]) -> Commit {
    Commit {
      sha: sha.to_string(),
      html_url: format!("https://github.com/o/r/commit/{}", sha),
      author_date: String::new(),
      repo: "o/r".into(),
      pull_requests: pulls
        .iter()
        .map(|(n, url)| AssociatedPull {
          number: *n,
          html_url: url.to_string(),
          author: Some("me".into()),
        })
        .collect(),
    }
  }

  #[test]
  fn empty_days_still_render_their_header() {
    let buckets = vec![
      (day(2021, 1, 1), DayBucket::default()),
      (day(2021, 1, 2), DayBucket::default()),
    ];
    let text = render_report(&buckets);

    assert!(text.contains("JAN 1ST 2021 FRIDAY [Note: GH Activity]"));
    assert!(text.contains("JAN 2ND 2021 SATURDAY [Note: GH Activity]"));
    let first = text.find("JAN 1ST").unwrap();
    let second = text.find("JAN 2ND").unwrap();
    assert!(first < second);
  }

  #[test]
  fn created_items_render_with_kind_tag() {
    let mut bucket = DayBucket::default();
    bucket.created.push(ActivityItem {
      number: 12,
      html_url: "https://github.com/o/r/pull/12".into(),
      title: "Add a widget".into(),
      kind: ItemKind::PullRequest,
      created_at: String::new(),
    });
    bucket.created.push(ActivityItem {
      number: 13,
      html_url: "https://github.com/o/r/issues/13".into(),
      title: "Widget broken".into(),
      kind: ItemKind::Issue,
      created_at: String::new(),
    });

    let text = render_report(&[(day(2021, 1, 1), bucket)]);
    assert!(text.contains("• GH: [PR #12](https://github.com/o/r/pull/12) – Add a widget"));
    assert!(text.contains("• GH: [Issue #13](https://github.com/o/r/issues/13) – Widget broken"));
  }

  #[test]
  fn one_commit_line_per_associated_pull() {
    let mut bucket = DayBucket::default();
    bucket
      .commits
      .push(commit_with_pulls("aaa", &[(1, "p1"), (2, "p2")]));

    let text = render_report(&[(day(2021, 1, 1), bucket)]);
    assert!(text.contains("• GH: [PR #1](p1) Commits – [\n\t• https://github.com/o/r/commit/aaa\n  ]"));
    assert!(text.contains("• GH: [PR #2](p2) Commits – [\n\t• https://github.com/o/r/commit/aaa\n  ]"));
  }

  #[test]
  fn commit_groups_skip_numbers_already_listed_as_created() {
    let mut bucket = DayBucket::default();
    bucket.created.push(ActivityItem {
      number: 1,
      html_url: "p1".into(),
      title: "t".into(),
      kind: ItemKind::PullRequest,
      created_at: String::new(),
    });
    bucket.commits.push(commit_with_pulls("aaa", &[(1, "p1")]));
    bucket.commits.push(commit_with_pulls("bbb", &[(2, "p2")]));

    let text = render_report(&[(day(2021, 1, 1), bucket)]);
    assert!(!text.contains("[PR #1](p1) Commits"));
    assert!(text.contains("[PR #2](p2) Commits"));
  }

  #[test]
  fn reviews_and_comments_render_their_blocks() {
    let mut bucket = DayBucket::default();
    bucket.reviews.push(ReviewEvent {
      pull_number: 7,
      html_url: "p7".into(),
      submitted_at: String::new(),
    });
    bucket.comments.push(CommentItem {
      html_url: "c1".into(),
      created_at: String::new(),
      author: "me".into(),
    });
    bucket.comments.push(CommentItem {
      html_url: "c2".into(),
      created_at: String::new(),
      author: "me".into(),
    });

    let text = render_report(&[(day(2021, 1, 1), bucket)]);
    assert!(text.contains("• GH: Reviewed [PR #7](p7)"));
    assert!(text.contains("• GH: Comments – [\n\t• c1\n\t• c2\n  ]"));
  }
}
