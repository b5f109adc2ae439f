// === Module Header (agents-tooling) START ===
// purpose: Assign every activity item to its calendar-day bucket in the report timezone
// role: bucket/aggregation
// inputs: DateRange, enriched item lists
// outputs: One (day, DayBucket) pair per day in [start, end], ascending
// side_effects: None
// invariants:
// - Exactly one bucket per day in the inclusive range, empty days included
// - Each item lands in at most one bucket; out-of-range timestamps are dropped
// - Buckets are not mutated after the single populate pass
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{ActivityItem, Commit, CommentItem, DayBucket, ReviewEvent};
use crate::range::{day_in_report_tz, DateRange};

/// Seed a bucket for every day in the range, then run one scan pass per item
/// type, keying each item by its relevant timestamp converted to the report
/// timezone. Items whose day falls outside the range are dropped.
pub fn bucketize(
  range: &DateRange,
  created: Vec<ActivityItem>,
  reviews: Vec<ReviewEvent>,
  comments: Vec<CommentItem>,
  commits: Vec<Commit>,
) -> Vec<(NaiveDate, DayBucket)> {
  let mut buckets: BTreeMap<NaiveDate, DayBucket> = range
    .days()
    .into_iter()
    .map(|day| (day, DayBucket::default()))
    .collect();

  for item in created {
    if let Some(bucket) = slot(&mut buckets, &item.created_at) {
      bucket.created.push(item);
    }
  }
  for review in reviews {
    if let Some(bucket) = slot(&mut buckets, &review.submitted_at) {
      bucket.reviews.push(review);
    }
  }
  for comment in comments {
    if let Some(bucket) = slot(&mut buckets, &comment.created_at) {
      bucket.comments.push(comment);
    }
  }
  for commit in commits {
    if let Some(bucket) = slot(&mut buckets, &commit.author_date) {
      bucket.commits.push(commit);
    }
  }

  buckets.into_iter().collect()
}

fn slot<'a>(buckets: &'a mut BTreeMap<NaiveDate, DayBucket>, iso: &str) -> Option<&'a mut DayBucket> {
  day_in_report_tz(iso).and_then(|day| buckets.get_mut(&day))
}
