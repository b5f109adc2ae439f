// === Module Header (agents-tooling) START ===
// purpose: Orchestrate the aggregation pipeline: identity, fetch fan-out, extract, enrich, bucket, render
// role: aggregate/orchestrator
// inputs: GithubApi backend, resolved DateRange
// outputs: Complete report text; nothing is emitted on failure
// side_effects: Network calls through the backend
// invariants:
// - Stages run in dependency order with a barrier between each
// - The comment and review extractions fan out side by side
// - The first stage failure aborts the run; no partial report escapes
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::bucket::bucketize;
use crate::enrich::enrich_commits;
use crate::extract::{extract_comments, extract_reviews};
use crate::fetch::fetch_activity;
use crate::github::GithubApi;
use crate::range::DateRange;
use crate::render::render_report;

/// Run the whole pipeline and return the rendered report.
pub fn run_activity_report(api: &dyn GithubApi, range: &DateRange) -> Result<String> {
  // Phase 1: whose activity are we reporting on
  let login = api.authenticated_login()?;

  // Phase 2: the four-way search fan-out
  let sets = fetch_activity(api, &login, range)?;

  // Phase 3: comments and reviews confirm independently, joined here
  let (comments, reviews) = rayon::join(
    || extract_comments(api, &login, &sets.commented),
    || extract_reviews(api, &login, &sets.review_candidates),
  );
  let comments = comments?;
  let reviews = reviews?;

  // Phase 4: cross-reference commits with their pull requests
  let commits = enrich_commits(api, &login, sets.commits)?;

  // Phase 5: bucket by Pacific calendar day and render
  let buckets = bucketize(range, sets.created, reviews, comments, commits);

  Ok(render_report(&buckets))
}
