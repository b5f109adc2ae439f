// === Module Header (agents-tooling) START ===
// purpose: Confirm commented-on items and review candidates against their full threads/timelines
// role: extract/filtering
// inputs: GithubApi backend, target login, typed search hits
// outputs: Flat CommentItem and ReviewEvent lists for bucketization
// side_effects: Network calls through the backend, one task per item
// invariants:
// - Self-authored pull requests never yield review events
// - A candidate with no matching `reviewed` timeline event is dropped
// - Filtering happens only after an item's full page set is in
// errors: First failed fetch aborts the stage (collect short-circuits)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use rayon::prelude::*;

use crate::ext::serde_json::JsonPluck;
use crate::github::GithubApi;
use crate::model::{CommentItem, CommentedItem, PullCandidate, ReviewEvent};

/// Fetch every commented-on item's thread and keep the target user's comments.
pub fn extract_comments(api: &dyn GithubApi, login: &str, commented: &[CommentedItem]) -> Result<Vec<CommentItem>> {
  let per_thread: Vec<Vec<CommentItem>> = commented
    .par_iter()
    .map(|item| -> Result<Vec<CommentItem>> {
      let thread = api.list_comments(&item.comments_url)?;

      Ok(
        thread
          .iter()
          .filter(|c| c.pluck_str("user.login") == Some(login))
          .map(|c| CommentItem {
            html_url: c.pluck_string("html_url").unwrap_or_default(),
            created_at: c.pluck_string("created_at").unwrap_or_default(),
            author: login.to_string(),
          })
          .collect(),
      )
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(per_thread.into_iter().flatten().collect())
}

/// Confirm review candidates against their timelines.
///
/// Pull requests authored by the target user are not reviews and are skipped
/// before any timeline is fetched.
pub fn extract_reviews(api: &dyn GithubApi, login: &str, candidates: &[PullCandidate]) -> Result<Vec<ReviewEvent>> {
  let peers: Vec<&PullCandidate> = candidates
    .iter()
    .filter(|c| c.author.as_deref() != Some(login))
    .collect();

  let per_pull: Vec<Vec<ReviewEvent>> = peers
    .par_iter()
    .map(|candidate| -> Result<Vec<ReviewEvent>> {
      let timeline = api.list_timeline_events(&candidate.repo, candidate.number)?;

      Ok(
        timeline
          .iter()
          .filter(|ev| ev.pluck_str("event") == Some("reviewed") && ev.pluck_str("user.login") == Some(login))
          .map(|ev| ReviewEvent {
            pull_number: candidate.number,
            html_url: candidate.html_url.clone(),
            submitted_at: ev.pluck_string("submitted_at").unwrap_or_default(),
          })
          .collect(),
      )
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(per_pull.into_iter().flatten().collect())
}
