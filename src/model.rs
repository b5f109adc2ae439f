// === Module Header (agents-tooling) START ===
// purpose: Typed shapes for the activity aggregation pipeline (search hits, reviews, comments, commits, day buckets)
// role: model/types
// outputs: Plain structs passed between the fetch, extract, enrich, bucket, and render stages
// invariants: Commit.pull_requests is non-empty after enrichment; DayBucket lists are append-only during bucketization
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Whether a search hit is an issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
  Issue,
  PullRequest,
}

impl ItemKind {
  /// Short tag used in report lines.
  pub fn tag(&self) -> &'static str {
    match self {
      ItemKind::Issue => "Issue",
      ItemKind::PullRequest => "PR",
    }
  }
}

/// An issue or pull request created by the target user.
#[derive(Debug, Clone)]
pub struct ActivityItem {
  pub number: i64,
  pub html_url: String,
  pub title: String,
  pub kind: ItemKind,
  pub created_at: String,
}

/// An item the user commented on; carries the thread URL to page through.
#[derive(Debug, Clone)]
pub struct CommentedItem {
  pub number: i64,
  pub comments_url: String,
}

/// A single comment authored by the target user.
#[derive(Debug, Clone)]
pub struct CommentItem {
  pub html_url: String,
  pub created_at: String,
  pub author: String,
}

/// A pull request the search flagged as possibly reviewed by the user.
/// Confirmed (or discarded) against its timeline by the review extractor.
#[derive(Debug, Clone)]
pub struct PullCandidate {
  pub number: i64,
  pub html_url: String,
  /// owner/name, derived from the search hit's repository URL
  pub repo: String,
  pub author: Option<String>,
}

/// A confirmed `reviewed` timeline event by the target user.
#[derive(Debug, Clone)]
pub struct ReviewEvent {
  pub pull_number: i64,
  pub html_url: String,
  pub submitted_at: String,
}

/// A pull request associated with a commit, kept only when authored by the target user.
#[derive(Debug, Clone)]
pub struct AssociatedPull {
  pub number: i64,
  pub html_url: String,
  pub author: Option<String>,
}

/// A commit authored by the target user within the report range.
#[derive(Debug, Clone)]
pub struct Commit {
  pub sha: String,
  pub html_url: String,
  pub author_date: String,
  /// owner/name
  pub repo: String,
  pub pull_requests: Vec<AssociatedPull>,
}

/// Output of the four-way search fan-out, before extraction/enrichment.
#[derive(Debug)]
pub struct ActivitySets {
  pub created: Vec<ActivityItem>,
  pub review_candidates: Vec<PullCandidate>,
  pub commented: Vec<CommentedItem>,
  pub commits: Vec<Commit>,
}

/// Everything that happened on one calendar day in the report timezone.
#[derive(Debug, Default)]
pub struct DayBucket {
  pub created: Vec<ActivityItem>,
  pub reviews: Vec<ReviewEvent>,
  pub comments: Vec<CommentItem>,
  pub commits: Vec<Commit>,
}

impl DayBucket {
  pub fn is_empty(&self) -> bool {
    self.created.is_empty() && self.reviews.is_empty() && self.comments.is_empty() && self.commits.is_empty()
  }
}
