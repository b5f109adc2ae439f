// === Module Header (agents-tooling) START ===
// purpose: Fan out the four org-scoped search queries and type their raw hits
// role: fetch/orchestration
// inputs: GithubApi backend, target login, resolved DateRange
// outputs: ActivitySets feeding the extract/enrich stages
// side_effects: Network calls through the backend
// invariants:
// - The four queries run as one task group; results merge only after the join
// - Any failed query fails the whole fetch (no partial sets)
// errors: FetchFailed from the backend, propagated unchanged
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::ext::serde_json::JsonPluck;
use crate::github::GithubApi;
use crate::model::{ActivityItem, ActivitySets, Commit, CommentedItem, ItemKind, PullCandidate};
use crate::range::DateRange;

/// Every search query is scoped to this organization.
pub const GITHUB_ORG: &str = "Expensify";

const REPOS_URL_PREFIX: &str = "https://api.github.com/repos/";

/// Issue the four independent searches and type the results.
pub fn fetch_activity(api: &dyn GithubApi, login: &str, range: &DateRange) -> Result<ActivitySets> {
  let created_q = format!(
    "org:{} author:{} created:{}..{}",
    GITHUB_ORG,
    login,
    range.start_instant(),
    range.end_instant()
  );
  // Wide window: a review may land well after the pull request was opened.
  let reviewed_q = format!(
    "org:{} type:pr reviewed-by:{} created:{}..{}",
    GITHUB_ORG,
    login,
    range.lookback_instant(),
    range.end_instant()
  );
  let commented_q = format!(
    "org:{} commenter:{} updated:{}..{}",
    GITHUB_ORG,
    login,
    range.start_instant(),
    range.end_instant()
  );
  let commits_q = format!(
    "org:{} author:{} author-date:{}..{}",
    GITHUB_ORG,
    login,
    range.start_instant(),
    range.end_instant()
  );

  let ((created, commented), (reviewed, commits)) = rayon::join(
    || {
      rayon::join(
        || api.search_issues(&created_q),
        || api.search_issues(&commented_q),
      )
    },
    || {
      rayon::join(
        || api.search_issues(&reviewed_q),
        || api.search_commits(&commits_q),
      )
    },
  );

  Ok(ActivitySets {
    created: created?.iter().map(parse_activity_item).collect(),
    commented: commented?.iter().map(parse_commented_item).collect(),
    review_candidates: reviewed?.iter().map(parse_pull_candidate).collect(),
    commits: commits?.iter().map(parse_commit_hit).collect(),
  })
}

fn parse_activity_item(hit: &serde_json::Value) -> ActivityItem {
  let kind = if hit.pluck("pull_request").is_some() {
    ItemKind::PullRequest
  } else {
    ItemKind::Issue
  };

  ActivityItem {
    number: hit.pluck_i64("number").unwrap_or(0),
    html_url: hit.pluck_string("html_url").unwrap_or_default(),
    title: hit.pluck_string("title").unwrap_or_default(),
    kind,
    created_at: hit.pluck_string("created_at").unwrap_or_default(),
  }
}

fn parse_commented_item(hit: &serde_json::Value) -> CommentedItem {
  CommentedItem {
    number: hit.pluck_i64("number").unwrap_or(0),
    comments_url: hit.pluck_string("comments_url").unwrap_or_default(),
  }
}

fn parse_pull_candidate(hit: &serde_json::Value) -> PullCandidate {
  PullCandidate {
    number: hit.pluck_i64("number").unwrap_or(0),
    html_url: hit.pluck_string("html_url").unwrap_or_default(),
    repo: repo_from_api_url(hit.pluck_str("repository_url").unwrap_or_default()),
    author: hit.pluck_string("user.login"),
  }
}

fn parse_commit_hit(hit: &serde_json::Value) -> Commit {
  Commit {
    sha: hit.pluck_string("sha").unwrap_or_default(),
    html_url: hit.pluck_string("html_url").unwrap_or_default(),
    author_date: hit.pluck_string("commit.author.date").unwrap_or_default(),
    repo: hit.pluck_string("repository.full_name").unwrap_or_default(),
    pull_requests: Vec::new(),
  }
}

fn repo_from_api_url(repository_url: &str) -> String {
  repository_url
    .strip_prefix(REPOS_URL_PREFIX)
    .unwrap_or(repository_url)
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  fn activity_item_kind_tracks_pull_request_key() {
    let issue = parse_activity_item(&serde_json::json!({
      "number": 1, "html_url": "u", "title": "t", "created_at": "2021-01-01T12:00:00Z"
    }));
    assert_eq!(issue.kind, ItemKind::Issue);

    let pr = parse_activity_item(&serde_json::json!({
      "number": 2, "html_url": "u", "title": "t", "created_at": "2021-01-01T12:00:00Z",
      "pull_request": {"url": "x"}
    }));
    assert_eq!(pr.kind, ItemKind::PullRequest);
  }

  #[test]
  fn pull_candidate_derives_repo_from_api_url() {
    let c = parse_pull_candidate(&serde_json::json!({
      "number": 5,
      "html_url": "https://github.com/octo/widgets/pull/5",
      "repository_url": "https://api.github.com/repos/octo/widgets",
      "user": {"login": "alice"}
    }));
    assert_eq!(c.repo, "octo/widgets");
    assert_eq!(c.author.as_deref(), Some("alice"));
  }

  #[test]
  fn commit_hit_reads_nested_fields() {
    let c = parse_commit_hit(&serde_json::json!({
      "sha": "abc123",
      "html_url": "https://github.com/octo/widgets/commit/abc123",
      "commit": {"author": {"date": "2021-01-01T20:00:00Z"}},
      "repository": {"full_name": "octo/widgets"}
    }));
    assert_eq!(c.repo, "octo/widgets");
    assert_eq!(c.author_date, "2021-01-01T20:00:00Z");
    assert!(c.pull_requests.is_empty());
  }

  #[test]
  #[serial]
  fn fetch_activity_merges_all_four_queries() {
    std::env::set_var(
      "GDA_TEST_CREATED_JSON",
      serde_json::json!([{"number": 1, "html_url": "u1", "title": "one", "created_at": "2021-01-01T12:00:00Z"}]).to_string(),
    );
    std::env::set_var(
      "GDA_TEST_COMMENTED_JSON",
      serde_json::json!([{"number": 2, "comments_url": "https://api.github.com/repos/o/r/issues/2/comments"}]).to_string(),
    );
    std::env::set_var(
      "GDA_TEST_REVIEWED_JSON",
      serde_json::json!([{"number": 3, "html_url": "u3", "repository_url": "https://api.github.com/repos/o/r", "user": {"login": "bob"}}]).to_string(),
    );
    std::env::set_var(
      "GDA_TEST_COMMITS_JSON",
      serde_json::json!([{"sha": "abc", "html_url": "u4", "commit": {"author": {"date": "2021-01-01T20:00:00Z"}}, "repository": {"full_name": "o/r"}}]).to_string(),
    );

    let api = crate::github::api::GithubEnvApi;
    let range = DateRange::single("2021-01-01").unwrap();
    let sets = fetch_activity(&api, "me", &range).unwrap();

    assert_eq!(sets.created.len(), 1);
    assert_eq!(sets.commented.len(), 1);
    assert_eq!(sets.review_candidates.len(), 1);
    assert_eq!(sets.commits.len(), 1);

    std::env::remove_var("GDA_TEST_CREATED_JSON");
    std::env::remove_var("GDA_TEST_COMMENTED_JSON");
    std::env::remove_var("GDA_TEST_REVIEWED_JSON");
    std::env::remove_var("GDA_TEST_COMMITS_JSON");
  }
}
