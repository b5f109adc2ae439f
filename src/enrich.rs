// === Module Header (agents-tooling) START ===
// purpose: Attach each commit's associated pull requests and drop commits without one by the target user
// role: enrich/cross-reference
// inputs: GithubApi backend, target login, commits from the search stage
// outputs: Commits whose pull_requests list is non-empty and wholly authored by the target user
// side_effects: One network call per commit through the backend
// invariants:
// - pull_requests on every surviving commit is non-empty
// - every attached pull's author equals the target login
// errors: First failed fetch aborts the stage
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use rayon::prelude::*;

use crate::ext::serde_json::JsonPluck;
use crate::github::GithubApi;
use crate::model::{AssociatedPull, Commit};

/// Cross-reference commits with the pull requests GitHub associates to them.
pub fn enrich_commits(api: &dyn GithubApi, login: &str, commits: Vec<Commit>) -> Result<Vec<Commit>> {
  let enriched: Vec<Commit> = commits
    .into_par_iter()
    .map(|mut commit| -> Result<Commit> {
      let pulls = api.list_pulls_for_commit(&commit.repo, &commit.sha)?;

      commit.pull_requests = pulls
        .iter()
        .filter(|pr| pr.pluck_str("user.login") == Some(login))
        .map(|pr| AssociatedPull {
          number: pr.pluck_i64("number").unwrap_or(0),
          html_url: pr.pluck_string("html_url").unwrap_or_default(),
          author: pr.pluck_string("user.login"),
        })
        .collect();

      Ok(commit)
    })
    .collect::<Result<Vec<_>>>()?;

  // Commits nobody can attribute to one of the user's pull requests drop out.
  Ok(enriched.into_iter().filter(|c| !c.pull_requests.is_empty()).collect())
}
