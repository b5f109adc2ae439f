// GitHub REST integration: the `GithubApi` seam plus its HTTP and env-fixture backends.

pub mod api;

pub use api::{build_api, GithubApi};
