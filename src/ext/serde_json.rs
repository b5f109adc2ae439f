// === Module Header (agents-tooling) START ===
// purpose: Dotted-path access into serde_json::Value for the GitHub wire shapes we read
// role: extension/serde_json
// outputs: JsonPluck trait with typed convenience getters
// invariants: No panics; missing or mistyped paths yield None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Navigate nested JSON objects via dotted paths like "user.login".
pub trait JsonPluck {
  fn pluck(&self, path: &str) -> Option<&serde_json::Value>;

  fn pluck_str(&self, path: &str) -> Option<&str> {
    self.pluck(path).and_then(|v| v.as_str())
  }

  fn pluck_string(&self, path: &str) -> Option<String> {
    self.pluck_str(path).map(|s| s.to_string())
  }

  fn pluck_i64(&self, path: &str) -> Option<i64> {
    self.pluck(path).and_then(|v| v.as_i64())
  }
}

impl JsonPluck for serde_json::Value {
  fn pluck(&self, path: &str) -> Option<&serde_json::Value> {
    let mut cur = self;

    for key in path.split('.') {
      cur = cur.get(key)?;
    }

    Some(cur)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pluck_top_level_and_nested() {
    let v: serde_json::Value = serde_json::json!({
      "title": "Hello",
      "user": { "login": "octocat" },
      "number": 7
    });

    assert_eq!(v.pluck_str("title"), Some("Hello"));
    assert_eq!(v.pluck_str("user.login"), Some("octocat"));
    assert_eq!(v.pluck_i64("number"), Some(7));
    assert!(v.pluck("user.missing").is_none());
    assert!(v.pluck("missing").is_none());
  }

  #[test]
  fn pluck_mistyped_values_yield_none() {
    let v: serde_json::Value = serde_json::json!({"number": "not a number"});
    assert_eq!(v.pluck_i64("number"), None);
    assert_eq!(v.pluck_str("number"), Some("not a number"));
  }
}
