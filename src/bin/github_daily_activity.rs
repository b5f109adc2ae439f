use anyhow::Result;
use clap::Parser;

use github_daily_activity::aggregate::run_activity_report;
use github_daily_activity::cli::{normalize_activity, ActivityCli};
use github_daily_activity::github::build_api;
use github_daily_activity::util;

fn main() -> Result<()> {
  let cli = ActivityCli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<ActivityCli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize_activity(cli)?;

  // Phase 2: select API backend
  let api = build_api(cfg.token.clone());

  // Phase 3: run the pipeline; nothing prints unless every stage succeeded
  let report = run_activity_report(api.as_ref(), &cfg.range)?;
  print!("{}", report);

  Ok(())
}
