use anyhow::Result;
use clap::Parser;

use github_daily_activity::cli::{normalize_status, StatusCli};
use github_daily_activity::status::dump::segment;
use github_daily_activity::status::projects::load_project_table;
use github_daily_activity::status::render::render_dump;
use github_daily_activity::status::tagger::tag_dump;

fn main() -> Result<()> {
  // Phase 1: validate arguments before touching file contents
  let cfg = normalize_status(StatusCli::parse())?;

  // Phase 2: the two inputs load independently
  let dump_text = std::fs::read_to_string(&cfg.dump)?;
  let years = segment(&dump_text);
  let table = load_project_table(&cfg.projects)?;

  // Phase 3: tag, finalize, print
  let tagged = tag_dump(years, &table, cfg.home);
  print!("{}", render_dump(&tagged));

  Ok(())
}
