// Status-dump pipeline: segment the dump, load the project table, tag lines
// with cost centers, finalize monthly totals, render.

pub mod dump;
pub mod projects;
pub mod render;
pub mod tagger;
