pub mod aggregate;
pub mod bucket;
pub mod cli;
pub mod enrich;
pub mod error;
pub mod ext;
pub mod extract;
pub mod fetch;
pub mod github;
pub mod model;
pub mod range;
pub mod render;
pub mod status;
pub mod util;
