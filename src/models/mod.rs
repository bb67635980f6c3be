pub mod cli;
pub mod comic;
pub mod rss;

pub use cli::{Cli, Command};
pub use comic::{Comic, ComicSeries};
pub use rss::Rss;
