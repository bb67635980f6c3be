pub mod catalog;
pub mod configuration;
pub mod feed_client;
pub mod models;
pub mod navigator;
pub mod parse;
pub mod run;
pub mod view;
pub mod viewer;

pub use configuration::Settings;
pub use models::{Cli, Command};
pub use navigator::{Direction, Navigator};
