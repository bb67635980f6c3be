use comic_feeds::run::{fetch, view};
use comic_feeds::{Cli, Command, Settings};
use env_logger::{Builder, Env, Target};
use log::error;
use std::process;

#[tokio::main]
async fn main() {
    // Init logging, stdout belongs to the viewer
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.init();

    // Parse Args
    let cli = Cli::new();

    // Parse Settings
    let settings = match Settings::new(&cli.config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Run
    let result = match cli.command {
        Command::Fetch => fetch(settings).await,
        Command::View { catalog } => view(settings, catalog).await,
    };
    if let Err(e) = result {
        error!("Application error: {:#}", e);
        process::exit(1);
    }
}
