use clap::{Parser, Subcommand};

#[derive(clap::Parser)]
#[command(about = "Collect webcomic feeds and page through them")]
pub struct Cli {
    #[arg(short, long, default_value = "comics")]
    pub config_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Download every configured feed and write the catalog
    Fetch,
    /// Browse the catalog one series at a time
    View {
        /// Catalog file path or http(s) URL, overriding the configured one
        #[arg(long)]
        catalog: Option<String>,
    },
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_test() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn view_override() {
        let cli = Cli::parse_from(["comics", "-c", "mine.toml", "view", "--catalog", "x.json"]);
        assert_eq!("mine.toml", cli.config_file);
        assert_eq!(
            Command::View {
                catalog: Some("x.json".into())
            },
            cli.command
        );
    }
}
