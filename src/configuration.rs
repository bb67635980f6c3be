use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default)]
    pub feeds: Vec<FeedSource>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub url: Url,
    pub name: Option<String>,
    /// Image attribute holding the comic's comment, `alt` when unset.
    pub img_comment: Option<String>,
    pub category: Option<String>,
}

fn default_catalog() -> String {
    "comics.json".into()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_retries() -> u32 {
    3
}

impl Settings {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(config_file))
            .add_source(Environment::with_prefix("COMICS"))
            .build()?;
        builder.try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FeedSource {
    /// How the feed is named in logs.
    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or(self.url.as_str());
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => format!("{} [{}]", name, category),
            _ => name.into(),
        }
    }

    pub fn comment_attr(&self) -> &str {
        match self.img_comment.as_deref() {
            Some(attr) if !attr.is_empty() => attr,
            _ => "alt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config() {
        let c = Settings::new("comics.test.json").unwrap();

        assert_eq!("./test/comics.json", c.catalog);
        assert_eq!(Duration::from_secs(10), c.timeout());
        assert_eq!(3, c.retries);

        let feed1 = FeedSource {
            url: Url::parse("https://xkcd.com/rss.xml").unwrap(),
            name: Some("xkcd".into()),
            img_comment: Some("title".into()),
            category: Some("science".into()),
        };
        let feed2 = FeedSource {
            url: Url::parse("https://www.qwantz.com/rssfeed.php").unwrap(),
            name: None,
            img_comment: None,
            category: None,
        };
        assert_eq!(vec![feed1, feed2], c.feeds);
        assert_eq!("title", c.feeds[0].comment_attr());
        assert_eq!("alt", c.feeds[1].comment_attr());
        assert_eq!("xkcd [science]", c.feeds[0].label());
        assert_eq!("https://www.qwantz.com/rssfeed.php", c.feeds[1].label());
    }

    #[test]
    fn missing_config() {
        assert!(Settings::new("does-not-exist.json").is_err());
    }
}
