use serde::Deserialize;

/// An RSS 2.0 document.
#[derive(Deserialize, Debug, Default)]
pub struct Rss {
    #[serde(rename = "@version", default)]
    pub version: String,
    pub channel: Channel,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Channel {
    pub title: String,
    /// Every `link` element, including namespaced ones like `atom:link`.
    #[serde(rename = "link")]
    pub links: Vec<Link>,
    pub description: String,
    #[serde(rename = "lastBuildDate")]
    pub last_build_date: String,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

/// A `link` element. Only its text matters, attributes are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "$text", default)]
    pub text: String,
}

impl From<&str> for Link {
    fn from(text: &str) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl Rss {
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }
}

impl Channel {
    /// The site link: the first `link` element with any text.
    pub fn link(&self) -> &str {
        self.links
            .iter()
            .map(|l| l.text.trim())
            .find(|t| !t.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_channel() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>xkcd.com</title>
    <link>https://xkcd.com/</link>
    <description>xkcd.com: A webcomic of romance and math humor.</description>
    <language>en</language>
    <item>
      <title>Tides</title>
      <link>https://xkcd.com/2/</link>
      <description>&lt;img src="https://imgs.xkcd.com/2.png" title="hover" /&gt;</description>
      <pubDate>Mon, 02 Jan 2023 15:04:05 -0000</pubDate>
      <guid>https://xkcd.com/2/</guid>
    </item>
    <item>
      <title>Moons</title>
      <link>https://xkcd.com/1/</link>
      <description><![CDATA[<img src="https://imgs.xkcd.com/1.png" title="moon" />]]></description>
    </item>
  </channel>
</rss>"#;
        let rss = Rss::from_xml(xml).unwrap();
        assert_eq!("2.0", rss.version);
        assert_eq!("xkcd.com", rss.channel.title);
        assert_eq!("https://xkcd.com/", rss.channel.link());
        assert_eq!("", rss.channel.last_build_date);
        assert_eq!(2, rss.channel.items.len());

        let first = &rss.channel.items[0];
        assert_eq!("Tides", first.title);
        assert_eq!(
            r#"<img src="https://imgs.xkcd.com/2.png" title="hover" />"#,
            first.description
        );
        assert_eq!("Mon, 02 Jan 2023 15:04:05 -0000", first.pub_date);

        let second = &rss.channel.items[1];
        assert_eq!("", second.pub_date);
        assert!(second.description.contains("1.png"));
    }

    #[test]
    fn atom_self_link() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <atom:link href="https://example.com/feed.xml" rel="self" type="application/rss+xml" />
    <title>Example Comic</title>
    <link>https://example.com/</link>
    <description>Daily strips</description>
    <item>
      <title>Strip 1</title>
      <link>https://example.com/1</link>
      <description>&lt;img src="https://example.com/1.png"&gt;</description>
    </item>
  </channel>
</rss>"#;
        let rss = Rss::from_xml(xml).unwrap();
        assert_eq!("Example Comic", rss.channel.title);
        assert_eq!("https://example.com/", rss.channel.link());
        assert_eq!(1, rss.channel.items.len());
        assert_eq!("https://example.com/1", rss.channel.items[0].link);
    }

    #[test]
    fn channel_without_link() {
        let rss = Rss::from_xml(r#"<rss><channel><title>t</title></channel></rss>"#).unwrap();
        assert_eq!("", rss.channel.link());
    }

    #[test]
    fn reject_garbage() {
        assert!(Rss::from_xml("<html><body>nope").is_err());
    }
}
