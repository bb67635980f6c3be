//! Turns downloaded RSS channels into catalog series.

use crate::models::rss::{Channel, Item};
use crate::models::{Comic, ComicSeries};
use chrono::{DateTime, Local, Utc};
use log::{debug, warn};
use scraper::{Html, Selector};

const HOUR_SECS: i64 = 60 * 60;
const DAY_SECS: i64 = HOUR_SECS * 24;

/// Publication time of a single comic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubDate {
    pub date: String,
    pub unix_date: i64,
    pub pub_msg: String,
}

/// Parses an RSS `pubDate`, with or without a numeric zone.
pub fn parse_pub_date(pub_date: &str, now: DateTime<Utc>) -> Option<PubDate> {
    let parsed = DateTime::parse_from_rfc2822(pub_date.trim()).ok()?;
    let unix_date = parsed.timestamp();
    Some(PubDate {
        // Local time with a numeric zone, e.g. "Mon, 09 Jan 2023 13:00:00 +0100".
        date: parsed.with_timezone(&Local).to_rfc2822(),
        unix_date,
        pub_msg: last_update(unix_date, now.timestamp()),
    })
}

/// English sentence stating how long ago `then` was.
pub fn last_update(then: i64, now: i64) -> String {
    let diff = now - then;
    if diff > DAY_SECS {
        let days = diff / DAY_SECS;
        let plural = if days > 1 { "s" } else { "" };
        format!("Published {} day{} ago on", days, plural)
    } else if diff > HOUR_SECS {
        format!("Published {} hours ago on", diff / HOUR_SECS)
    } else {
        "Published less than 1 hour ago on".into()
    }
}

/// Builds a comic from one RSS item. The image is the first `<img>` of the
/// item's description.
pub fn parse_comic(item: &Item, comment_attr: &str, now: DateTime<Utc>) -> Comic {
    let mut comic = Comic {
        title: item.title.clone(),
        link: item.link.clone(),
        ..Default::default()
    };
    if let Some(pub_date) = parse_pub_date(&item.pub_date, now) {
        comic.set_pub_date(pub_date);
    }

    let fragment = Html::parse_fragment(&item.description);
    let img = Selector::parse("img").expect("static selector");
    if let Some(element) = fragment.select(&img).next() {
        let attrs = element.value();
        comic.image_url = attrs.attr("src").unwrap_or_default().into();
        comic.image_comment = attrs.attr(comment_attr).unwrap_or_default().into();
    }

    comic.sanitize();
    comic
}

/// Builds a series from a whole channel.
pub fn parse_series(channel: &Channel, comment_attr: &str, now: DateTime<Utc>) -> ComicSeries {
    let build_date = parse_pub_date(&channel.last_build_date, now);
    let comics = channel
        .items
        .iter()
        .map(|item| {
            let mut comic = parse_comic(item, comment_attr, now);
            // Some feeds leave pubDate off their items.
            if comic.date.is_empty() {
                match &build_date {
                    Some(d) => comic.set_pub_date(d.clone()),
                    None => debug!("No publication date for \"{}\"", item.title),
                }
            }
            comic
        })
        .collect();

    let mut series = ComicSeries {
        series_title: channel.title.clone(),
        site_url: channel.link().into(),
        description: channel.description.clone(),
        index: 0,
        comics,
    };
    series.sanitize();
    series
}

/// Converts every downloaded channel, dropping ones without comics, and
/// orders the result newest first.
pub fn build_catalog<'a, I>(channels: I, now: DateTime<Utc>) -> Vec<ComicSeries>
where
    I: IntoIterator<Item = (&'a Channel, &'a str, Option<&'a str>)>,
{
    let mut catalog: Vec<ComicSeries> = channels
        .into_iter()
        .filter_map(|(channel, comment_attr, name)| {
            let mut series = parse_series(channel, comment_attr, now);
            if let Some(name) = name {
                series.series_title = name.into();
            }
            if series.comics.is_empty() {
                warn!("No actual comics in feed for {}", series.series_title);
                return None;
            }
            Some(series)
        })
        .collect();
    sort_newest_first(&mut catalog);
    catalog
}

pub fn sort_newest_first(catalog: &mut [ComicSeries]) {
    catalog.sort_by(|a, b| b.newest_date().cmp(&a.newest_date()));
}

impl Comic {
    fn set_pub_date(&mut self, pub_date: PubDate) {
        self.date = pub_date.date;
        self.unix_date = pub_date.unix_date;
        self.pub_msg = pub_date.pub_msg;
    }
}
