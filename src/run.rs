use crate::catalog::{self, CatalogSource};
use crate::configuration::{FeedSource, Settings};
use crate::feed_client::FeedClient;
use crate::models::rss::Channel;
use crate::parse;
use crate::viewer;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, error, info};
use resolve_path::PathResolveExt;
use std::io;
use tokio::io::BufReader;

/// Downloads every configured feed and writes the catalog.
pub async fn fetch(settings: Settings) -> anyhow::Result<()> {
    let catalog_path = settings.catalog.resolve().into_owned();
    info!("Catalog: {}", catalog_path.display());
    debug!("Feeds {:?}", settings.feeds);

    let client = FeedClient::from_settings(&settings)?;
    let downloads = settings.feeds.iter().map(|feed| download(&client, feed));
    let channels: Vec<(Channel, &FeedSource)> = join_all(downloads)
        .await
        .into_iter()
        .flatten()
        .collect();

    let series = parse::build_catalog(
        channels
            .iter()
            .map(|(channel, feed)| (channel, feed.comment_attr(), feed.name.as_deref())),
        Utc::now(),
    );
    catalog::write(&catalog_path, &series)?;

    info!("Finished!");
    Ok(())
}

async fn download<'a>(
    client: &FeedClient,
    feed: &'a FeedSource,
) -> Option<(Channel, &'a FeedSource)> {
    match client.get_feed(&feed.url).await {
        Ok(rss) => {
            info!(
                "Downloaded {} items for {}",
                rss.channel.items.len(),
                feed.label()
            );
            Some((rss.channel, feed))
        }
        Err(e) => {
            error!("Unable to retrieve feed {}: {:#}, skipping", feed.label(), e);
            None
        }
    }
}

/// Browses a catalog interactively on stdin/stdout.
pub async fn view(settings: Settings, catalog: Option<String>) -> anyhow::Result<()> {
    let source = CatalogSource::parse(catalog.as_deref().unwrap_or(&settings.catalog));
    info!("Loading catalog from {:?}", source);

    let client = FeedClient::from_settings(&settings)?;
    let load = async move { catalog::load(&source, &client).await };
    let stdin = BufReader::new(tokio::io::stdin());
    viewer::session(load, stdin, &mut io::stdout()).await?;
    Ok(())
}
