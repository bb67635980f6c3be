use crate::configuration::Settings;
use crate::models::{ComicSeries, Rss};
use anyhow::Context;
use log::debug;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::time::Duration;
use url::Url;

/// HTTP client shared by feed downloads and remote catalog loads.
#[derive(Clone)]
pub struct FeedClient {
    http: ClientWithMiddleware,
}

impl FeedClient {
    pub fn new(timeout: Duration, retries: u32) -> anyhow::Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;

        // Retry transient failures with increasing intervals between attempts.
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(retries);
        let http = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { http })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(settings.timeout(), settings.retries)
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response, reqwest_middleware::Error> {
        debug!("GET {}", url);
        let res = self.http.get(url.clone()).send().await?;
        Ok(res.error_for_status()?)
    }

    pub async fn get_feed(&self, url: &Url) -> anyhow::Result<Rss> {
        let body = self
            .get(url)
            .await
            .with_context(|| format!("did not receive a response for {}", url))?
            .text()
            .await?;
        Rss::from_xml(&body).with_context(|| format!("problem reading RSS from {}", url))
    }

    pub async fn get_catalog(
        &self,
        url: &Url,
    ) -> Result<Vec<ComicSeries>, reqwest_middleware::Error> {
        Ok(self.get(url).await?.json().await?)
    }
}
