use crate::feed_client::FeedClient;
use crate::models::ComicSeries;
use log::{info, warn};
use resolve_path::PathResolveExt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not download catalog: {0}")]
    Http(#[from] reqwest_middleware::Error),
}

/// Where a catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(Url),
    Path(PathBuf),
}

impl CatalogSource {
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Self::Url(url),
            _ => Self::Path(s.resolve().into_owned()),
        }
    }
}

/// Every series on offer, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    series: Vec<ComicSeries>,
}

impl Catalog {
    /// Builds a catalog, pulling any out of range cursor back to the
    /// nearest comic.
    pub fn new(mut series: Vec<ComicSeries>) -> Self {
        for s in series.iter_mut() {
            let last = s.last_index().unwrap_or(0);
            if s.index > last {
                warn!(
                    "Index {} is past the end of \"{}\", showing comic {}",
                    s.index, s.series_title, last
                );
                s.index = last;
            }
        }
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ComicSeries> {
        self.series.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ComicSeries> {
        self.series.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComicSeries> {
        self.series.iter()
    }
}

pub async fn load(source: &CatalogSource, client: &FeedClient) -> Result<Catalog, CatalogError> {
    let series = match source {
        CatalogSource::Url(url) => client.get_catalog(url).await?,
        CatalogSource::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| CatalogError::Io {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_slice(&bytes)?
        }
    };
    let catalog = Catalog::new(series);
    info!("Loaded {} series", catalog.len());
    Ok(catalog)
}

pub fn write(path: &Path, series: &[ComicSeries]) -> Result<(), CatalogError> {
    let io_err = |e: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let json = serde_json::to_vec(series)?;
    fs::write(path, json).map_err(io_err)?;
    info!("Wrote {} series to {}", series.len(), path.display());
    Ok(())
}
