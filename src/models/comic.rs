use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// A single webcomic image and its metadata, as stored in the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Comic {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(rename = "ImageURL", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_comment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unix_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub pub_msg: String,
}

impl Comic {
    /// Replaces placeholder values with preferred defaults.
    pub fn sanitize(&mut self) {
        // Some feed generators refuse a blank title.
        if self.title == "." {
            self.title.clear();
        }
        if self.image_comment == self.title {
            self.image_comment.clear();
        }
    }

    /// Text shown in a slot's date line.
    pub fn date_text(&self) -> String {
        format!("{} {}", self.pub_msg, self.date)
    }
}

/// Comics published by a single site or author, newest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComicSeries {
    #[serde(deserialize_with = "null_as_default")]
    pub series_title: String,
    #[serde(rename = "SiteURL", deserialize_with = "null_as_default")]
    pub site_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Position of the comic currently on display.
    #[serde(deserialize_with = "cursor")]
    pub index: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub comics: Vec<Comic>,
}

// Malformed entries render blank rather than failing the whole catalog.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Negative positions read as the newest comic. Positions past the end are
// pulled back once the series' length is known.
fn cursor<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let index = Option::<i64>::deserialize(deserializer)?.unwrap_or_default();
    if index < 0 {
        warn!("Negative Index {}, showing the newest comic", index);
        return Ok(0);
    }
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

impl ComicSeries {
    pub fn sanitize(&mut self) {
        if self.description == "." || self.description == "Pipes Output" {
            self.description = " ".into();
        }
        for comic in self.comics.iter_mut() {
            if comic.title == self.series_title {
                comic.title.clear();
            }
        }
    }

    pub fn current(&self) -> Option<&Comic> {
        self.comics.get(self.index)
    }

    /// Unix date of the most recent comic, used to order a catalog.
    pub fn newest_date(&self) -> Option<i64> {
        self.comics.first().map(|c| c.unix_date)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.comics.len().checked_sub(1)
    }
}
