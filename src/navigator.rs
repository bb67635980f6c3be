//! Paging through each series' history.
//!
//! Comics in a series are ordered newest first, so moving to an older comic
//! increments the series' cursor and moving to a newer one decrements it.

use crate::catalog::Catalog;
use crate::view::Slot;
use log::{debug, warn};

pub const NO_OLDER: &str =
    "No older comics in feed. (Click on the series title and visit the site's archive.)";
pub const NO_NEWER: &str = "No newer comics in feed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the series, the "prev" control.
    Older,
    /// Towards the most recent comic, the "next" control.
    Newer,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Older => 1,
            Direction::Newer => -1,
        }
    }
}

/// What became of an [`Navigator::advance`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The catalog has not arrived yet, nothing happened.
    NotLoaded,
    /// No series at that position, nothing happened.
    UnknownSeries,
    Moved { cursor: usize },
    NoOlder,
    NoNewer,
}

#[derive(Debug, Default)]
pub enum CatalogState {
    #[default]
    NotLoaded,
    Loaded(Catalog),
}

/// Owns the catalog and one display slot per series.
#[derive(Debug, Default)]
pub struct Navigator {
    state: CatalogState,
    slots: Vec<Slot>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the catalog and renders every series at its starting comic.
    pub fn load(&mut self, catalog: Catalog) {
        if self.is_loaded() {
            warn!("Catalog loaded twice, replacing it");
        }
        self.slots = catalog
            .iter()
            .enumerate()
            .map(|(id, series)| Slot::new(id, series))
            .collect();
        self.state = CatalogState::Loaded(catalog);
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CatalogState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            CatalogState::Loaded(catalog) => Some(catalog),
            CatalogState::NotLoaded => None,
        }
    }

    pub fn slot(&self, series: usize) -> Option<&Slot> {
        self.slots.get(series)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Moves one series' cursor a single step. Moves past either end are
    /// refused and reported in that series' title instead.
    pub fn advance(&mut self, series_index: usize, direction: Direction) -> Advance {
        let CatalogState::Loaded(catalog) = &mut self.state else {
            debug!("Ignoring {:?} on series {}, catalog not loaded", direction, series_index);
            return Advance::NotLoaded;
        };
        let (Some(series), Some(slot)) =
            (catalog.get_mut(series_index), self.slots.get_mut(series_index))
        else {
            warn!("No series at position {}", series_index);
            return Advance::UnknownSeries;
        };

        let candidate = series.index.checked_add_signed(direction.delta());
        match candidate {
            Some(c) if series.last_index().map_or(true, |last| c > last) => {
                slot.flash_title(NO_OLDER);
                Advance::NoOlder
            }
            None => {
                slot.flash_title(NO_NEWER);
                Advance::NoNewer
            }
            Some(c) => {
                series.index = c;
                debug!("Series {} now at comic {}", series_index, c);
                self.display_refresh(series_index);
                Advance::Moved { cursor: c }
            }
        }
    }

    /// Renders the comic under a series' cursor into its slot.
    pub fn display_refresh(&mut self, series_index: usize) {
        let CatalogState::Loaded(catalog) = &self.state else {
            return;
        };
        let (Some(series), Some(slot)) =
            (catalog.get(series_index), self.slots.get_mut(series_index))
        else {
            return;
        };
        if let Some(comic) = series.current() {
            slot.render(comic, series.index, series.comics.len());
        }
    }
}
