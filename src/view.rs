//! Display slots: what is currently shown for each series.

use crate::models::{Comic, ComicSeries};
use log::trace;
use std::fmt;

/// Fields of a slot that change through a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Comment,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FadingOut(Field),
    FadingIn(Field),
}

/// The rendered state of one series, built once when the catalog loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub id: usize,
    pub series_title: String,
    pub site_url: String,
    pub date: String,
    pub link: String,
    pub image: String,
    pub title: String,
    pub comment: String,
    /// Number of comics in the series and the one on display.
    pub position: Option<(usize, usize)>,
    phase: Phase,
}

impl Slot {
    pub fn new(id: usize, series: &ComicSeries) -> Self {
        let mut slot = Self {
            id,
            series_title: series.series_title.clone(),
            site_url: series.site_url.clone(),
            ..Default::default()
        };
        if let Some(comic) = series.current() {
            slot.render(comic, series.index, series.comics.len());
        }
        slot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Shows `comic`, the comic at `index` of a series of `count`.
    pub fn render(&mut self, comic: &Comic, index: usize, count: usize) {
        self.date = comic.date_text();
        self.link = comic.link.clone();
        self.transition(Field::Image, &comic.image_url);
        self.transition(Field::Title, &comic.title);
        self.transition(Field::Comment, &comic.image_comment);
        self.position = Some((index, count));
    }

    /// Puts a transient message where the title goes.
    pub fn flash_title(&mut self, message: &str) {
        self.transition(Field::Title, message);
    }

    // Runs Idle -> FadingOut -> swap -> FadingIn -> Idle for one field.
    fn transition(&mut self, field: Field, value: &str) {
        self.set_phase(Phase::FadingOut(field));
        let target = match field {
            Field::Title => &mut self.title,
            Field::Comment => &mut self.comment,
            Field::Image => &mut self.image,
        };
        target.clear();
        target.push_str(value);
        self.set_phase(Phase::FadingIn(field));
        self.set_phase(Phase::Idle);
    }

    fn set_phase(&mut self, phase: Phase) {
        trace!("slot {}: {:?} -> {:?}", self.id, self.phase, phase);
        self.phase = phase;
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.series_title)?;
        if let Some((index, count)) = self.position {
            write!(f, " ({}/{})", index + 1, count)?;
        }
        writeln!(f)?;
        if self.position.is_none() {
            return writeln!(f, "  (no comics)");
        }
        writeln!(f, "  {}", self.title)?;
        writeln!(f, "  {}", self.date)?;
        writeln!(f, "  image: {}", self.image)?;
        writeln!(f, "  link:  {}", self.link)?;
        if !self.comment.is_empty() {
            writeln!(f, "  \"{}\"", self.comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(n: usize) -> Comic {
        Comic {
            title: format!("title {}", n),
            link: format!("https://example.com/{}", n),
            image_url: format!("https://example.com/{}.png", n),
            image_comment: format!("comment {}", n),
            date: "Mon, 09 Jan 2023 12:00:00 UTC".into(),
            pub_msg: "Published 1 day ago on".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_renders_current() {
        let series = ComicSeries {
            series_title: "Moons".into(),
            index: 1,
            comics: vec![comic(0), comic(1)],
            ..Default::default()
        };
        let slot = Slot::new(4, &series);
        assert_eq!(4, slot.id);
        assert_eq!("title 1", slot.title);
        assert_eq!("comment 1", slot.comment);
        assert_eq!("https://example.com/1.png", slot.image);
        assert_eq!("https://example.com/1", slot.link);
        assert_eq!(
            "Published 1 day ago on Mon, 09 Jan 2023 12:00:00 UTC",
            slot.date
        );
        assert_eq!(Some((1, 2)), slot.position);
        assert_eq!(Phase::Idle, slot.phase());
    }

    #[test]
    fn flash_only_touches_title() {
        let series = ComicSeries {
            comics: vec![comic(0)],
            ..Default::default()
        };
        let mut slot = Slot::new(0, &series);
        slot.flash_title("No newer comics in feed.");
        assert_eq!("No newer comics in feed.", slot.title);
        assert_eq!("comment 0", slot.comment);
        assert_eq!(Phase::Idle, slot.phase());
    }

    #[test]
    fn empty_series_display() {
        let slot = Slot::new(2, &ComicSeries::default());
        assert_eq!(None, slot.position);
        assert!(slot.to_string().contains("(no comics)"));
    }

    #[test]
    fn display_shows_position() {
        let series = ComicSeries {
            series_title: "Moons".into(),
            comics: vec![comic(0), comic(1), comic(2)],
            ..Default::default()
        };
        let text = Slot::new(0, &series).to_string();
        assert!(text.starts_with("[0] Moons (1/3)\n"));
        assert!(text.contains("\"comment 0\""));
    }
}
