//! The movie record and its text representations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// One catalog entry, as stored in the JSONL dataset.
///
/// Missing or `null` fields fall back to empty strings and zeros.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// IMDb identifier, e.g. `tt0076759`.
    #[serde_as(as = "DefaultOnNull")]
    pub imdb_id: String,
    /// Release title.
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    /// Plot summary.
    #[serde_as(as = "DefaultOnNull")]
    pub overview: String,
    /// Marketing tagline.
    #[serde_as(as = "DefaultOnNull")]
    pub tagline: String,
    /// Comma-separated principal cast.
    #[serde_as(as = "DefaultOnNull")]
    pub cast: String,
    /// Genre names.
    #[serde_as(as = "DefaultOnNull")]
    pub genres: Vec<String>,
    /// Release year.
    #[serde_as(as = "DefaultOnNull")]
    pub year: u32,
    /// Average rating on a 0-10 scale.
    #[serde_as(as = "DefaultOnNull")]
    pub rating: f64,
    /// Runtime in minutes.
    #[serde_as(as = "DefaultOnNull")]
    pub runtime: u32,
}

/// A text-bearing field that can contribute to a document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    /// [`Movie::title`].
    Title,
    /// [`Movie::overview`].
    Overview,
    /// [`Movie::tagline`].
    Tagline,
    /// [`Movie::cast`].
    Cast,
    /// [`Movie::genres`], space separated.
    Genres,
}

impl TextField {
    /// Every field, in body order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Tagline,
        Self::Overview,
        Self::Genres,
        Self::Cast,
    ];

    /// Lowercase field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Overview => "overview",
            Self::Tagline => "tagline",
            Self::Cast => "cast",
            Self::Genres => "genres",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "overview" => Ok(Self::Overview),
            "tagline" => Ok(Self::Tagline),
            "cast" => Ok(Self::Cast),
            "genres" => Ok(Self::Genres),
            other => Err(format!("unknown movie field: {other}")),
        }
    }
}

impl Movie {
    /// Text of a single field.
    pub fn field(&self, field: TextField) -> String {
        match field {
            TextField::Title => self.title.clone(),
            TextField::Overview => self.overview.clone(),
            TextField::Tagline => self.tagline.clone(),
            TextField::Cast => self.cast.clone(),
            TextField::Genres => self.genres.join(" "),
        }
    }

    /// Concatenates the selected non-empty fields with single spaces.
    pub fn text(&self, fields: &[TextField]) -> String {
        fields
            .iter()
            .map(|&field| self.field(field))
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The full document body: every text field.
    pub fn to_text(&self) -> String {
        self.text(&TextField::ALL)
    }

    /// Title with the release year when known, e.g. `Star Wars (1977)`.
    pub fn display_title(&self) -> String {
        if self.year > 0 {
            format!("{} ({})", self.title, self.year)
        } else {
            self.title.clone()
        }
    }

    /// Overview cell for markdown result tables.
    ///
    /// `**tagline**<br/>[genres]<br/><br/>overview`, without the tagline part when
    /// there is no tagline.
    pub fn summary_markdown(&self) -> String {
        let tagline = if self.tagline.is_empty() {
            String::new()
        } else {
            format!("**{}**<br/>", self.tagline)
        };
        format!(
            "{tagline}[{}]<br/><br/>{}",
            self.genres.join(", "),
            self.overview
        )
    }

    /// Plain-text block describing the movie for a relevance prompt.
    pub fn prompt_block(&self) -> String {
        let mut block = format!("MovieID: {}\nTitle: {}\n", self.imdb_id, self.display_title());
        block.push_str(&format!("Genres: {}\n", self.genres.join(", ")));
        if !self.tagline.is_empty() {
            block.push_str(&format!("Tagline: {}\n", self.tagline));
        }
        block.push_str(&format!("Overview: {}\n", self.overview));
        if !self.cast.is_empty() {
            block.push_str(&format!("Cast: {}\n", self.cast));
        }
        block
    }
}
