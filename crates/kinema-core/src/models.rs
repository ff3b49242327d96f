use serde::{Deserialize, Serialize};

/// Sentinel the lookup service uses for a missing poster URL.
pub const NO_POSTER: &str = "N/A";

/// What kind of title a search item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Episode,
}

impl MediaKind {
    pub const ALL: &[MediaKind] = &[Self::Movie, Self::Series, Self::Episode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
        }
    }

    /// Parse a service-provided kind token. Unknown tokens fall back to `Movie`.
    pub fn parse(s: &str) -> Self {
        match s {
            "series" => Self::Series,
            "episode" => Self::Episode,
            _ => Self::Movie,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "Movie"),
            Self::Series => write!(f, "Series"),
            Self::Episode => write!(f, "Episode"),
        }
    }
}

/// A minimal movie/series record as returned by search. Identity is `imdb_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub imdb_id: String,
    pub title: String,
    /// Year text; series carry a trailing range, e.g. "2001–2006".
    pub year: String,
    pub poster: String,
    pub kind: MediaKind,
}

impl SearchItem {
    /// Poster URL, if the service provided one.
    pub fn poster_url(&self) -> Option<&str> {
        if self.poster.is_empty() || self.poster == NO_POSTER {
            None
        } else {
            Some(&self.poster)
        }
    }
}

/// Full record for a single title, fetched on demand. Replaced wholesale
/// on each detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub title: String,
    pub year: String,
    pub poster: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub genre: String,
    pub runtime: String,
    /// Decimal rating out of 10, or "N/A".
    pub imdb_rating: String,
}

impl DetailRecord {
    /// Numeric rating out of 10; 0.0 when absent or unparseable.
    pub fn rating(&self) -> f32 {
        self.imdb_rating.parse().unwrap_or(0.0)
    }

    /// Rating as a 0-100 percentage, for gauge-style display.
    pub fn rating_percent(&self) -> f32 {
        (self.rating() / 10.0 * 100.0).min(100.0)
    }

    /// YouTube search URL for this title's trailer.
    pub fn trailer_search_url(&self) -> String {
        let query = format!("{} {} trailer", self.title, self.year);
        url::Url::parse_with_params(
            "https://www.youtube.com/results",
            [("search_query", query.as_str())],
        )
        .map(|u| u.to_string())
        .unwrap_or_default()
    }
}
