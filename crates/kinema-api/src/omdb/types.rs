use serde::Deserialize;

use crate::traits::{DetailReply, MovieRecord, MovieSummary, SearchPage, SearchReply};

// ── Wire types ──────────────────────────────────────────────────
//
// OMDb reports success in-band (`Response: "True"`/`"False"`) and
// encodes numbers as strings; every field may be absent on failure
// responses.

#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

// ── Conversions to shared trait types ───────────────────────────

impl OmdbSearchItem {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster: self.poster,
            kind: self.kind,
        }
    }
}

impl OmdbSearchResponse {
    pub fn into_reply(self) -> SearchReply {
        if self.response.eq_ignore_ascii_case("true") {
            let total_results = self
                .total_results
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0);
            SearchReply::Page(SearchPage {
                items: self.search.into_iter().map(|m| m.into_summary()).collect(),
                total_results,
            })
        } else {
            SearchReply::Rejected {
                message: self.error.unwrap_or_default(),
            }
        }
    }
}

impl OmdbDetailResponse {
    pub fn into_reply(self) -> DetailReply {
        if self.response.eq_ignore_ascii_case("true") {
            DetailReply::Record(MovieRecord {
                title: self.title,
                year: self.year,
                poster: self.poster,
                plot: self.plot,
                director: self.director,
                actors: self.actors,
                genre: self.genre,
                runtime: self.runtime,
                imdb_rating: self.imdb_rating,
            })
        } else {
            DetailReply::Rejected {
                message: self.error.unwrap_or_default(),
            }
        }
    }
}
