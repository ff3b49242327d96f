//! Trait definitions for the remote movie lookup service.
//!
//! The concrete client (OMDb) implements this trait, allowing the
//! application state to be service-agnostic and exercised against a
//! scripted fake in tests.

use std::future::Future;

/// Number of results the service returns per search page.
pub const PAGE_SIZE: u32 = 10;

/// A unified movie lookup interface.
pub trait MovieLookup: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search by title, one page at a time (`page` is 1-based).
    fn search(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchReply, Self::Error>> + Send;

    /// Fetch the full record for one title.
    fn detail(
        &self,
        imdb_id: &str,
    ) -> impl Future<Output = Result<DetailReply, Self::Error>> + Send;
}

/// A search result from the lookup service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub kind: String,
}

/// Full record for one title.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub poster: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub genre: String,
    pub runtime: String,
    pub imdb_rating: String,
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    pub total_results: u32,
}

/// Outcome of a search call that completed at the transport level.
///
/// The service reports failures in-band: an HTTP-success response can
/// still carry a rejection message instead of results.
#[derive(Debug, Clone)]
pub enum SearchReply {
    Page(SearchPage),
    Rejected { message: String },
}

/// Outcome of a detail call that completed at the transport level.
#[derive(Debug, Clone)]
pub enum DetailReply {
    Record(MovieRecord),
    Rejected { message: String },
}
