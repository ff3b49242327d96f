//! Scripted lookup service for exercising the state layer without a
//! network.

use kinema_api::traits::{
    DetailReply, MovieLookup, MovieRecord, MovieSummary, SearchPage, SearchReply, PAGE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FakeMode {
    Ok,
    Rejected(String),
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct FakeError(pub String);

/// Deterministic `MovieLookup`: serves `total_results` synthetic items,
/// ten per page, ids `tt0000`, `tt0001`, ... Titles embed the query and
/// index so tests can tell pages apart.
pub(crate) struct FakeLookup {
    pub total_results: u32,
    pub search_mode: FakeMode,
    pub detail_mode: FakeMode,
}

impl FakeLookup {
    pub fn with_total(total_results: u32) -> Self {
        Self {
            total_results,
            search_mode: FakeMode::Ok,
            detail_mode: FakeMode::Ok,
        }
    }
}

impl MovieLookup for FakeLookup {
    type Error = FakeError;

    async fn search(&self, query: &str, page: u32) -> Result<SearchReply, FakeError> {
        match &self.search_mode {
            FakeMode::Transport(message) => return Err(FakeError(message.clone())),
            FakeMode::Rejected(message) => {
                return Ok(SearchReply::Rejected {
                    message: message.clone(),
                })
            }
            FakeMode::Ok => {}
        }

        let start = (page - 1) * PAGE_SIZE;
        let count = self.total_results.saturating_sub(start).min(PAGE_SIZE);
        let items = (0..count)
            .map(|i| {
                let n = start + i;
                MovieSummary {
                    imdb_id: format!("tt{n:04}"),
                    title: format!("{query} {n}"),
                    year: "2005".into(),
                    poster: "N/A".into(),
                    kind: "movie".into(),
                }
            })
            .collect();

        Ok(SearchReply::Page(SearchPage {
            items,
            total_results: self.total_results,
        }))
    }

    async fn detail(&self, imdb_id: &str) -> Result<DetailReply, FakeError> {
        match &self.detail_mode {
            FakeMode::Transport(message) => return Err(FakeError(message.clone())),
            FakeMode::Rejected(message) => {
                return Ok(DetailReply::Rejected {
                    message: message.clone(),
                })
            }
            FakeMode::Ok => {}
        }

        Ok(DetailReply::Record(MovieRecord {
            title: format!("Title {imdb_id}"),
            year: "2005".into(),
            poster: "N/A".into(),
            plot: "Plot".into(),
            director: "Director".into(),
            actors: "Actors".into(),
            genre: "Action".into(),
            runtime: "120 min".into(),
            imdb_rating: "7.5".into(),
        }))
    }
}
