use kinema_api::traits::{
    DetailReply, MovieLookup, MovieRecord, MovieSummary, SearchReply, PAGE_SIZE,
};
use kinema_core::models::{DetailRecord, MediaKind, SearchItem};

/// Fallback when a transport failure carries no message of its own.
const GENERIC_ERROR: &str = "Something went wrong";
/// Fallback when the service rejects a search without a message.
const NO_RESULTS: &str = "No results found";
/// Fallback when a detail fetch fails without a message.
const DETAIL_ERROR: &str = "Failed to load details";

/// Search session: owns the query text, the current result page, and the
/// user-visible error surface.
///
/// `results` is replaced wholesale per page load, never merged across
/// pages.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    current_page: u32,
    total_pages: u32,
    results: Vec<SearchItem>,
    last_error: Option<String>,
    loading: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_pages: 1,
            results: Vec::new(),
            last_error: None,
            loading: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn results(&self) -> &[SearchItem] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Load one result page for `term`. Blank terms are ignored without
    /// touching any state.
    ///
    /// An in-band rejection clears the results and resets paging; a
    /// transport failure only records the error and leaves the results
    /// as they were.
    pub async fn load_page<L: MovieLookup>(&mut self, lookup: &L, term: &str, page: u32) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        self.loading = true;
        self.last_error = None;
        self.query = term.to_string();

        match lookup.search(term, page).await {
            Ok(SearchReply::Page(reply)) => {
                self.results = reply.items.into_iter().map(to_search_item).collect();
                self.current_page = page;
                self.total_pages = total_pages(reply.total_results);
            }
            Ok(SearchReply::Rejected { message }) => {
                self.results.clear();
                self.last_error = Some(or_fallback(message, NO_RESULTS));
                self.current_page = 1;
                self.total_pages = 1;
            }
            Err(e) => {
                tracing::warn!("search failed: {e}");
                self.last_error = Some(or_fallback(e.to_string(), GENERIC_ERROR));
            }
        }
        self.loading = false;
    }

    /// Whether a next-page load would be within bounds.
    pub fn can_advance(&self) -> bool {
        !self.query.trim().is_empty() && self.current_page < self.total_pages
    }

    /// Whether a previous-page load would be within bounds.
    pub fn can_retreat(&self) -> bool {
        !self.query.trim().is_empty() && self.current_page > 1
    }

    pub async fn next_page<L: MovieLookup>(&mut self, lookup: &L) {
        if !self.can_advance() {
            return;
        }
        let term = self.query.clone();
        let page = self.current_page + 1;
        self.load_page(lookup, &term, page).await;
    }

    pub async fn prev_page<L: MovieLookup>(&mut self, lookup: &L) {
        if !self.can_retreat() {
            return;
        }
        let term = self.query.clone();
        let page = self.current_page - 1;
        self.load_page(lookup, &term, page).await;
    }

    /// Reset query, results, error, and paging to their initial state.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.last_error = None;
        self.current_page = 1;
        self.total_pages = 1;
    }
}

/// Holds the single currently inspected record, fetched on demand.
#[derive(Debug, Default)]
pub struct DetailLoader {
    record: Option<DetailRecord>,
    loading: bool,
}

impl DetailLoader {
    pub fn record(&self) -> Option<&DetailRecord> {
        self.record.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn close(&mut self) {
        self.record = None;
    }

    /// Fetch and open the record for `imdb_id`.
    ///
    /// On failure the previously open record is left untouched and the
    /// error message is returned for the caller to surface.
    pub async fn open<L: MovieLookup>(
        &mut self,
        lookup: &L,
        imdb_id: &str,
    ) -> Result<DetailRecord, String> {
        self.loading = true;
        let outcome = match lookup.detail(imdb_id).await {
            Ok(DetailReply::Record(record)) => {
                let record = to_detail_record(record);
                self.record = Some(record.clone());
                Ok(record)
            }
            Ok(DetailReply::Rejected { message }) => Err(or_fallback(message, DETAIL_ERROR)),
            Err(e) => {
                tracing::warn!("detail fetch failed: {e}");
                Err(or_fallback(e.to_string(), DETAIL_ERROR))
            }
        };
        self.loading = false;
        outcome
    }
}

// ── Wire-to-model conversions ───────────────────────────────────

pub(crate) fn to_search_item(summary: MovieSummary) -> SearchItem {
    SearchItem {
        imdb_id: summary.imdb_id,
        title: summary.title,
        year: summary.year,
        poster: summary.poster,
        kind: MediaKind::parse(&summary.kind),
    }
}

pub(crate) fn to_detail_record(record: MovieRecord) -> DetailRecord {
    DetailRecord {
        title: record.title,
        year: record.year,
        poster: record.poster,
        plot: record.plot,
        director: record.director,
        actors: record.actors,
        genre: record.genre,
        runtime: record.runtime,
        imdb_rating: record.imdb_rating,
    }
}

fn total_pages(total_results: u32) -> u32 {
    if total_results > 0 {
        total_results.div_ceil(PAGE_SIZE)
    } else {
        1
    }
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
