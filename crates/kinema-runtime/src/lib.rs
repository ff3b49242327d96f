mod session;
mod shortcuts;
#[cfg(test)]
mod testutil;

pub use session::{DetailLoader, SearchSession};
pub use shortcuts::Shortcut;

use kinema_api::traits::MovieLookup;
use kinema_core::collection::Collection;
use kinema_core::config::AppConfig;
use kinema_core::error::KinemaError;
use kinema_core::models::{DetailRecord, MediaKind, SearchItem};
use kinema_core::prefs::{Preferences, Theme};
use kinema_core::projection::{self, Filters, SortKey};
use kinema_core::recent::RecencyLog;
use kinema_core::store::{SlotStore, SqliteStore};

/// Top-level application state: one named sub-state per concern.
///
/// All mutation goes through the methods here, so every surface that
/// embeds this state observes the same invariants.
pub struct AppState<S> {
    store: S,
    session: SearchSession,
    detail: DetailLoader,
    favorites: Collection,
    watchlist: Collection,
    recent: RecencyLog,
    prefs: Preferences,
    filters: Filters,
    sort: SortKey,
    favorites_only: bool,
}

impl AppState<SqliteStore> {
    /// Open the configured on-disk store and load all persisted state.
    pub fn open() -> Result<Self, KinemaError> {
        let path = AppConfig::ensure_db_path()?;
        let store = SqliteStore::open(&path)?;
        Ok(Self::load(store))
    }
}

impl<S: SlotStore> AppState<S> {
    /// Load persisted collections and preferences from the store.
    pub fn load(store: S) -> Self {
        let favorites = Collection::load_favorites(&store);
        let watchlist = Collection::load_watchlist(&store);
        let recent = RecencyLog::load(&store);
        let prefs = Preferences::load(&store);

        Self {
            store,
            session: SearchSession::new(),
            detail: DetailLoader::default(),
            favorites,
            watchlist,
            recent,
            prefs,
            filters: Filters::default(),
            sort: SortKey::default(),
            favorites_only: false,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn detail(&self) -> &DetailLoader {
        &self.detail
    }

    // ── Search ──────────────────────────────────────────────────

    /// Run a fresh search from page 1. Leaves favorites-only mode and
    /// dismisses any open detail. Blank terms are ignored entirely.
    pub async fn search<L: MovieLookup>(&mut self, lookup: &L, term: &str) {
        if term.trim().is_empty() {
            return;
        }
        self.favorites_only = false;
        self.detail.close();
        self.session.load_page(lookup, term, 1).await;
    }

    pub async fn next_page<L: MovieLookup>(&mut self, lookup: &L) {
        if !self.session.can_advance() {
            return;
        }
        self.detail.close();
        self.session.next_page(lookup).await;
    }

    pub async fn prev_page<L: MovieLookup>(&mut self, lookup: &L) {
        if !self.session.can_retreat() {
            return;
        }
        self.detail.close();
        self.session.prev_page(lookup).await;
    }

    /// Reset the whole search surface: session, filters, sort,
    /// favorites-only mode, and any open detail.
    pub fn clear_search(&mut self) {
        self.session.clear();
        self.detail.close();
        self.filters = Filters::default();
        self.sort = SortKey::default();
        self.favorites_only = false;
    }

    // ── Detail ──────────────────────────────────────────────────

    /// Open the detail view for `imdb_id` and record the view in the
    /// recency log. Failures land on the shared error surface and leave
    /// any open detail untouched.
    pub async fn open_detail<L: MovieLookup>(&mut self, lookup: &L, imdb_id: &str) {
        self.session.clear_error();
        match self.detail.open(lookup, imdb_id).await {
            Ok(record) => {
                let item = self.recency_item(imdb_id, &record);
                self.recent.record_view(&self.store, item);
            }
            Err(message) => self.session.set_error(message),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Best available summary for the recency log: the current search
    /// results, then the favorites body, then the watchlist body, then
    /// an item synthesized from the detail fields.
    fn recency_item(&self, imdb_id: &str, record: &DetailRecord) -> SearchItem {
        self.session
            .results()
            .iter()
            .find(|m| m.imdb_id == imdb_id)
            .cloned()
            .or_else(|| self.favorites.get(imdb_id).cloned())
            .or_else(|| self.watchlist.get(imdb_id).cloned())
            .unwrap_or_else(|| SearchItem {
                imdb_id: imdb_id.to_string(),
                title: record.title.clone(),
                year: record.year.clone(),
                poster: record.poster.clone(),
                kind: MediaKind::Movie,
            })
    }

    // ── Collections ─────────────────────────────────────────────

    pub fn favorites(&self) -> &Collection {
        &self.favorites
    }

    pub fn watchlist(&self) -> &Collection {
        &self.watchlist
    }

    pub fn toggle_favorite(&mut self, item: &SearchItem) -> bool {
        self.favorites.toggle(&self.store, item)
    }

    pub fn toggle_watchlist(&mut self, item: &SearchItem) -> bool {
        self.watchlist.toggle(&self.store, item)
    }

    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.contains(imdb_id)
    }

    pub fn is_watchlisted(&self, imdb_id: &str) -> bool {
        self.watchlist.contains(imdb_id)
    }

    pub fn recent(&self) -> &[SearchItem] {
        self.recent.entries()
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear(&self.store);
    }

    // ── View ────────────────────────────────────────────────────

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        self.favorites_only = on;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// The list to display: the active base set (favorites or search
    /// results) run through the projection pipeline.
    pub fn visible(&self) -> Vec<SearchItem> {
        let base = if self.favorites_only {
            self.favorites.items()
        } else {
            self.session.results().to_vec()
        };
        projection::project(&base, &self.filters, self.sort)
    }

    /// Contextual placeholder for an empty visible list.
    pub fn empty_message(&self) -> &'static str {
        if self.favorites_only {
            "No favorites yet. Add some by clicking the star on any movie."
        } else if !self.session.query().is_empty() {
            "No results. Try a different title or spelling."
        } else {
            "Start by searching for your favourite movie or series."
        }
    }

    // ── Preferences ─────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.set_theme(&self.store, theme);
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.toggle_theme(&self.store);
    }

    // ── Shortcuts ───────────────────────────────────────────────

    /// Dispatch a keyboard shortcut. `typing` reports whether a text
    /// input has focus: page shortcuts are ignored while typing or while
    /// browsing favorites, close-detail applies unconditionally.
    pub async fn handle_shortcut<L: MovieLookup>(
        &mut self,
        lookup: &L,
        shortcut: Shortcut,
        typing: bool,
    ) {
        match shortcut {
            Shortcut::CloseDetail => self.detail.close(),
            Shortcut::NextPage if !typing && !self.favorites_only => self.next_page(lookup).await,
            Shortcut::PrevPage if !typing && !self.favorites_only => self.prev_page(lookup).await,
            _ => {}
        }
    }
}
