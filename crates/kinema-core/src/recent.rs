use crate::models::SearchItem;
use crate::store::SlotStore;

pub const RECENT_KEY: &str = "recent_v1";

/// Maximum number of entries kept in the recently-viewed log.
pub const RECENT_CAP: usize = 8;

/// Bounded most-recently-viewed list, newest first, no duplicate ids.
#[derive(Debug, Default)]
pub struct RecencyLog {
    entries: Vec<SearchItem>,
}

impl RecencyLog {
    /// Load the persisted log. Missing or malformed content yields an
    /// empty log.
    pub fn load(store: &impl SlotStore) -> Self {
        let entries = store
            .get(RECENT_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a view. Re-viewing an item moves it to the front rather
    /// than adding a second entry; the log is then truncated and
    /// persisted. Persistence failures are logged only.
    pub fn record_view(&mut self, store: &impl SlotStore, item: SearchItem) {
        self.entries.retain(|m| m.imdb_id != item.imdb_id);
        self.entries.insert(0, item);
        self.entries.truncate(RECENT_CAP);

        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(e) = store.set(RECENT_KEY, &raw) {
                    tracing::warn!("failed to persist recency log: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize recency log: {e}"),
        }
    }

    /// Empty the log and drop its persisted record.
    pub fn clear(&mut self, store: &impl SlotStore) {
        self.entries.clear();
        if let Err(e) = store.remove(RECENT_KEY) {
            tracing::warn!("failed to clear recency log: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use crate::store::SqliteStore;

    fn item(id: &str) -> SearchItem {
        SearchItem {
            imdb_id: id.into(),
            title: format!("Title {id}"),
            year: "2005".into(),
            poster: "N/A".into(),
            kind: MediaKind::Movie,
        }
    }

    #[test]
    fn test_reviewing_moves_to_front_without_duplicating() {
        let store = SqliteStore::open_memory().unwrap();
        let mut log = RecencyLog::load(&store);

        log.record_view(&store, item("ttA"));
        log.record_view(&store, item("ttB"));
        log.record_view(&store, item("ttA"));

        let ids: Vec<&str> = log.entries().iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["ttA", "ttB"]);
    }

    #[test]
    fn test_caps_at_eight_most_recent() {
        let store = SqliteStore::open_memory().unwrap();
        let mut log = RecencyLog::load(&store);

        for i in 0..9 {
            log.record_view(&store, item(&format!("tt{i:03}")));
        }

        assert_eq!(log.len(), RECENT_CAP);
        assert_eq!(log.entries()[0].imdb_id, "tt008");
        assert_eq!(log.entries()[7].imdb_id, "tt001");
        assert!(!log.entries().iter().any(|m| m.imdb_id == "tt000"));
    }

    #[test]
    fn test_log_survives_reload() {
        let store = SqliteStore::open_memory().unwrap();
        let mut log = RecencyLog::load(&store);
        log.record_view(&store, item("ttA"));
        log.record_view(&store, item("ttB"));

        let reloaded = RecencyLog::load(&store);
        let ids: Vec<&str> = reloaded.entries().iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["ttB", "ttA"]);
    }

    #[test]
    fn test_clear_removes_persisted_record() {
        let store = SqliteStore::open_memory().unwrap();
        let mut log = RecencyLog::load(&store);
        log.record_view(&store, item("ttA"));

        log.clear(&store);
        assert!(log.is_empty());
        assert!(store.get(RECENT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let store = SqliteStore::open_memory().unwrap();
        store.set(RECENT_KEY, "not json at all").unwrap();
        assert!(RecencyLog::load(&store).is_empty());
    }
}
