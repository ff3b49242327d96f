use std::collections::HashMap;

use crate::error::KinemaError;
use crate::models::SearchItem;
use crate::store::SlotStore;

pub const FAVORITE_IDS_KEY: &str = "favorite_ids_v1";
pub const FAVORITE_ITEMS_KEY: &str = "favorite_items_v1";
pub const WATCHLIST_IDS_KEY: &str = "watchlist_ids_v1";
pub const WATCHLIST_ITEMS_KEY: &str = "watchlist_items_v1";

/// A persisted, deduplicated set of items keyed by IMDb ID.
///
/// Backed by two slots: an ordered id list and the item bodies. Every
/// mutation rewrites both slots in full. A failed write keeps the
/// in-memory state authoritative so the surface stays consistent even
/// when persistence is broken.
pub struct Collection {
    ids_key: &'static str,
    items_key: &'static str,
    ids: Vec<String>,
    items: HashMap<String, SearchItem>,
}

impl Collection {
    /// Load persisted membership. Missing or malformed slots yield an
    /// empty collection.
    pub fn load(store: &impl SlotStore, ids_key: &'static str, items_key: &'static str) -> Self {
        let mut collection = Self {
            ids_key,
            items_key,
            ids: Vec::new(),
            items: HashMap::new(),
        };

        if let Ok(Some(raw)) = store.get(ids_key) {
            if let Ok(ids) = serde_json::from_str::<Vec<String>>(&raw) {
                collection.ids = ids;
            }
        }
        if let Ok(Some(raw)) = store.get(items_key) {
            if let Ok(items) = serde_json::from_str::<Vec<SearchItem>>(&raw) {
                collection.items = items
                    .into_iter()
                    .map(|item| (item.imdb_id.clone(), item))
                    .collect();
            }
        }

        collection
    }

    pub fn load_favorites(store: &impl SlotStore) -> Self {
        Self::load(store, FAVORITE_IDS_KEY, FAVORITE_ITEMS_KEY)
    }

    pub fn load_watchlist(store: &impl SlotStore) -> Self {
        Self::load(store, WATCHLIST_IDS_KEY, WATCHLIST_ITEMS_KEY)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.items.contains_key(imdb_id)
    }

    pub fn get(&self, imdb_id: &str) -> Option<&SearchItem> {
        self.items.get(imdb_id)
    }

    /// Item bodies in membership order.
    pub fn items(&self) -> Vec<SearchItem> {
        self.ids
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect()
    }

    /// Add the item if absent, remove it if present. Returns whether the
    /// item is a member afterwards.
    ///
    /// The new membership is persisted immediately; a failed write is
    /// logged and the in-memory mutation kept.
    pub fn toggle(&mut self, store: &impl SlotStore, item: &SearchItem) -> bool {
        let member = if self.items.contains_key(&item.imdb_id) {
            self.ids.retain(|id| id != &item.imdb_id);
            self.items.remove(&item.imdb_id);
            false
        } else {
            self.ids.push(item.imdb_id.clone());
            self.items.insert(item.imdb_id.clone(), item.clone());
            true
        };

        if let Err(e) = self.save(store) {
            tracing::warn!(key = self.ids_key, "failed to persist collection: {e}");
        }
        member
    }

    fn save(&self, store: &impl SlotStore) -> Result<(), KinemaError> {
        let ids = serde_json::to_string(&self.ids)?;
        let items = serde_json::to_string(&self.items())?;
        store.set(self.ids_key, &ids)?;
        store.set(self.items_key, &items)?;
        Ok(())
    }
}
