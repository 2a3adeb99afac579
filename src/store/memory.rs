//! # In-Memory Store
//!
//! `RwLock`-guarded vec with a monotonically increasing id counter.
//! Concurrent requests serialize on the lock; identifiers are assigned
//! exactly once and never reused.

use std::sync::RwLock;

use crate::auto::Automobile;

use super::errors::{StoreError, StoreResult};
use super::AutoStore;

struct Inner {
    autos: Vec<Automobile>,
    next_id: i64,
}

/// In-memory implementation of [`AutoStore`].
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                autos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoStore for MemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Automobile>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(inner.autos.clone())
    }

    fn find_by_color_and_make_contains(
        &self,
        color: &str,
        make: &str,
    ) -> StoreResult<Vec<Automobile>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let matches = inner
            .autos
            .iter()
            .filter(|a| {
                let color_matches = match &a.color {
                    Some(c) => c.contains(color),
                    None => color.is_empty(),
                };
                color_matches && a.make.contains(make)
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn find_by_vin(&self, vin: &str) -> StoreResult<Option<Automobile>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(inner.autos.iter().find(|a| a.vin == vin).cloned())
    }

    fn save(&self, mut auto: Automobile) -> StoreResult<Automobile> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        match auto.id {
            None => {
                auto.id = Some(inner.next_id);
                inner.next_id += 1;
                inner.autos.push(auto.clone());
            }
            Some(id) => match inner.autos.iter_mut().find(|a| a.id == Some(id)) {
                Some(existing) => *existing = auto.clone(),
                None => inner.autos.push(auto.clone()),
            },
        }
        Ok(auto)
    }

    fn delete(&self, auto: &Automobile) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let idx = inner
            .autos
            .iter()
            .position(|a| a.id == auto.id)
            .ok_or(StoreError::NotFound)?;
        inner.autos.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mustang() -> Automobile {
        Automobile::new(1980, "Ford", "Mustang", "AABBCD")
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.save(mustang()).unwrap();
        let second = store.save(Automobile::new(2019, "Toyota", "Corolla", "XXYYZZ")).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[test]
    fn test_save_with_id_overwrites() {
        let store = MemoryStore::new();

        let mut saved = store.save(mustang()).unwrap();
        saved.color = Some("Red".to_string());
        store.save(saved.clone()).unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].color.as_deref(), Some("Red"));
    }

    #[test]
    fn test_find_all_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_vin_first_match() {
        let store = MemoryStore::new();

        let first = store.save(mustang()).unwrap();
        // Duplicate VIN accepted; lookup returns the earlier record.
        store.save(mustang()).unwrap();

        let found = store.find_by_vin("AABBCD").unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn test_find_by_vin_absent() {
        let store = MemoryStore::new();
        assert!(store.find_by_vin("NOPE").unwrap().is_none());
    }

    #[test]
    fn test_filtered_scan_is_anded_substring_match() {
        let store = MemoryStore::new();

        let mut red_ford = mustang();
        red_ford.color = Some("RED".to_string());
        store.save(red_ford).unwrap();

        let mut blue_ford = Automobile::new(1990, "Ford", "Escort", "BBCCDD");
        blue_ford.color = Some("BLUE".to_string());
        store.save(blue_ford).unwrap();

        let mut red_honda = Automobile::new(2000, "Honda", "Civic", "CCDDEE");
        red_honda.color = Some("DARKRED".to_string());
        store.save(red_honda).unwrap();

        // Substring on both fields, ANDed.
        let reds = store.find_by_color_and_make_contains("RED", "").unwrap();
        assert_eq!(reds.len(), 2);

        let red_fords = store.find_by_color_and_make_contains("RED", "Ford").unwrap();
        assert_eq!(red_fords.len(), 1);
        assert_eq!(red_fords[0].vin, "AABBCD");

        // Case-sensitive.
        assert!(store.find_by_color_and_make_contains("red", "").unwrap().is_empty());
    }

    #[test]
    fn test_colorless_record_matches_only_empty_color_filter() {
        let store = MemoryStore::new();
        store.save(mustang()).unwrap();

        assert_eq!(store.find_by_color_and_make_contains("", "").unwrap().len(), 1);
        assert!(store.find_by_color_and_make_contains("RED", "").unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_record() {
        let store = MemoryStore::new();
        let saved = store.save(mustang()).unwrap();

        store.delete(&saved).unwrap();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_absent_fails() {
        let store = MemoryStore::new();
        let never_saved = mustang();

        assert!(matches!(
            store.delete(&never_saved),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();

        let first = store.save(mustang()).unwrap();
        store.delete(&first).unwrap();

        let second = store.save(mustang()).unwrap();
        assert_eq!(second.id, Some(2));
    }
}
