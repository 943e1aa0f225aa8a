//! Integration tests for the load-through protocol
//!
//! These tests drive cache groups through a registry with a struct-based
//! loader standing in for a slow database.

use loadcache_group::{loader_fn, Error, GroupRegistry, Loader};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, thiserror::Error)]
#[error("{key} not exist")]
struct NotFound {
    key: String,
}

/// In-memory "database" that counts how often each key is fetched
#[derive(Default)]
struct Database {
    rows: Mutex<HashMap<String, String>>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl Database {
    fn with_rows(rows: &[(&str, &str)]) -> Arc<Self> {
        let db = Self::default();
        {
            let mut table = db.rows.lock();
            for (k, v) in rows {
                table.insert((*k).to_string(), (*v).to_string());
            }
        }
        Arc::new(db)
    }

    fn fetches(&self, key: &str) -> usize {
        self.fetches.lock().get(key).copied().unwrap_or(0)
    }

    fn set(&self, key: &str, value: &str) {
        self.rows.lock().insert(key.to_string(), value.to_string());
    }
}

impl Loader for Database {
    fn fetch(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        *self.fetches.lock().entry(key.to_string()).or_insert(0) += 1;
        match self.rows.lock().get(key) {
            Some(value) => Ok(value.clone().into_bytes()),
            None => Err(NotFound {
                key: key.to_string(),
            }
            .into()),
        }
    }
}

fn scores() -> Arc<Database> {
    Database::with_rows(&[("Tom", "630"), ("Jack", "589"), ("Sam", "567")])
}

#[test]
fn test_each_key_loaded_once_then_served_from_cache() {
    let db = scores();
    let registry = GroupRegistry::new();
    let group = registry.create_group("scores", 2 << 10, Arc::clone(&db));

    for (key, expected) in [("Tom", "630"), ("Jack", "589"), ("Sam", "567")] {
        let value = group.get(key).expect("miss should load from the database");
        assert_eq!(value.to_string(), expected);
        assert_eq!(db.fetches(key), 1);

        let value = group.get(key).expect("hit should come from the cache");
        assert_eq!(value.to_string(), expected);
        assert_eq!(db.fetches(key), 1, "cache hit must not reach the loader");
    }
}

#[test]
fn test_empty_key_is_invalid_argument() {
    let db = scores();
    let registry = GroupRegistry::new();
    let group = registry.create_group("scores", 2 << 10, Arc::clone(&db));

    assert!(matches!(group.get(""), Err(Error::InvalidArgument { .. })));
    assert_eq!(db.fetches(""), 0);
}

#[test]
fn test_loader_error_propagates_verbatim_without_negative_caching() {
    let db = scores();
    let registry = GroupRegistry::new();
    let group = registry.create_group("scores", 2 << 10, Arc::clone(&db));

    let err = group.get("unknown").unwrap_err();
    assert_eq!(err.to_string(), "unknown not exist");
    match &err {
        Error::Loader(source) => {
            let not_found = source.downcast_ref::<NotFound>().expect("loader error type preserved");
            assert_eq!(not_found.key, "unknown");
        }
        other => panic!("expected loader error, got {other:?}"),
    }
    assert_eq!(group.cached_entries(), 0);

    // The next read goes back to the source, which now has the row
    db.set("unknown", "100");
    assert_eq!(group.get("unknown").unwrap().to_string(), "100");
    assert_eq!(db.fetches("unknown"), 2);
}

#[test]
fn test_cached_value_is_isolated_from_source_changes() {
    let db = scores();
    let registry = GroupRegistry::new();
    let group = registry.create_group("scores", 2 << 10, Arc::clone(&db));

    let first = group.get("Tom").unwrap();
    db.set("Tom", "999");
    let second = group.get("Tom").unwrap();

    assert_eq!(first, second);
    assert_eq!(second.to_string(), "630");
}

#[test]
fn test_group_budget_evicts_and_reloads() {
    let db = scores();
    let registry = GroupRegistry::new();
    // Each entry is 3-4 bytes of key plus 3 bytes of value; room for one
    let group = registry.create_group("tiny", 7, Arc::clone(&db));

    group.get("Tom").unwrap();
    group.get("Sam").unwrap();
    assert_eq!(group.cached_entries(), 1);
    assert!(group.cached_bytes() <= 7);

    group.get("Tom").unwrap();
    assert_eq!(db.fetches("Tom"), 2, "evicted key must be reloaded");
}

#[test]
fn test_groups_are_isolated_namespaces() {
    let registry = GroupRegistry::new();
    let upper = registry.create_group(
        "upper",
        0,
        loader_fn(|key| Ok(key.to_uppercase().into_bytes())),
    );
    let lower = registry.create_group(
        "lower",
        0,
        loader_fn(|key| Ok(key.to_lowercase().into_bytes())),
    );

    assert_eq!(upper.get("MiXeD").unwrap().to_string(), "MIXED");
    assert_eq!(lower.get("MiXeD").unwrap().to_string(), "mixed");
    assert_eq!(
        registry.get_group("upper").unwrap().get("MiXeD").unwrap().to_string(),
        "MIXED"
    );
}

#[test]
fn test_concurrent_reads_across_threads() {
    let loads = Arc::new(AtomicUsize::new(0));
    let registry = Arc::new(GroupRegistry::new());
    {
        let loads = Arc::clone(&loads);
        registry
            .group("squares")
            .cache_bytes(0)
            .loader_fn(move |key| {
                loads.fetch_add(1, Ordering::SeqCst);
                let n: u64 = key.parse()?;
                Ok((n * n).to_string().into_bytes())
            })
            .create()
            .unwrap();
    }

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let group = registry.get_group("squares").expect("group registered");
                barrier.wait();
                for n in 0..50_u64 {
                    let value = group.get(&n.to_string()).unwrap();
                    assert_eq!(value.to_string(), (n * n).to_string());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let group = registry.get_group("squares").unwrap();
    assert_eq!(group.cached_entries(), 50);
    // Concurrent misses on one key are not collapsed, so each key may load
    // more than once, but never more than once per reader.
    let total = loads.load(Ordering::SeqCst);
    assert!((50..=50 * threads).contains(&total), "unexpected load count {total}");
}

#[test]
fn test_parse_failure_from_loader_surfaces() {
    let registry = GroupRegistry::new();
    let group = registry
        .group("squares")
        .loader_fn(|key| {
            let n: u64 = key.parse()?;
            Ok(n.to_string().into_bytes())
        })
        .create()
        .unwrap();

    let err = group.get("not-a-number").unwrap_err();
    match err {
        Error::Loader(source) => {
            assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
        }
        other => panic!("expected loader error, got {other:?}"),
    }
}
