use std::fmt;

use anyhow::Context;
use indexmap::IndexMap;
use uuid::Uuid;

/// Identity of a remote read: a query name, optionally scoped to one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    name: &'static str,
    id: Option<Uuid>,
}

impl QueryKey {
    pub const fn of(name: &'static str) -> Self {
        Self { name, id: None }
    }

    pub const fn scoped(name: &'static str, id: Uuid) -> Self {
        Self { name, id: Some(id) }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}/{id}", self.name),
            None => f.write_str(self.name),
        }
    }
}

/// Lifecycle of a cache entry. `Stale` keeps the last value but signals the
/// next reader to refetch; `Error` keeps the last value too, so a failed
/// refresh never blanks a previously usable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Fetching,
    Fresh,
    Stale,
    Error,
}

/// Performs the actual remote read for a key.
pub trait Fetch<T> {
    fn fetch(&mut self, key: &QueryKey) -> anyhow::Result<T>;
}

#[derive(Debug)]
struct CacheEntry<T> {
    value: Option<T>,
    status: QueryStatus,
    error: Option<String>,
}

impl<T> CacheEntry<T> {
    fn empty() -> Self {
        Self {
            value: None,
            status: QueryStatus::Fetching,
            error: None,
        }
    }
}

/// Explicit cache of remote reads, keyed by query identity. Mutations never
/// write here directly; they invalidate or refetch by key and the read side
/// observes the updated entry.
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: IndexMap<QueryKey, CacheEntry<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key).and_then(|entry| entry.value.as_ref())
    }

    pub fn status(&self, key: &QueryKey) -> Option<QueryStatus> {
        self.entries.get(key).map(|entry| entry.status)
    }

    /// True only for the first load: a fetch in flight with nothing cached.
    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.status == QueryStatus::Fetching && entry.value.is_none())
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.status(key) == Some(QueryStatus::Fetching)
    }

    pub fn is_error(&self, key: &QueryKey) -> bool {
        self.status(key) == Some(QueryStatus::Error)
    }

    pub fn error(&self, key: &QueryKey) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.error.as_deref())
    }

    /// Marks the entry stale so the next `ensure` refetches. Unknown keys are
    /// a no-op; entries without a value are already due for a fetch.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key)
            && entry.status == QueryStatus::Fresh
        {
            entry.status = QueryStatus::Stale;
        }
    }

    /// Forces a re-synchronization and resolves once the entry is updated.
    pub fn refetch(&mut self, key: QueryKey, fetcher: &mut dyn Fetch<T>) -> anyhow::Result<&T> {
        self.entries
            .entry(key.clone())
            .or_insert_with(CacheEntry::empty)
            .status = QueryStatus::Fetching;
        match fetcher.fetch(&key) {
            Ok(value) => {
                let entry = self
                    .entries
                    .entry(key)
                    .or_insert_with(CacheEntry::empty);
                entry.status = QueryStatus::Fresh;
                entry.error = None;
                Ok(entry.value.insert(value))
            }
            Err(err) => {
                if let Some(entry) = self.entries.get_mut(&key) {
                    entry.status = QueryStatus::Error;
                    entry.error = Some(format!("{err:#}"));
                }
                Err(err).with_context(|| format!("query {key} failed"))
            }
        }
    }

    /// Returns the cached value when fresh, refetching otherwise.
    pub fn ensure(&mut self, key: QueryKey, fetcher: &mut dyn Fetch<T>) -> anyhow::Result<&T> {
        let fresh = matches!(
            self.entries.get(&key),
            Some(entry) if entry.status == QueryStatus::Fresh && entry.value.is_some()
        );
        if !fresh {
            return self.refetch(key, fetcher);
        }
        self.entries
            .get(&key)
            .and_then(|entry| entry.value.as_ref())
            .with_context(|| format!("query {key} lost its cached value"))
    }
}
