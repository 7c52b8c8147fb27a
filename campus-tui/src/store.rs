//! Shared in-memory cache for API payloads.
//!
//! One `Store` lives on the `App` for the lifetime of the process and is
//! passed by reference into loaders and views; repeated visits to the same
//! page read the cached entry instead of refetching. Entries are replaced
//! wholesale on insert (last writer wins) and never expire on their own.

use campus_core::{
    ColorSettings, ListAcademicYearsResponse, ListClassesResponse, ListTeachersResponse,
    ListTeamsResponse, PageDocument,
};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Cache key, one variant per page kind. Content pages are keyed by slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Page(String),
    Teams,
    Teachers,
    Classes,
    AcademicYears,
}

/// What a content page caches: the document plus the shared color
/// settings it was fetched together with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBundle {
    pub document: PageDocument,
    pub colors: ColorSettings,
}

/// Cached value, matching the key's variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    Page(PageBundle),
    Teams(ListTeamsResponse),
    Teachers(ListTeachersResponse),
    Classes(ListClassesResponse),
    AcademicYears(ListAcademicYearsResponse),
}

pub struct Store {
    entries: HashMap<CacheKey, CacheEntry>,
    subscribers: Vec<mpsc::UnboundedSender<CacheKey>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register for change notification. Every insert and remove publishes
    /// the affected key; dropped receivers are pruned on the next publish.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CacheKey> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn get(&self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Replace the entry for `key`, leaving every other key untouched.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        self.entries.insert(key.clone(), entry);
        self.publish(key);
    }

    pub fn remove(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.publish(key.clone());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Typed accessors for the views.

    pub fn page(&self, slug: &str) -> Option<&PageBundle> {
        match self.get(&CacheKey::Page(slug.to_string())) {
            Some(CacheEntry::Page(bundle)) => Some(bundle),
            _ => None,
        }
    }

    pub fn teams(&self) -> Option<&ListTeamsResponse> {
        match self.get(&CacheKey::Teams) {
            Some(CacheEntry::Teams(response)) => Some(response),
            _ => None,
        }
    }

    pub fn teachers(&self) -> Option<&ListTeachersResponse> {
        match self.get(&CacheKey::Teachers) {
            Some(CacheEntry::Teachers(response)) => Some(response),
            _ => None,
        }
    }

    pub fn classes(&self) -> Option<&ListClassesResponse> {
        match self.get(&CacheKey::Classes) {
            Some(CacheEntry::Classes(response)) => Some(response),
            _ => None,
        }
    }

    pub fn academic_years(&self) -> Option<&ListAcademicYearsResponse> {
        match self.get(&CacheKey::AcademicYears) {
            Some(CacheEntry::AcademicYears(response)) => Some(response),
            _ => None,
        }
    }

    fn publish(&mut self, key: CacheKey) {
        self.subscribers.retain(|tx| tx.send(key.clone()).is_ok());
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
