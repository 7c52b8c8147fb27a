//! Cached-fetch helper shared by every page.
//!
//! Every page follows the same sequence: check the store, fetch on a miss,
//! write back, render. This module is that sequence factored out once: a
//! loader checks the store for the page's key, returns
//! the cached entry with zero network calls on a hit, and on a miss runs
//! the page's fetches concurrently, writes one merged entry back, and
//! returns it. Failures write nothing to the store, so navigating back to
//! the page retries naturally.

use crate::api_client::ApiClientError;
use crate::store::{CacheEntry, CacheKey, PageBundle, Store};
use campus_core::{
    ColorSettings, ListAcademicYearsResponse, ListClassesResponse, ListTeachersResponse,
    ListTeamsResponse, PageDocument,
};
use futures_util::try_join;
use std::future::Future;

/// Seam between the loaders and the HTTP layer. `RestClient` is the real
/// implementation; the contract tests substitute a counting fake.
pub trait ApiSource {
    fn fetch_page(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<PageDocument, ApiClientError>>;
    fn fetch_colors(&self) -> impl Future<Output = Result<ColorSettings, ApiClientError>>;
    fn fetch_teams(&self) -> impl Future<Output = Result<ListTeamsResponse, ApiClientError>>;
    fn fetch_teachers(&self) -> impl Future<Output = Result<ListTeachersResponse, ApiClientError>>;
    fn fetch_classes(&self) -> impl Future<Output = Result<ListClassesResponse, ApiClientError>>;
    fn fetch_academic_years(
        &self,
    ) -> impl Future<Output = Result<ListAcademicYearsResponse, ApiClientError>>;
}

/// Discriminated result of a page load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Load a content page: the page document and the shared color settings
/// are fetched concurrently and cached as one bundle under the slug.
pub async fn load_page<S: ApiSource>(
    store: &mut Store,
    api: &S,
    slug: &str,
) -> LoadState<PageBundle> {
    let key = CacheKey::Page(slug.to_string());
    load_with(
        store,
        key,
        |entry| match entry {
            CacheEntry::Page(bundle) => Some(bundle.clone()),
            _ => None,
        },
        CacheEntry::Page,
        async {
            let (document, colors) = try_join!(api.fetch_page(slug), api.fetch_colors())?;
            Ok(PageBundle { document, colors })
        },
    )
    .await
}

pub async fn load_teams<S: ApiSource>(
    store: &mut Store,
    api: &S,
) -> LoadState<ListTeamsResponse> {
    load_with(
        store,
        CacheKey::Teams,
        |entry| match entry {
            CacheEntry::Teams(response) => Some(response.clone()),
            _ => None,
        },
        CacheEntry::Teams,
        api.fetch_teams(),
    )
    .await
}

pub async fn load_teachers<S: ApiSource>(
    store: &mut Store,
    api: &S,
) -> LoadState<ListTeachersResponse> {
    load_with(
        store,
        CacheKey::Teachers,
        |entry| match entry {
            CacheEntry::Teachers(response) => Some(response.clone()),
            _ => None,
        },
        CacheEntry::Teachers,
        api.fetch_teachers(),
    )
    .await
}

pub async fn load_classes<S: ApiSource>(
    store: &mut Store,
    api: &S,
) -> LoadState<ListClassesResponse> {
    load_with(
        store,
        CacheKey::Classes,
        |entry| match entry {
            CacheEntry::Classes(response) => Some(response.clone()),
            _ => None,
        },
        CacheEntry::Classes,
        api.fetch_classes(),
    )
    .await
}

pub async fn load_academic_years<S: ApiSource>(
    store: &mut Store,
    api: &S,
) -> LoadState<ListAcademicYearsResponse> {
    load_with(
        store,
        CacheKey::AcademicYears,
        |entry| match entry {
            CacheEntry::AcademicYears(response) => Some(response.clone()),
            _ => None,
        },
        CacheEntry::AcademicYears,
        api.fetch_academic_years(),
    )
    .await
}

/// Drop the cached entry for `key` before loading again. Between the
/// removal and fetch completion the store reports the key as absent.
pub async fn refresh<S: ApiSource>(
    store: &mut Store,
    api: &S,
    key: CacheKey,
) -> LoadState<CacheEntry> {
    store.remove(&key);
    match key {
        CacheKey::Page(slug) => map_entry(load_page(store, api, &slug).await, CacheEntry::Page),
        CacheKey::Teams => map_entry(load_teams(store, api).await, CacheEntry::Teams),
        CacheKey::Teachers => map_entry(load_teachers(store, api).await, CacheEntry::Teachers),
        CacheKey::Classes => map_entry(load_classes(store, api).await, CacheEntry::Classes),
        CacheKey::AcademicYears => map_entry(
            load_academic_years(store, api).await,
            CacheEntry::AcademicYears,
        ),
    }
}

fn map_entry<T>(state: LoadState<T>, wrap: impl FnOnce(T) -> CacheEntry) -> LoadState<CacheEntry> {
    match state {
        LoadState::Loading => LoadState::Loading,
        LoadState::Ready(value) => LoadState::Ready(wrap(value)),
        LoadState::Failed(message) => LoadState::Failed(message),
    }
}

/// The cached-fetch core: cache hit short-circuits without touching the
/// fetch future; a miss awaits it and writes the merged entry back. On
/// failure the store is left untouched.
async fn load_with<T, Fut>(
    store: &mut Store,
    key: CacheKey,
    peek: impl Fn(&CacheEntry) -> Option<T>,
    wrap: impl FnOnce(T) -> CacheEntry,
    fetch: Fut,
) -> LoadState<T>
where
    T: Clone,
    Fut: Future<Output = Result<T, ApiClientError>>,
{
    if let Some(value) = store.get(&key).and_then(&peek) {
        return LoadState::Ready(value);
    }
    match fetch.await {
        Ok(value) => {
            store.insert(key, wrap(value.clone()));
            LoadState::Ready(value)
        }
        Err(err) => LoadState::Failed(err.to_string()),
    }
}
