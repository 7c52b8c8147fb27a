//! End-to-end contract of the cache-backed page loading pipeline, plus
//! property tests for keybindings and navigation.

use campus_core::{
    ColorSettings, ListAcademicYearsResponse, ListClassesResponse, ListTeachersResponse,
    ListTeamsResponse, PageDocument, PageId, TeacherId, TeacherResponse,
};
use campus_tui::api_client::ApiClientError;
use campus_tui::config::{ThemeConfig, TuiConfig};
use campus_tui::keys::{map_key, Action};
use campus_tui::loader::{self, ApiSource};
use campus_tui::nav::Page;
use campus_tui::store::{CacheKey, Store};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Fake backend whose data can be swapped mid-test and whose calls are
/// counted, so cache hits and misses are observable.
#[derive(Default)]
struct FakeBackend {
    page_fetches: AtomicUsize,
    color_fetches: AtomicUsize,
    teacher_fetches: AtomicUsize,
    offline: AtomicBool,
    teachers: Mutex<Vec<TeacherResponse>>,
}

impl FakeBackend {
    fn set_teachers(&self, teachers: Vec<TeacherResponse>) {
        *self.teachers.lock().unwrap() = teachers;
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), ApiClientError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiClientError::Server {
                code: "UNAVAILABLE".to_string(),
                message: "backend offline".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn teacher(name: &str) -> TeacherResponse {
    TeacherResponse {
        teacher_id: TeacherId::generate(),
        full_name: name.to_string(),
        subject: "Physics".to_string(),
        email: format!("{}@school.example", name.to_lowercase()),
        created_at: chrono::Utc::now(),
    }
}

impl ApiSource for FakeBackend {
    async fn fetch_page(&self, slug: &str) -> Result<PageDocument, ApiClientError> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(PageDocument {
            page_id: PageId::generate(),
            slug: slug.to_string(),
            title: format!("Page {}", slug),
            sections: Vec::new(),
            updated_at: chrono::Utc::now(),
        })
    }

    async fn fetch_colors(&self) -> Result<ColorSettings, ApiClientError> {
        self.color_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(ColorSettings {
            primary: "#1a2b3c".to_string(),
            secondary: "#2b3c4d".to_string(),
            background: "#101010".to_string(),
            text: "#fafafa".to_string(),
            accent: "#cc3355".to_string(),
        })
    }

    async fn fetch_teams(&self) -> Result<ListTeamsResponse, ApiClientError> {
        self.check_online()?;
        Ok(ListTeamsResponse {
            teams: Vec::new(),
            total: 0,
        })
    }

    async fn fetch_teachers(&self) -> Result<ListTeachersResponse, ApiClientError> {
        self.teacher_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let teachers = self.teachers.lock().unwrap().clone();
        let total = teachers.len() as i32;
        Ok(ListTeachersResponse { teachers, total })
    }

    async fn fetch_classes(&self) -> Result<ListClassesResponse, ApiClientError> {
        self.check_online()?;
        Ok(ListClassesResponse {
            classes: Vec::new(),
            total: 0,
        })
    }

    async fn fetch_academic_years(&self) -> Result<ListAcademicYearsResponse, ApiClientError> {
        self.check_online()?;
        Ok(ListAcademicYearsResponse {
            academic_years: Vec::new(),
            total: 0,
        })
    }
}

#[tokio::test]
async fn revisiting_a_page_reuses_the_cache() {
    let mut store = Store::new();
    let api = FakeBackend::default();

    loader::load_page(&mut store, &api, "home").await;
    loader::load_page(&mut store, &api, "home").await;
    loader::load_page(&mut store, &api, "home").await;

    assert_eq!(api.page_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(api.color_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cached_list_is_served_stale_until_refreshed() {
    let mut store = Store::new();
    let api = FakeBackend::default();
    api.set_teachers(vec![teacher("Ada")]);

    loader::load_teachers(&mut store, &api).await;
    api.set_teachers(vec![teacher("Ada"), teacher("Grace")]);

    // Warm load serves the old snapshot without touching the backend.
    loader::load_teachers(&mut store, &api).await;
    assert_eq!(api.teacher_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(store.teachers().unwrap().total, 1);

    let state = loader::refresh(&mut store, &api, CacheKey::Teachers).await;
    assert!(state.is_ready());
    assert_eq!(api.teacher_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(store.teachers().unwrap().total, 2);
}

#[tokio::test]
async fn failed_load_caches_nothing_and_recovers() {
    let mut store = Store::new();
    let api = FakeBackend::default();
    api.set_offline(true);

    let state = loader::load_page(&mut store, &api, "about-us").await;
    assert!(state.error().is_some());
    assert!(store.is_empty());

    // Nothing was cached, so the retry goes back to the network.
    api.set_offline(false);
    let state = loader::load_page(&mut store, &api, "about-us").await;
    assert!(state.is_ready());
    assert!(store.page("about-us").is_some());
}

#[tokio::test]
async fn failed_refresh_leaves_the_key_evicted() {
    let mut store = Store::new();
    let api = FakeBackend::default();
    api.set_teachers(vec![teacher("Ada")]);

    loader::load_teachers(&mut store, &api).await;
    assert!(store.teachers().is_some());

    api.set_offline(true);
    let state = loader::refresh(&mut store, &api, CacheKey::Teachers).await;
    assert!(state.error().is_some());
    assert!(store.teachers().is_none());
}

#[tokio::test]
async fn subscribers_hear_about_loader_writes() {
    let mut store = Store::new();
    let mut changes = store.subscribe();
    let api = FakeBackend::default();

    loader::load_page(&mut store, &api, "home").await;
    loader::load_teachers(&mut store, &api).await;
    loader::refresh(&mut store, &api, CacheKey::Teachers).await;

    assert_eq!(changes.try_recv(), Ok(CacheKey::Page("home".to_string())));
    assert_eq!(changes.try_recv(), Ok(CacheKey::Teachers));
    // Refresh removes the key, then writes it back.
    assert_eq!(changes.try_recv(), Ok(CacheKey::Teachers));
    assert_eq!(changes.try_recv(), Ok(CacheKey::Teachers));
    assert!(changes.try_recv().is_err());
}

#[test]
fn config_rejects_unknown_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "solarized".to_string(),
    };
    assert!(config.validate().is_err());
}

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:8080".to_string(),
        request_timeout_ms: 5_000,
        refresh_interval_ms: 2_000,
        persistence_path: "tmp/campus-tui.json".into(),
        auth_path: "tmp/campus-auth.json".into(),
        session_marker_path: "tmp/campus-session".into(),
        theme: ThemeConfig {
            name: "campus".to_string(),
        },
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

proptest! {
    #[test]
    fn keybinding_digit_switches_page(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(key(KeyCode::Char(ch)));
        let expected = match ch {
            '1'..='7' => Some(Action::SwitchPage((digit - 1) as usize)),
            _ => None,
        };
        prop_assert_eq!(action, expected);
    }

    #[test]
    fn tab_cycle_visits_every_page_exactly_once(start in 0usize..7) {
        let start = Page::from_index(start).unwrap();
        let mut seen = vec![start];
        let mut page = start;
        for _ in 1..Page::all().len() {
            page = page.next();
            prop_assert!(!seen.contains(&page));
            seen.push(page);
        }
        prop_assert_eq!(page.next(), start);
    }

    #[test]
    fn next_and_previous_are_inverse(index in 0usize..7) {
        let page = Page::from_index(index).unwrap();
        prop_assert_eq!(page.next().previous(), page);
        prop_assert_eq!(page.previous().next(), page);
    }
}
