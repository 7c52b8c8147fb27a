//! CAMPUS TUI entry point.

use campus_tui::api_client::RestClient;
use campus_tui::config::TuiConfig;
use campus_tui::error::TuiError;
use campus_tui::events::TuiEvent;
use campus_tui::keys::{map_key, Action};
use campus_tui::loader;
use campus_tui::nav::Page;
use campus_tui::notifications::NotificationLevel;
use campus_tui::persistence::{self, PersistedState};
use campus_tui::session;
use campus_tui::state::{App, DeleteTarget};
use campus_tui::store::CacheKey;
use campus_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;

    // Stored credentials only survive within one session; a missing marker
    // means the previous session ended and its credentials are purged.
    let resumed = session::ensure_session(&config.session_marker_path, &config.auth_path)?;
    let auth = session::load_auth(&config.auth_path)?;

    let mut api = RestClient::new(&config)?;
    if let Some(auth) = &auth {
        api = api.with_bearer_token(&auth.token)?;
    }

    let mut app = App::new(config, api);
    app.auth = auth;
    app.config_view.content = format!("{:#?}", app.config);
    if !resumed && app.auth.is_none() {
        app.notify(NotificationLevel::Info, "New session started");
    }
    if let Ok(Some(state)) = persistence::load(&app.config.persistence_path) {
        app.active_page = state.active_page;
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    ensure_page_loaded(&mut app).await;

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event).await? {
                    break;
                }
            }
        }
    }

    let persisted = PersistedState {
        active_page: app.active_page,
    };
    let _ = persistence::save(&app.config.persistence_path, &persisted);
    // Clean exit ends the session; a crash leaves the marker so the
    // interrupted session resumes instead.
    let _ = session::end_session(&app.config.session_marker_path);

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

async fn handle_event(app: &mut App, event: TuiEvent) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return handle_action(app, action).await;
            }
        }
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    Ok(false)
}

async fn handle_action(app: &mut App, action: Action) -> Result<bool, TuiError> {
    match action {
        Action::Quit => return Ok(true),
        Action::NextPage => {
            app.active_page = app.active_page.next();
            ensure_page_loaded(app).await;
        }
        Action::PrevPage => {
            app.active_page = app.active_page.previous();
            ensure_page_loaded(app).await;
        }
        Action::SwitchPage(index) => {
            if let Some(page) = Page::from_index(index) {
                app.active_page = page;
                ensure_page_loaded(app).await;
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::DeleteItem => app.open_delete_dialog(),
        Action::Refresh => refresh_page(app).await,
        Action::Confirm => {
            if app.confirm.is_some() {
                execute_delete(app).await;
            }
        }
        Action::Cancel => app.close_dialog(),
        Action::OpenHelp => app.notify(
            NotificationLevel::Info,
            "j/k or arrows move, Tab/1-7 switch pages, d delete, r refresh, q quit",
        ),
    }
    Ok(false)
}

/// Key of the cache entry backing `page`, if the page is API-backed.
fn cache_key_for(page: Page) -> Option<CacheKey> {
    match page {
        Page::Home | Page::About => page.slug().map(|slug| CacheKey::Page(slug.to_string())),
        Page::Teams => Some(CacheKey::Teams),
        Page::Teachers => Some(CacheKey::Teachers),
        Page::Classes => Some(CacheKey::Classes),
        Page::AcademicYears => Some(CacheKey::AcademicYears),
        Page::ConfigViewer => None,
    }
}

/// Load the active page's data through the cache. A warm cache makes this
/// a no-op; a failed fetch lands in the page's error field and leaves the
/// cache untouched.
async fn ensure_page_loaded(app: &mut App) {
    let state = match app.active_page {
        Page::Home | Page::About => {
            let slug = app.active_page.slug().unwrap_or_default().to_string();
            loader::load_page(&mut app.store, &app.api, &slug)
                .await
                .error()
                .map(str::to_string)
        }
        Page::Teams => loader::load_teams(&mut app.store, &app.api)
            .await
            .error()
            .map(str::to_string),
        Page::Teachers => loader::load_teachers(&mut app.store, &app.api)
            .await
            .error()
            .map(str::to_string),
        Page::Classes => loader::load_classes(&mut app.store, &app.api)
            .await
            .error()
            .map(str::to_string),
        Page::AcademicYears => loader::load_academic_years(&mut app.store, &app.api)
            .await
            .error()
            .map(str::to_string),
        Page::ConfigViewer => None,
    };
    app.set_page_error(app.active_page, state);
}

/// Drop the active page's cache entry and refetch it.
async fn refresh_page(app: &mut App) {
    let Some(key) = cache_key_for(app.active_page) else {
        return;
    };
    let state = loader::refresh(&mut app.store, &app.api, key).await;
    app.set_page_error(app.active_page, state.error().map(str::to_string));
}

/// Carry out the delete the open dialog confirmed, then invalidate and
/// reload the affected list.
async fn execute_delete(app: &mut App) {
    let Some(dialog) = app.confirm.take() else {
        return;
    };

    let (result, key) = match dialog.target {
        DeleteTarget::Teacher(id) => (app.api.delete_teacher(id).await, CacheKey::Teachers),
        DeleteTarget::Class(id) => (app.api.delete_class(id).await, CacheKey::Classes),
        DeleteTarget::AcademicYear(id) => (
            app.api.delete_academic_year(id).await,
            CacheKey::AcademicYears,
        ),
    };

    match result {
        Ok(()) => {
            app.notify(NotificationLevel::Success, "Record deleted");
            if let Some(view) = app.list_view_mut(app.active_page) {
                view.selected = None;
            }
            let state = loader::refresh(&mut app.store, &app.api, key).await;
            app.set_page_error(app.active_page, state.error().map(str::to_string));
        }
        Err(err) => {
            app.notify(NotificationLevel::Error, format!("Delete failed: {}", err));
        }
    }
}
