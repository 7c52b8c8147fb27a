//! Application state and per-page view state definitions.

use crate::api_client::RestClient;
use crate::config::TuiConfig;
use crate::nav::Page;
use crate::notifications::{Notification, NotificationLevel};
use crate::session::StoredAuth;
use crate::store::Store;
use crate::theme::CampusTheme;
use campus_core::{AcademicYearId, ClassId, EntityIdType, TeacherId};
use uuid::Uuid;

pub struct App {
    pub config: TuiConfig,
    pub theme: CampusTheme,
    pub api: RestClient,
    pub store: Store,
    pub auth: Option<StoredAuth>,
    pub active_page: Page,

    pub home_view: ContentViewState,
    pub about_view: ContentViewState,
    pub teams_view: ListViewState,
    pub teachers_view: ListViewState,
    pub classes_view: ListViewState,
    pub years_view: ListViewState,
    pub config_view: ConfigViewState,

    pub notifications: Vec<Notification>,
    pub confirm: Option<ConfirmDialog>,
}

impl App {
    pub fn new(config: TuiConfig, api: RestClient) -> Self {
        Self {
            config,
            theme: CampusTheme::campus(),
            api,
            store: Store::new(),
            auth: None,
            active_page: Page::Home,
            home_view: ContentViewState::new(),
            about_view: ContentViewState::new(),
            teams_view: ListViewState::new(),
            teachers_view: ListViewState::new(),
            classes_view: ListViewState::new(),
            years_view: ListViewState::new(),
            config_view: ConfigViewState::new(),
            notifications: Vec::new(),
            confirm: None,
        }
    }

    /// Theme for the current frame: the shipped palette, overlaid with the
    /// site colors cached alongside the active content page if present.
    pub fn current_theme(&self) -> CampusTheme {
        let base = self.theme.clone();
        match self.active_page.slug().and_then(|slug| self.store.page(slug)) {
            Some(bundle) => base.with_site_colors(&bundle.colors),
            None => base,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn content_view(&self, page: Page) -> Option<&ContentViewState> {
        match page {
            Page::Home => Some(&self.home_view),
            Page::About => Some(&self.about_view),
            _ => None,
        }
    }

    pub fn content_view_mut(&mut self, page: Page) -> Option<&mut ContentViewState> {
        match page {
            Page::Home => Some(&mut self.home_view),
            Page::About => Some(&mut self.about_view),
            _ => None,
        }
    }

    pub fn list_view(&self, page: Page) -> Option<&ListViewState> {
        match page {
            Page::Teams => Some(&self.teams_view),
            Page::Teachers => Some(&self.teachers_view),
            Page::Classes => Some(&self.classes_view),
            Page::AcademicYears => Some(&self.years_view),
            _ => None,
        }
    }

    pub fn list_view_mut(&mut self, page: Page) -> Option<&mut ListViewState> {
        match page {
            Page::Teams => Some(&mut self.teams_view),
            Page::Teachers => Some(&mut self.teachers_view),
            Page::Classes => Some(&mut self.classes_view),
            Page::AcademicYears => Some(&mut self.years_view),
            _ => None,
        }
    }

    /// Record a load outcome in the page's local error field. The store
    /// itself is only ever written by the loader on success.
    pub fn set_page_error(&mut self, page: Page, error: Option<String>) {
        if let Some(view) = self.content_view_mut(page) {
            view.error = error;
        } else if let Some(view) = self.list_view_mut(page) {
            view.error = error;
        }
    }

    pub fn page_error(&self, page: Page) -> Option<&str> {
        if let Some(view) = self.content_view(page) {
            view.error.as_deref()
        } else if let Some(view) = self.list_view(page) {
            view.error.as_deref()
        } else {
            None
        }
    }

    /// Row ids of the active page's cached list, in display order.
    fn visible_ids(&self) -> Vec<Uuid> {
        match self.active_page {
            Page::Teams => self
                .store
                .teams()
                .map(|r| r.teams.iter().map(|t| t.team_id.as_uuid()).collect())
                .unwrap_or_default(),
            Page::Teachers => self
                .store
                .teachers()
                .map(|r| r.teachers.iter().map(|t| t.teacher_id.as_uuid()).collect())
                .unwrap_or_default(),
            Page::Classes => self
                .store
                .classes()
                .map(|r| r.classes.iter().map(|c| c.class_id.as_uuid()).collect())
                .unwrap_or_default(),
            Page::AcademicYears => self
                .store
                .academic_years()
                .map(|r| {
                    r.academic_years
                        .iter()
                        .map(|y| y.academic_year_id.as_uuid())
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn select_next(&mut self) {
        let ids = self.visible_ids();
        if let Some(view) = self.list_view_mut(self.active_page) {
            select_next_id(&ids, &mut view.selected);
        }
    }

    pub fn select_previous(&mut self) {
        let ids = self.visible_ids();
        if let Some(view) = self.list_view_mut(self.active_page) {
            select_prev_id(&ids, &mut view.selected);
        }
    }

    /// Open a confirm/cancel dialog for the selected record on an admin
    /// page. Admin actions need stored credentials.
    pub fn open_delete_dialog(&mut self) {
        if self.auth.is_none() {
            self.notify(
                NotificationLevel::Warning,
                "No stored credentials; admin actions are disabled",
            );
            return;
        }
        let Some(view) = self.list_view(self.active_page) else {
            return;
        };
        let Some(selected) = view.selected else {
            self.notify(NotificationLevel::Info, "Nothing selected");
            return;
        };

        let target = match self.active_page {
            Page::Teachers => self
                .store
                .teachers()
                .and_then(|r| {
                    r.teachers
                        .iter()
                        .find(|t| t.teacher_id.as_uuid() == selected)
                })
                .map(|t| (DeleteTarget::Teacher(t.teacher_id), t.full_name.clone())),
            Page::Classes => self
                .store
                .classes()
                .and_then(|r| r.classes.iter().find(|c| c.class_id.as_uuid() == selected))
                .map(|c| (DeleteTarget::Class(c.class_id), c.name.clone())),
            Page::AcademicYears => self
                .store
                .academic_years()
                .and_then(|r| {
                    r.academic_years
                        .iter()
                        .find(|y| y.academic_year_id.as_uuid() == selected)
                })
                .map(|y| {
                    (
                        DeleteTarget::AcademicYear(y.academic_year_id),
                        y.name.clone(),
                    )
                }),
            _ => None,
        };

        if let Some((target, name)) = target {
            self.confirm = Some(ConfirmDialog {
                title: format!("Delete {}", self.active_page.title().to_lowercase()),
                message: format!("Delete '{}'? This cannot be undone.", name),
                target,
            });
        }
    }

    pub fn close_dialog(&mut self) {
        self.confirm = None;
    }
}

/// What a pending confirm dialog will delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Teacher(TeacherId),
    Class(ClassId),
    AcademicYear(AcademicYearId),
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub target: DeleteTarget,
}

// ============================================================================
// VIEW STATE DEFINITIONS
// ============================================================================

/// State of a content page (Home, About): scroll position plus the local
/// error banner field.
#[derive(Debug, Clone)]
pub struct ContentViewState {
    pub scroll: u16,
    pub error: Option<String>,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            error: None,
        }
    }
}

/// State of a list page (teams and the admin tables).
#[derive(Debug, Clone)]
pub struct ListViewState {
    pub selected: Option<Uuid>,
    pub error: Option<String>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            selected: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigViewState {
    pub content: String,
}

impl ConfigViewState {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }
}

impl Default for ContentViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ConfigViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn select_next_id(items: &[Uuid], selected: &mut Option<Uuid>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = selected.and_then(|id| items.iter().position(|item| *item == id));
    let next = match index {
        Some(i) => (i + 1) % items.len(),
        None => 0,
    };
    *selected = Some(items[next]);
}

fn select_prev_id(items: &[Uuid], selected: &mut Option<Uuid>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| items.iter().position(|item| *item == id))
        .unwrap_or(0);
    let prev = if index == 0 { items.len() - 1 } else { index - 1 };
    *selected = Some(items[prev]);
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
