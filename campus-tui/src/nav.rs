//! Navigation and page switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Home,
    About,
    Teams,
    Teachers,
    Classes,
    AcademicYears,
    ConfigViewer,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About us",
            Page::Teams => "Teams",
            Page::Teachers => "Teachers",
            Page::Classes => "Classes",
            Page::AcademicYears => "Academic years",
            Page::ConfigViewer => "Config",
        }
    }

    /// Backend slug for content pages; admin and config pages have none.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("home"),
            Page::About => Some("about-us"),
            _ => None,
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::About,
            Page::Teams,
            Page::Teachers,
            Page::Classes,
            Page::AcademicYears,
            Page::ConfigViewer,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Page {
        let idx = self.index();
        let all = Self::all();
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> Page {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_are_inverse() {
        for page in Page::all() {
            assert_eq!(page.next().previous(), *page);
        }
    }

    #[test]
    fn only_content_pages_have_slugs() {
        assert_eq!(Page::Home.slug(), Some("home"));
        assert_eq!(Page::About.slug(), Some("about-us"));
        assert_eq!(Page::Teachers.slug(), None);
        assert_eq!(Page::ConfigViewer.slug(), None);
    }

    #[test]
    fn from_index_round_trips() {
        for page in Page::all() {
            assert_eq!(Page::from_index(page.index()), Some(*page));
        }
        assert_eq!(Page::from_index(Page::all().len()), None);
    }
}
