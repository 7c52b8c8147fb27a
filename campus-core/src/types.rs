//! API Request and Response Types
//!
//! This module defines the wire types for the Campus REST API as the
//! client consumes them. The backend owns the endpoint design; these
//! types only mirror its JSON payloads.

use crate::{AcademicYearId, ClassId, PageId, TeacherId, TeamId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CONTENT PAGES
// ============================================================================

/// A content page document, fetched by slug (`GET /pages/slug/:slug`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub page_id: PageId,
    /// Human-readable identifier used to fetch this page.
    pub slug: String,
    pub title: String,
    pub sections: Vec<PageSection>,
    pub updated_at: Timestamp,
}

/// One block of a content page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub heading: Option<String>,
    pub body: String,
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Shared site color settings (`GET /settings/key/colors`).
///
/// Values are `#rrggbb` hex strings chosen by the site administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Invalid hex color '{value}': {reason}")]
    Invalid { value: String, reason: String },
}

/// Parse a `#rrggbb` (or `rrggbb`) hex string into RGB components.
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let digits = value.trim().trim_start_matches('#');
    // ASCII-only before slicing at byte offsets; multi-byte input would
    // otherwise panic on a non-boundary index.
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorParseError::Invalid {
            value: value.to_string(),
            reason: "expected 6 hex digits".to_string(),
        });
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::Invalid {
            value: value.to_string(),
            reason: "non-hex digit".to_string(),
        })
    };
    Ok((component(0..2)?, component(2..4)?, component(4..6)?))
}

// ============================================================================
// TEAMS
// ============================================================================

/// A public team entry (`GET /teams/public`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team_id: TeamId,
    pub name: String,
    pub motto: Option<String>,
    pub member_count: i32,
}

/// Response containing the public team list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: i32,
}

// ============================================================================
// ADMIN RECORDS
// ============================================================================

/// Teacher record with full details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub teacher_id: TeacherId,
    pub full_name: String,
    pub subject: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// Response containing a list of teachers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTeachersResponse {
    pub teachers: Vec<TeacherResponse>,
    /// Total count (before pagination)
    pub total: i32,
}

/// School class record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassResponse {
    pub class_id: ClassId,
    pub name: String,
    pub grade_level: i32,
    /// Homeroom teacher, if assigned.
    pub homeroom_teacher_id: Option<TeacherId>,
    pub academic_year_id: AcademicYearId,
}

/// Response containing a list of classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListClassesResponse {
    pub classes: Vec<ClassResponse>,
    pub total: i32,
}

/// Academic year record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYearResponse {
    pub academic_year_id: AcademicYearId,
    /// Display name, e.g. "2025/2026".
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub active: bool,
}

/// Response containing a list of academic years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAcademicYearsResponse {
    pub academic_years: Vec<AcademicYearResponse>,
    pub total: i32,
}

// ============================================================================
// USERS & ERRORS
// ============================================================================

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
}

/// User record stored alongside the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: UserId,
    pub display_name: String,
    pub role: UserRole,
}

/// Error payload the backend returns for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_with_and_without_hash() {
        assert_eq!(parse_hex_color("#00ffAa").unwrap(), (0, 255, 170));
        assert_eq!(parse_hex_color("112233").unwrap(), (17, 34, 51));
    }

    #[test]
    fn hex_color_rejects_short_input() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn hex_color_rejects_non_hex_digits() {
        assert!(parse_hex_color("#gg0011").is_err());
    }

    #[test]
    fn hex_color_rejects_multibyte_input_without_panicking() {
        // 6 bytes but not 6 ASCII digits; slicing blindly would panic.
        assert!(parse_hex_color("aé123").is_err());
        assert!(parse_hex_color("#ааа").is_err());
        assert!(parse_hex_color("#ffff€").is_err());
    }

    #[test]
    fn user_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, UserRole::Staff);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any RGB triple survives a format/parse round trip.
        #[test]
        fn prop_hex_color_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let formatted = format!("#{:02x}{:02x}{:02x}", r, g, b);
            prop_assert_eq!(parse_hex_color(&formatted).unwrap(), (r, g, b));
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn prop_hex_color_never_panics(input in ".{0,12}") {
            let _ = parse_hex_color(&input);
        }
    }
}
