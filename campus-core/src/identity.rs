//! Identity types for Campus entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Common interface for the typed record identifiers.
pub trait EntityIdType {
    fn as_uuid(&self) -> Uuid;
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl EntityIdType for $name {
            fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

entity_id! {
    /// Identifier of a content page document.
    PageId
}
entity_id! {
    /// Identifier of a teacher record.
    TeacherId
}
entity_id! {
    /// Identifier of a school class.
    ClassId
}
entity_id! {
    /// Identifier of an academic year.
    AcademicYearId
}
entity_id! {
    /// Identifier of a public team.
    TeamId
}
entity_id! {
    /// Identifier of a user account.
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = TeacherId::generate();
        let b = TeacherId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_display_matches_uuid() {
        let raw = Uuid::new_v4();
        let id = ClassId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.as_uuid(), raw);
    }

    #[test]
    fn id_serde_is_transparent() {
        let raw = Uuid::new_v4();
        let id = PageId::new(raw);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", raw));
        let back: PageId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
