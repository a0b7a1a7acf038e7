//! Backend Family Tag
//!
//! The enumerated tag distinguishing which backend variant is active.
//! Stored on the selector once at construction and never recomputed,
//! so family queries are plain tag comparisons instead of downcasts on
//! the backend's concrete type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BACKEND_TAG_LARAVEL, BACKEND_TAG_LARAVEL_ORM, BACKEND_TAG_THINK_ORM, ELOQUENT_BASE_MODEL,
    THINK_BASE_MODEL,
};

/// The two supported backend families.
///
/// The set is closed and fixed at compile time; backends are not
/// dynamically pluggable through the tag path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendFamily {
    /// Eloquent-style ORM family (Laravel lineage)
    Eloquent,
    /// ThinkORM-style family
    Think,
}

impl BackendFamily {
    /// Resolve a construction tag to a family.
    ///
    /// Matching is exact over the enumerated alias set: `"laravelORM"`
    /// and `"laravel"` select Eloquent, `"thinkORM"` selects Think.
    /// Anything else, including case variants, is unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            BACKEND_TAG_LARAVEL_ORM | BACKEND_TAG_LARAVEL => Some(Self::Eloquent),
            BACKEND_TAG_THINK_ORM => Some(Self::Think),
            _ => None,
        }
    }

    /// Get string representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eloquent => "eloquent",
            Self::Think => "think",
        }
    }

    /// The base model type native detection recognizes for this family.
    #[must_use]
    pub fn base_model(self) -> &'static str {
        match self {
            Self::Eloquent => ELOQUENT_BASE_MODEL,
            Self::Think => THINK_BASE_MODEL,
        }
    }

    /// Get all families in order.
    #[must_use]
    pub fn all() -> &'static [BackendFamily] {
        &[Self::Eloquent, Self::Think]
    }
}

impl fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(BackendFamily::from_tag("laravelORM"), Some(BackendFamily::Eloquent));
        assert_eq!(BackendFamily::from_tag("laravel"), Some(BackendFamily::Eloquent));
        assert_eq!(BackendFamily::from_tag("thinkORM"), Some(BackendFamily::Think));
    }

    #[test]
    fn test_from_tag_is_exact_match() {
        // Unlisted case variants are not aliased.
        assert_eq!(BackendFamily::from_tag("LaravelORM"), None);
        assert_eq!(BackendFamily::from_tag("THINKORM"), None);
        assert_eq!(BackendFamily::from_tag("think"), None);
        assert_eq!(BackendFamily::from_tag(""), None);
        assert_eq!(BackendFamily::from_tag("mongoORM"), None);
    }

    #[test]
    fn test_base_model() {
        assert_eq!(BackendFamily::Eloquent.base_model(), ELOQUENT_BASE_MODEL);
        assert_eq!(BackendFamily::Think.base_model(), THINK_BASE_MODEL);
    }

    #[test]
    fn test_display() {
        assert_eq!(BackendFamily::Eloquent.to_string(), "eloquent");
        assert_eq!(BackendFamily::Think.to_string(), "think");
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(BackendFamily::all().len(), 2);
    }
}
