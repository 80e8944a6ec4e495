//! Artwork display record

use serde::{Deserialize, Serialize};

/// A single artwork in the catalog.
///
/// Immutable once constructed; every instance that reaches the UI has
/// passed through [`crate::normalize::normalize_record`] (or comes from
/// the hand-authored fallback catalog), so fields are always safe to
/// render without re-checking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Source id, or a synthesized random token when the source omits one.
    /// Only used for same-session list-membership lookups.
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Grouping key for chapter filtering. 0 when the source value was
    /// missing or unparseable.
    pub chapter: i32,
    /// Display label for the chapter ("Capítulo N" for remote records).
    pub chapter_title: String,
    pub description: String,
    /// Absolute URL. Falls back to a deterministic placeholder seeded by
    /// the title when the source value is unusable.
    pub image_url: String,
    pub year: Option<String>,
    /// Sort key within the full catalog. Not unique.
    pub order: i32,
    pub museum_name: Option<String>,
    pub museum_url: Option<String>,
}
