//! Catalog state container and its derived views.
//!
//! There is exactly one live `CatalogState` per app, owned by the catalog
//! page and mutated only through the named transition methods below. The
//! derived views (chapter set, filtered list) are pure functions over the
//! current snapshot - nothing is cached, so there is nothing to
//! invalidate.

use crate::artwork::Artwork;
use crate::fallback::fallback_catalog;
use crate::gallery::GallerySession;

/// Informational message when the remote catalog came back empty.
pub const SYNCED_MESSAGE: &str = "Catálogo sincronizado.";
/// Message when the remote fetch failed outright.
pub const NETWORK_ERROR_MESSAGE: &str = "Error de red. Mostrando catálogo local.";

/// Chapter facet: everything, or one concrete chapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChapterFilter {
    #[default]
    All,
    Chapter(i32),
}

/// State for the catalog view.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    /// Artworks currently loaded, sorted ascending by `order`.
    pub artworks: Vec<Artwork>,
    /// True only during the initial fetch.
    pub loading: bool,
    /// User-facing status message. Non-fatal: the catalog stays usable.
    pub error: Option<String>,
    /// Free-text filter, matched case-insensitively against title/artist.
    pub search_query: String,
    pub active_chapter: ChapterFilter,
    /// Artwork shown in the detail overlay, if any.
    pub selected: Option<Artwork>,
    /// Immersive gallery session, if open.
    pub gallery: Option<GallerySession>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::with_fallback()
    }
}

impl CatalogState {
    /// Initial state: the bundled fallback catalog, fetch pending.
    pub fn with_fallback() -> Self {
        Self {
            artworks: fallback_catalog(),
            loading: true,
            error: None,
            search_query: String::new(),
            active_chapter: ChapterFilter::All,
            selected: None,
            gallery: None,
        }
    }

    /// Remote fetch settled with data: replace the catalog, clear status.
    pub fn loaded(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
        self.error = None;
        self.loading = false;
    }

    /// Remote fetch settled empty: keep whatever is loaded, note the sync.
    pub fn synced_empty(&mut self) {
        self.error = Some(SYNCED_MESSAGE.to_string());
        self.loading = false;
    }

    /// Remote fetch failed: keep the local catalog, surface the error.
    /// Permanent for this session - there is no retry.
    pub fn load_failed(&mut self) {
        self.error = Some(NETWORK_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn set_active_chapter(&mut self, filter: ChapterFilter) {
        self.active_chapter = filter;
    }

    /// Back to the unfiltered, full-chapter view.
    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.active_chapter = ChapterFilter::All;
    }

    pub fn select(&mut self, artwork: Artwork) {
        self.selected = Some(artwork);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Open the immersive gallery over the current filtered view.
    ///
    /// A no-op when nothing is selected or the selection is no longer in
    /// the filtered view (the filter may have changed since selection).
    pub fn open_gallery(&mut self) {
        let Some(selected) = &self.selected else {
            return;
        };
        self.gallery = GallerySession::open(self.filtered(), &selected.id);
    }

    pub fn close_gallery(&mut self) {
        self.gallery = None;
    }

    /// Distinct chapter numbers present in the catalog, sorted ascending.
    pub fn chapters(&self) -> Vec<i32> {
        chapter_numbers(&self.artworks)
    }

    /// The artworks matching the active search text and chapter filter.
    pub fn filtered(&self) -> Vec<Artwork> {
        filter_artworks(&self.artworks, &self.search_query, self.active_chapter)
    }
}

/// Distinct chapter values, sorted ascending, no duplicates.
pub fn chapter_numbers(artworks: &[Artwork]) -> Vec<i32> {
    let mut chapters: Vec<i32> = artworks.iter().map(|a| a.chapter).collect();
    chapters.sort_unstable();
    chapters.dedup();
    chapters
}

/// Pure filter over `(artworks, search_query, active_chapter)`.
///
/// The query is trimmed and lower-cased, then matched as a substring of
/// the lower-cased title or artist; an empty query matches everything.
/// Output order is preserved from `artworks`.
pub fn filter_artworks(
    artworks: &[Artwork],
    search_query: &str,
    active_chapter: ChapterFilter,
) -> Vec<Artwork> {
    let query = search_query.trim().to_lowercase();
    artworks
        .iter()
        .filter(|artwork| {
            let matches_search = artwork.title.to_lowercase().contains(&query)
                || artwork.artist.to_lowercase().contains(&query);
            let matches_chapter = match active_chapter {
                ChapterFilter::All => true,
                ChapterFilter::Chapter(chapter) => artwork.chapter == chapter,
            };
            matches_search && matches_chapter
        })
        .cloned()
        .collect()
}
