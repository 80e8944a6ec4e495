//! prado-core - catalog domain logic for Prado Companion
//!
//! Holds everything that doesn't touch the DOM: the `Artwork` record,
//! normalization of raw content-store rows, the catalog state container
//! with its derived views, the immersive gallery session, and the bundled
//! fallback catalog.

pub mod artwork;
pub mod catalog;
pub mod fallback;
pub mod gallery;
pub mod normalize;

pub use artwork::Artwork;
pub use catalog::{
    chapter_numbers, filter_artworks, CatalogState, ChapterFilter, NETWORK_ERROR_MESSAGE,
    SYNCED_MESSAGE,
};
pub use fallback::fallback_catalog;
pub use gallery::GallerySession;
pub use normalize::{normalize_catalog, normalize_record, placeholder_image_url};
