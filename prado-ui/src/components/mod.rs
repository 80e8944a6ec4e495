//! Shared UI components

pub mod artwork_card;
pub mod artwork_modal;
pub mod catalog;
pub mod chapter_nav;
pub mod icons;
pub mod immersive_gallery;
pub mod loading_spinner;
pub mod search_input;
pub mod status_notice;

pub use artwork_card::ArtworkCard;
pub use artwork_modal::ArtworkModal;
pub use catalog::CatalogView;
pub use chapter_nav::ChapterNav;
pub use icons::{
    AlertTriangleIcon, BookOpenIcon, ChevronLeftIcon, ChevronRightIcon, ExternalLinkIcon,
    MaximizeIcon, SearchIcon, XIcon,
};
pub use immersive_gallery::ImmersiveGallery;
pub use loading_spinner::LoadingSpinner;
pub use search_input::SearchInput;
pub use status_notice::StatusNotice;
