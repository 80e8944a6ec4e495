//! Catalog page - owns the single live catalog state.

use crate::api;
use dioxus::prelude::*;
use prado_core::{Artwork, CatalogState, ChapterFilter};
use prado_ui::{ArtworkModal, CatalogView, ImmersiveGallery};
use tracing::warn;

#[component]
pub fn CatalogPage() -> Element {
    let mut state = use_signal(CatalogState::with_fallback);

    // The one fetch per catalog lifetime. No retry: a failed load is
    // permanent until a full reload. If the page unmounts mid-fetch the
    // future is cancelled and the settlement is discarded.
    use_future(move || async move {
        match api::fetch_catalog().await {
            Ok(artworks) if !artworks.is_empty() => state.write().loaded(artworks),
            Ok(_) => state.write().synced_empty(),
            Err(err) => {
                warn!("catalog load failed: {err}");
                state.write().load_failed();
            }
        }
    });

    let snapshot = state.read().clone();

    rsx! {
        CatalogView {
            state: snapshot.clone(),
            on_search_change: move |query: String| state.write().set_search_query(query),
            on_chapter_select: move |filter: ChapterFilter| state.write().set_active_chapter(filter),
            on_reset_filters: move |_| state.write().reset_filters(),
            on_artwork_click: move |artwork: Artwork| state.write().select(artwork),
        }

        if let Some(artwork) = snapshot.selected.clone() {
            ArtworkModal {
                artwork,
                on_close: move |_| state.write().clear_selection(),
                // No-op when the selection fell out of the filtered view
                on_expand: move |_| state.write().open_gallery(),
            }
        }

        if let Some(session) = snapshot.gallery.clone() {
            ImmersiveGallery {
                session,
                on_prev: move |_| {
                    if let Some(gallery) = state.write().gallery.as_mut() {
                        gallery.prev();
                    }
                },
                on_next: move |_| {
                    if let Some(gallery) = state.write().gallery.as_mut() {
                        gallery.next();
                    }
                },
                on_close: move |_| state.write().close_gallery(),
            }
        }
    }
}
