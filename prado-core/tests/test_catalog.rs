use prado_core::{
    chapter_numbers, fallback_catalog, filter_artworks, Artwork, CatalogState, ChapterFilter,
    NETWORK_ERROR_MESSAGE, SYNCED_MESSAGE,
};

fn make_artwork(id: &str, title: &str, artist: &str, chapter: i32, order: i32) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        chapter,
        chapter_title: format!("Capítulo {chapter}"),
        description: String::new(),
        image_url: format!("https://example.org/{id}.jpg"),
        year: None,
        order,
        museum_name: None,
        museum_url: None,
    }
}

#[test]
fn initial_state_is_fallback_and_loading() {
    let state = CatalogState::with_fallback();
    assert_eq!(state.artworks, fallback_catalog());
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.active_chapter, ChapterFilter::All);
}

#[test]
fn loaded_replaces_catalog_and_clears_status() {
    let mut state = CatalogState::with_fallback();
    state.load_failed();
    state.loaded(vec![make_artwork("a", "Obra", "Autor", 1, 1)]);
    assert_eq!(state.artworks.len(), 1);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn empty_remote_result_keeps_fallback_and_notes_sync() {
    let mut state = CatalogState::with_fallback();
    state.synced_empty();
    assert_eq!(state.error.as_deref(), Some(SYNCED_MESSAGE));
    assert_eq!(state.artworks, fallback_catalog());
    assert!(!state.loading);
}

#[test]
fn failed_fetch_keeps_fallback_and_reports_network_error() {
    let mut state = CatalogState::with_fallback();
    state.load_failed();
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(state.artworks, fallback_catalog());
    assert!(!state.loading);
}

#[test]
fn empty_query_and_all_chapters_matches_everything() {
    let artworks = vec![
        make_artwork("a", "Uno", "X", 1, 1),
        make_artwork("b", "Dos", "Y", 2, 2),
    ];
    let filtered = filter_artworks(&artworks, "", ChapterFilter::All);
    assert_eq!(filtered, artworks);
}

#[test]
fn search_matches_title_or_artist_case_insensitively() {
    let mut state = CatalogState::with_fallback();
    state.set_search_query("bosco".to_string());
    let filtered = state.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "El Jardín de las Delicias");
    assert_eq!(filtered[0].artist, "El Bosco");
}

#[test]
fn search_query_is_trimmed() {
    let state_artworks = fallback_catalog();
    let filtered = filter_artworks(&state_artworks, "  gloria  ", ChapterFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "La Gloria");
}

#[test]
fn chapter_filter_combines_with_search() {
    let artworks = vec![
        make_artwork("a", "Retrato", "Goya", 1, 1),
        make_artwork("b", "Retrato", "Goya", 2, 2),
        make_artwork("c", "Paisaje", "Goya", 2, 3),
    ];
    let filtered = filter_artworks(&artworks, "retrato", ChapterFilter::Chapter(2));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "b");
}

#[test]
fn filtering_is_pure_and_preserves_order() {
    let artworks = vec![
        make_artwork("a", "Uno", "Goya", 1, 1),
        make_artwork("b", "Dos", "Goya", 1, 2),
        make_artwork("c", "Tres", "Goya", 1, 3),
    ];
    let first = filter_artworks(&artworks, "goya", ChapterFilter::Chapter(1));
    let second = filter_artworks(&artworks, "goya", ChapterFilter::Chapter(1));
    assert_eq!(first, second);
    let ids: Vec<&str> = first.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn reset_filters_restores_full_view() {
    let mut state = CatalogState::with_fallback();
    state.set_search_query("gloria".to_string());
    state.set_active_chapter(ChapterFilter::Chapter(1));
    state.reset_filters();
    assert_eq!(state.search_query, "");
    assert_eq!(state.active_chapter, ChapterFilter::All);
    assert_eq!(state.filtered(), state.artworks);
}

#[test]
fn chapter_set_is_sorted_and_deduplicated() {
    let artworks = vec![
        make_artwork("a", "A", "X", 3, 1),
        make_artwork("b", "B", "X", 1, 2),
        make_artwork("c", "C", "X", 3, 3),
        make_artwork("d", "D", "X", 2, 4),
    ];
    assert_eq!(chapter_numbers(&artworks), vec![1, 2, 3]);
}

#[test]
fn open_gallery_requires_selection_in_filtered_view() {
    let mut state = CatalogState::with_fallback();
    let bosco = state.artworks[1].clone();
    state.select(bosco.clone());

    // Filter the selection out, then try to open: must be a no-op
    state.set_search_query("gloria".to_string());
    state.open_gallery();
    assert!(state.gallery.is_none());

    // With a matching filter, the session opens at the selected artwork
    state.reset_filters();
    state.open_gallery();
    let session = state.gallery.as_ref().expect("gallery should open");
    assert_eq!(session.current().id, bosco.id);
    assert_eq!(session.index(), 1);
}

#[test]
fn close_gallery_is_terminal() {
    let mut state = CatalogState::with_fallback();
    state.select(state.artworks[0].clone());
    state.open_gallery();
    assert!(state.gallery.is_some());
    state.close_gallery();
    assert!(state.gallery.is_none());
}
