use prado_core::{Artwork, GallerySession};

fn make_artwork(id: &str, order: i32) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: format!("Obra {id}"),
        artist: "Autor".to_string(),
        chapter: 1,
        chapter_title: "Capítulo 1".to_string(),
        description: String::new(),
        image_url: format!("https://example.org/{id}.jpg"),
        year: None,
        order,
        museum_name: None,
        museum_url: None,
    }
}

#[test]
fn open_positions_at_the_selected_artwork() {
    let items = vec![make_artwork("a", 1), make_artwork("b", 2)];
    let session = GallerySession::open(items, "b").unwrap();
    assert_eq!(session.index(), 1);
    assert_eq!(session.current().id, "b");
    assert_eq!(session.len(), 2);
}

#[test]
fn open_refuses_unknown_id_and_empty_list() {
    let items = vec![make_artwork("a", 1)];
    assert!(GallerySession::open(items, "missing").is_none());
    assert!(GallerySession::open(vec![], "a").is_none());
}

#[test]
fn next_and_prev_wrap_around() {
    let items = vec![make_artwork("a", 1), make_artwork("b", 2), make_artwork("c", 3)];
    let mut session = GallerySession::open(items, "a").unwrap();

    session.prev();
    assert_eq!(session.index(), 2);

    session.next();
    assert_eq!(session.index(), 0);
}

#[test]
fn single_item_session_wraps_to_itself() {
    let items = vec![make_artwork("solo", 1)];
    let mut session = GallerySession::open(items, "solo").unwrap();
    session.next();
    assert_eq!(session.index(), 0);
    session.prev();
    assert_eq!(session.index(), 0);
}

#[test]
fn next_twice_on_two_items_returns_to_start() {
    let items = vec![make_artwork("a", 1), make_artwork("b", 2)];
    let mut session = GallerySession::open(items, "a").unwrap();
    session.next();
    session.next();
    assert_eq!(session.index(), 0);
}

#[test]
fn session_is_a_snapshot() {
    let items = vec![make_artwork("a", 1), make_artwork("b", 2)];
    let mut source = items.clone();
    let session = GallerySession::open(items, "a").unwrap();

    // Mutating the source list after open does not affect the session
    source.clear();
    assert_eq!(session.len(), 2);
}
