//! Bundled fallback catalog.
//!
//! Used as the initial catalog value and retained whenever the remote
//! source is unreachable or returns nothing usable.

use crate::artwork::Artwork;

pub fn fallback_catalog() -> Vec<Artwork> {
    vec![
        Artwork {
            id: "f1".to_string(),
            title: "La Gloria".to_string(),
            artist: "Tiziano".to_string(),
            chapter: 1,
            chapter_title: "El encuentro".to_string(),
            description: "La obra que Carlos V pidió ver antes de morir. Un portal hacia el más allá."
                .to_string(),
            image_url: "https://picsum.photos/seed/prado1/800/600".to_string(),
            year: Some("1551-1554".to_string()),
            order: 1,
            museum_name: None,
            museum_url: None,
        },
        Artwork {
            id: "f2".to_string(),
            title: "El Jardín de las Delicias".to_string(),
            artist: "El Bosco".to_string(),
            chapter: 2,
            chapter_title: "El bosque de las delicias".to_string(),
            description:
                "Un mapa del alma humana. El Bosco esconde secretos que Javier Sierra nos ayuda a descifrar."
                    .to_string(),
            image_url: "https://picsum.photos/seed/prado2/800/600".to_string(),
            year: Some("1490-1500".to_string()),
            order: 2,
            museum_name: None,
            museum_url: None,
        },
    ]
}
