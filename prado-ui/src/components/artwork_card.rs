//! Artwork card component - pure view with callbacks

use dioxus::prelude::*;
use prado_core::Artwork;

/// One clickable card in the catalog grid.
///
/// Pure view component; the caller decides what selection means.
#[component]
pub fn ArtworkCard(artwork: Artwork, on_click: EventHandler<Artwork>) -> Element {
    let card_class = "group relative overflow-hidden rounded-lg bg-slate-900/40 transition-all duration-500 hover:scale-[1.02] hover:shadow-[0_20px_50px_rgba(0,0,0,0.5)] cursor-pointer border border-slate-800/50";

    rsx! {
        div {
            class: "{card_class}",
            "data-testid": "artwork-card",
            onclick: {
                let artwork = artwork.clone();
                move |_| on_click.call(artwork.clone())
            },
            div { class: "aspect-[3/4] w-full overflow-hidden",
                img {
                    src: "{artwork.image_url}",
                    alt: "{artwork.title}",
                    loading: "lazy",
                    class: "h-full w-full object-cover transition-transform duration-700 group-hover:scale-105 opacity-70 group-hover:opacity-100",
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-slate-950 via-transparent to-transparent opacity-60 group-hover:opacity-40 transition-opacity" }
            }
            div { class: "absolute bottom-0 left-0 right-0 p-5 transform translate-y-2 group-hover:translate-y-0 transition-transform duration-500",
                h3 { class: "font-serif text-lg text-amber-50 leading-tight mb-1 drop-shadow-lg",
                    "{artwork.title}"
                }
                p { class: "text-slate-400 text-xs italic tracking-wide uppercase font-medium group-hover:text-amber-200/70 transition-colors",
                    "{artwork.artist}"
                }
            }
        }
    }
}
