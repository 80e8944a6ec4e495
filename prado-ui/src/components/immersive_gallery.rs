//! Immersive gallery component
//!
//! Full-screen single-artwork viewer over a [`GallerySession`] snapshot.
//! Navigation wraps in both directions and is driven by the arrow buttons
//! or the keyboard (ArrowLeft / ArrowRight / Escape). The keydown listener
//! is document-scoped and held in a hook, so it is released whenever the
//! component unmounts - no listener survives a close.

use std::rc::Rc;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::wasm_utils::DocumentEventListener;
use dioxus::prelude::*;
use prado_core::GallerySession;

#[component]
pub fn ImmersiveGallery(
    session: GallerySession,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut hovered = use_signal(|| false);

    // Held in hook storage so Drop removes the listener on unmount
    let _keyboard = use_hook(|| {
        Rc::new(DocumentEventListener::keydown(move |event| {
            match event.key().as_str() {
                "ArrowRight" => on_next.call(()),
                "ArrowLeft" => on_prev.call(()),
                "Escape" => on_close.call(()),
                _ => {}
            }
        }))
    });

    let artwork = session.current().clone();
    let position = session.index() + 1;
    let total = session.len();
    let artist_line = match &artwork.year {
        Some(year) => format!("{}, {year}", artwork.artist),
        None => artwork.artist.clone(),
    };
    let provenance = artwork
        .museum_name
        .clone()
        .unwrap_or_else(|| "Museo del Prado".to_string());
    let info_class = if hovered() {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-10 opacity-0 pointer-events-none"
    };

    rsx! {
        div { class: "fixed inset-0 z-[100] bg-black flex items-center justify-center overflow-hidden",
            button {
                class: "absolute top-6 right-6 z-[110] p-3 rounded-full bg-white/5 text-white/50 hover:bg-white/10 hover:text-white transition-all backdrop-blur-md border border-white/10",
                onclick: move |_| on_close.call(()),
                XIcon { class: "w-6 h-6" }
            }

            button {
                class: "absolute left-6 top-1/2 -translate-y-1/2 z-[110] p-4 rounded-full bg-white/5 text-white/30 hover:bg-white/10 hover:text-white transition-all backdrop-blur-md border border-white/10 group",
                onclick: move |_| on_prev.call(()),
                ChevronLeftIcon {
                    class: "w-8 h-8 transform group-hover:-translate-x-1 transition-transform",
                    stroke_width: "1.5",
                }
            }

            button {
                class: "absolute right-6 top-1/2 -translate-y-1/2 z-[110] p-4 rounded-full bg-white/5 text-white/30 hover:bg-white/10 hover:text-white transition-all backdrop-blur-md border border-white/10 group",
                onclick: move |_| on_next.call(()),
                ChevronRightIcon {
                    class: "w-8 h-8 transform group-hover:translate-x-1 transition-transform",
                    stroke_width: "1.5",
                }
            }

            div {
                class: "w-full h-full flex items-center justify-center p-4 md:p-12",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                img {
                    key: "{artwork.id}",
                    src: "{artwork.image_url}",
                    alt: "{artwork.title}",
                    class: "max-w-full max-h-full object-contain shadow-2xl",
                }

                // Metadata overlay, revealed on hover
                div { class: "absolute bottom-0 left-0 right-0 p-12 bg-gradient-to-t from-black via-black/80 to-transparent transition-all duration-500 transform {info_class}",
                    div { class: "max-w-4xl mx-auto text-center",
                        h2 { class: "font-serif text-4xl text-amber-50 mb-2 drop-shadow-2xl", "{artwork.title}" }
                        p { class: "text-xl text-amber-200/70 italic drop-shadow-lg", "{artist_line}" }
                        div { class: "mt-4 flex items-center justify-center gap-4 text-white/30 text-[10px] uppercase tracking-[0.3em]",
                            span { "Capítulo {artwork.chapter}" }
                            span { class: "w-1 h-1 bg-white/10 rounded-full" }
                            span { "{provenance}" }
                        }
                    }
                }
            }

            // Position counter
            div { class: "absolute top-8 left-1/2 -translate-x-1/2 text-white/20 text-xs font-mono tracking-widest bg-white/5 px-4 py-1.5 rounded-full border border-white/5",
                "{position} / {total}"
            }
        }
    }
}
