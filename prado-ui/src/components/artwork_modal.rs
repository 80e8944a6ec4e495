//! Detail overlay for a single artwork
//!
//! Rendered by the caller only while an artwork is selected. The image
//! region is the entry point into the immersive gallery; the close button
//! and the backdrop both dismiss the overlay.

use crate::components::icons::{ExternalLinkIcon, MaximizeIcon, XIcon};
use dioxus::prelude::*;
use prado_core::Artwork;

#[component]
pub fn ArtworkModal(
    artwork: Artwork,
    on_close: EventHandler<()>,
    on_expand: EventHandler<()>,
) -> Element {
    let artist_line = match &artwork.year {
        Some(year) => format!("{}, {year}", artwork.artist),
        None => artwork.artist.clone(),
    };
    let provenance = artwork
        .museum_name
        .clone()
        .unwrap_or_else(|| "Desconocida".to_string());

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-950/95 backdrop-blur-sm",
            // Backdrop: clicking anywhere outside the panel closes
            div {
                class: "absolute inset-0 cursor-zoom-out",
                onclick: move |_| on_close.call(()),
            }

            div { class: "relative w-full max-w-5xl bg-slate-900 rounded-2xl overflow-hidden shadow-2xl border border-slate-800 flex flex-col md:flex-row max-h-[90vh]",
                button {
                    class: "absolute top-4 right-4 z-20 p-2 rounded-full bg-slate-950/50 text-slate-300 hover:bg-slate-800 hover:text-white transition-colors",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_close.call(());
                    },
                    XIcon { class: "w-5 h-5" }
                }

                // Image region: opens the immersive gallery
                div {
                    class: "relative h-64 md:h-auto md:w-3/5 overflow-hidden bg-black group cursor-zoom-in",
                    onclick: move |_| on_expand.call(()),
                    img {
                        src: "{artwork.image_url}",
                        alt: "{artwork.title}",
                        class: "w-full h-full object-cover md:object-contain transition-transform duration-700 group-hover:scale-105",
                    }
                    div { class: "absolute inset-0 bg-black/20 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                        div { class: "bg-amber-600/80 backdrop-blur-md px-4 py-2 rounded-full text-white text-xs font-bold uppercase tracking-widest flex items-center gap-2",
                            MaximizeIcon { class: "w-4 h-4" }
                            "Ver en Detalle"
                        }
                    }
                }

                div { class: "p-8 md:w-2/5 overflow-y-auto bg-gradient-to-br from-slate-900 to-slate-950",
                    div { class: "mb-6",
                        div { class: "flex items-center gap-3 mb-3 text-slate-500 text-[10px] font-bold uppercase tracking-[0.2em]",
                            span { "Orden #{artwork.order}" }
                            span { class: "w-1 h-1 bg-slate-700 rounded-full" }
                            span { "Capítulo {artwork.chapter}" }
                        }
                        h2 { class: "font-serif text-3xl text-amber-50 mb-1 leading-tight", "{artwork.title}" }
                        p { class: "text-xl text-amber-200/60 italic font-light", "{artist_line}" }
                    }

                    if !artwork.description.is_empty() {
                        div { class: "mb-8",
                            p { class: "text-slate-400 leading-relaxed italic text-sm border-l border-amber-900/30 pl-4 py-1",
                                "{artwork.description}"
                            }
                        }
                    }

                    div { class: "flex flex-col gap-3",
                        if let Some(museum_url) = artwork.museum_url.clone() {
                            a {
                                href: "{museum_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "w-full inline-flex items-center justify-center gap-2 px-6 py-3 bg-amber-600 hover:bg-amber-500 text-white rounded-xl text-xs font-bold uppercase tracking-widest transition-all shadow-lg shadow-amber-900/20",
                                "Visitar Museo"
                                ExternalLinkIcon { class: "w-4 h-4" }
                            }
                        }

                        div { class: "text-center",
                            span { class: "text-slate-600 text-[9px] uppercase tracking-widest",
                                "Procedencia: {provenance}"
                            }
                        }
                    }
                }
            }
        }
    }
}
