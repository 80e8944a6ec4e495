//! Catalog view component - pure rendering, no data fetching
//!
//! Takes a snapshot of the catalog state and renders the header, chapter
//! facets, card grid, and footer. All mutation goes back through the
//! callbacks, which the caller wires to the state's named transitions.

use crate::components::artwork_card::ArtworkCard;
use crate::components::chapter_nav::ChapterNav;
use crate::components::icons::BookOpenIcon;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::search_input::SearchInput;
use crate::components::status_notice::StatusNotice;
use dioxus::prelude::*;
use prado_core::{Artwork, CatalogState, ChapterFilter};

#[component]
pub fn CatalogView(
    state: CatalogState,
    on_search_change: EventHandler<String>,
    on_chapter_select: EventHandler<ChapterFilter>,
    on_reset_filters: EventHandler<()>,
    on_artwork_click: EventHandler<Artwork>,
) -> Element {
    let chapters = state.chapters();
    let filtered = state.filtered();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-200 selection:bg-amber-600/30",
            header { class: "sticky top-0 z-40 bg-slate-950/80 backdrop-blur-xl border-b border-slate-900",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4",
                    div { class: "flex flex-col md:flex-row md:items-center justify-between gap-6",
                        // Brand block doubles as a filter reset
                        div {
                            class: "flex items-center gap-4 group cursor-pointer",
                            onclick: move |_| on_reset_filters.call(()),
                            div { class: "w-10 h-10 bg-gradient-to-br from-amber-500 to-amber-900 rounded-lg flex items-center justify-center shadow-lg group-hover:shadow-amber-900/40 transition-all",
                                BookOpenIcon { class: "w-6 h-6 text-white" }
                            }
                            div {
                                h1 { class: "font-serif text-xl font-bold text-amber-50 tracking-tight",
                                    "Prado Companion"
                                }
                                p { class: "text-[9px] text-amber-600 tracking-[0.3em] uppercase font-black opacity-80 leading-none mt-1",
                                    "El Maestro del Prado"
                                }
                            }
                        }

                        SearchInput {
                            value: state.search_query.clone(),
                            on_input: move |value| on_search_change.call(value),
                        }
                    }
                }
            }

            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                ChapterNav {
                    chapters,
                    active: state.active_chapter,
                    on_select: move |filter| on_chapter_select.call(filter),
                }

                if let Some(message) = state.error.clone() {
                    StatusNotice { message }
                }

                if state.loading {
                    LoadingSpinner {}
                } else {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-x-8 gap-y-12",
                        for artwork in filtered.iter() {
                            ArtworkCard {
                                key: "{artwork.id}",
                                artwork: artwork.clone(),
                                on_click: move |artwork| on_artwork_click.call(artwork),
                            }
                        }
                    }

                    if filtered.is_empty() {
                        div { class: "flex flex-col items-center justify-center py-20 text-center",
                            h3 { class: "text-xl font-serif text-slate-500 italic",
                                "No se encontraron obras con ese criterio"
                            }
                            button {
                                class: "mt-6 text-amber-500 text-xs font-bold uppercase tracking-widest hover:text-amber-400 transition-colors",
                                onclick: move |_| on_reset_filters.call(()),
                                "Limpiar filtros"
                            }
                        }
                    }
                }
            }

            footer { class: "mt-20 py-20 border-t border-slate-900 bg-slate-950/50",
                div { class: "max-w-7xl mx-auto px-4 text-center",
                    p { class: "font-serif text-slate-500 text-lg italic max-w-xl mx-auto leading-relaxed",
                        "\"Para quien sabe mirar, el Prado no es un museo, es una revelación.\""
                    }
                }
            }
        }
    }
}
