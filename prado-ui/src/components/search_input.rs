//! Search box for the catalog header

use crate::components::icons::SearchIcon;
use dioxus::prelude::*;

/// Free-text search over title and artist. No debounce - the natural
/// typing cadence is enough at catalog scale.
#[component]
pub fn SearchInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "relative flex-1 max-w-md",
            input {
                r#type: "text",
                placeholder: "Busca por obra o artista...",
                class: "w-full bg-slate-900/50 border border-slate-800 rounded-full py-2.5 pl-12 pr-4 focus:outline-none focus:ring-1 focus:ring-amber-500/50 focus:border-amber-500/50 transition-all text-sm backdrop-blur-sm placeholder:text-slate-600",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            div { class: "absolute left-4 top-1/2 -translate-y-1/2 pointer-events-none",
                SearchIcon { class: "w-4 h-4 text-slate-500" }
            }
        }
    }
}
