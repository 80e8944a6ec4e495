//! Loading spinner component

use dioxus::prelude::*;

/// Spinner with a message, shown during the initial catalog fetch.
#[component]
pub fn LoadingSpinner(
    #[props(default = "Abriendo los archivos...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-40",
            div { class: "w-12 h-12 border-2 border-amber-500/10 border-t-amber-500 rounded-full animate-spin" }
            p { class: "font-serif italic text-lg text-slate-500 mt-6 animate-pulse", "{message}" }
        }
    }
}
