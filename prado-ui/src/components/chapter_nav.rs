//! Chapter facet selector

use dioxus::prelude::*;
use prado_core::ChapterFilter;

const ACTIVE_PILL: &str = "px-6 py-2 rounded-full text-[10px] font-bold uppercase tracking-widest transition-all bg-amber-600 text-white shadow-lg";
const INACTIVE_PILL: &str = "px-6 py-2 rounded-full text-[10px] font-bold uppercase tracking-widest transition-all bg-slate-900 text-slate-500 hover:bg-slate-800 hover:text-slate-300";

/// One pill per distinct chapter, plus a leading "Catálogo" pill for the
/// unfiltered view.
#[component]
pub fn ChapterNav(
    chapters: Vec<i32>,
    active: ChapterFilter,
    on_select: EventHandler<ChapterFilter>,
) -> Element {
    rsx! {
        div { class: "mb-16 overflow-x-auto pb-4 no-scrollbar",
            div { class: "flex items-center justify-center gap-2 min-w-max",
                button {
                    class: if active == ChapterFilter::All { ACTIVE_PILL } else { INACTIVE_PILL },
                    onclick: move |_| on_select.call(ChapterFilter::All),
                    "Catálogo"
                }
                for chapter in chapters {
                    button {
                        key: "{chapter}",
                        class: if active == ChapterFilter::Chapter(chapter) { ACTIVE_PILL } else { INACTIVE_PILL },
                        onclick: move |_| on_select.call(ChapterFilter::Chapter(chapter)),
                        "Cap. {chapter}"
                    }
                }
            }
        }
    }
}
