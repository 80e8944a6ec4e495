//! Inline status notice
//!
//! Non-blocking message shown when the remote catalog sync failed or came
//! back empty. The grid below stays interactive with whatever data is
//! loaded, so there is no retry action here.

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

#[component]
pub fn StatusNotice(message: String) -> Element {
    rsx! {
        div { class: "mb-10 bg-amber-900/20 border border-amber-800/40 rounded-lg px-4 py-3",
            div { class: "flex items-center justify-center gap-3",
                AlertTriangleIcon { class: "w-4 h-4 text-amber-500 flex-shrink-0" }
                p { class: "text-sm text-amber-200/80", "{message}" }
            }
        }
    }
}
