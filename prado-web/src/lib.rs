pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::CatalogPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        CatalogPage {}
    }
}
