//! platter-web - browser album player
//!
//! Routes, pages, and the audio playback service. The views live in
//! `platter-ui`; the catalog and session logic live in `platter-common`.

pub mod pages;
pub mod playback;

use dioxus::prelude::*;
use pages::{AlbumDetail, AppLayout, Library};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Library {},
    #[route("/album/:slug")]
    AlbumDetail { slug: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
