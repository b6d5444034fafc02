//! App shell around the routed pages

use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white flex flex-col",
            header { class: "border-b border-gray-800",
                div { class: "container mx-auto px-4 py-4 flex items-baseline gap-6",
                    Link {
                        class: "text-xl font-bold tracking-tight text-white",
                        to: Route::Library {},
                        "Platter"
                    }
                    Link {
                        class: "text-sm text-gray-400 hover:text-white transition-colors",
                        to: Route::Library {},
                        "Library"
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
