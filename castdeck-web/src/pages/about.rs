use crate::api;
use dioxus::prelude::*;

/// Dashboard version baked in at build time.
const DASHBOARD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn About() -> Element {
    let server_version = use_resource(api::fetch_version);

    let server_span = match &*server_version.read() {
        Some(Ok(info)) => rsx! {
            span { class: "text-white font-mono", "{info.version}" }
        },
        Some(Err(err)) => rsx! {
            span { class: "text-red-400 text-sm", "unavailable ({err})" }
        },
        None => rsx! {
            span { class: "text-gray-500 text-sm", "Loading..." }
        },
    };

    rsx! {
        h1 { class: "text-2xl font-semibold text-white mb-4", "About castdeck" }

        p { class: "text-gray-300 mb-6",
            "castdeck lets you discover and control cast devices on your network."
        }

        div { class: "bg-gray-800 rounded-lg p-6 max-w-md",
            h2 { class: "text-lg font-medium text-white mb-4", "Versions" }
            div { class: "space-y-3",
                div { class: "flex justify-between items-center",
                    span { class: "text-gray-400", "Server" }
                    {server_span}
                }
                div { class: "flex justify-between items-center",
                    span { class: "text-gray-400", "Dashboard" }
                    span { class: "text-white font-mono", "{DASHBOARD_VERSION}" }
                }
            }
        }
    }
}
