//! Top navigation bar

use dioxus::prelude::*;

/// One entry in the nav bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Navigation bar view. Routing happens in the app via `on_nav_click`.
#[component]
pub fn NavBarView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        nav { class: "bg-gray-800 border-b border-gray-700 px-6 py-3 flex items-center gap-6",
            span { class: "text-white font-semibold", "castdeck" }
            for item in nav_items {
                button {
                    key: "{item.id}",
                    class: if item.is_active {
                        "text-white text-sm font-medium"
                    } else {
                        "text-gray-400 hover:text-white text-sm"
                    },
                    onclick: {
                        let id = item.id.clone();
                        move |_| on_nav_click.call(id.clone())
                    },
                    "{item.label}"
                }
            }
        }
    }
}
