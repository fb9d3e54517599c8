use crate::Route;
use castdeck_ui::{NavBarView, NavItem};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Devices".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "about".to_string(),
            label: "About".to_string(),
            is_active: matches!(current_route, Route::About {}),
        },
    ];

    rsx! {
        div { class: "min-h-screen bg-gray-900",
            NavBarView {
                nav_items,
                on_nav_click: move |id: String| {
                    match id.as_str() {
                        "about" => {
                            navigator().push(Route::About {});
                        }
                        _ => {
                            navigator().push(Route::Home {});
                        }
                    }
                },
            }
            main { class: "max-w-6xl mx-auto px-6 py-8",
                Outlet::<Route> {}
            }
        }
    }
}
