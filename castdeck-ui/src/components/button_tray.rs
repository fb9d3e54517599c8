//! Device card action buttons

use crate::components::icons::{CastIcon, InfoIcon, RefreshIcon, StopIcon};
use dioxus::prelude::*;

/// Info / refresh / cast / stop buttons for a device card.
///
/// Stop is disabled while `allow_stop` is false (the receiver is already
/// showing the idle backdrop).
#[component]
pub fn ButtonTrayView(
    allow_stop: bool,
    on_info: EventHandler<()>,
    on_refresh: EventHandler<()>,
    on_start_media: EventHandler<()>,
    on_stop_media: EventHandler<()>,
) -> Element {
    let stop_class = if allow_stop {
        "bg-red-700 hover:bg-red-600 text-white cursor-pointer"
    } else {
        "bg-red-950 text-red-800 cursor-default"
    };

    rsx! {
        div { class: "flex justify-between items-center mt-3",
            div { class: "flex gap-2",
                button {
                    class: "p-2 rounded bg-gray-700 hover:bg-gray-600 text-gray-200",
                    title: "Show device info",
                    aria_label: "Show device info",
                    onclick: move |_| on_info.call(()),
                    InfoIcon {}
                }
                button {
                    class: "p-2 rounded bg-gray-700 hover:bg-gray-600 text-gray-200",
                    title: "Refresh device",
                    aria_label: "Refresh device",
                    onclick: move |_| on_refresh.call(()),
                    RefreshIcon {}
                }
                button {
                    class: "p-2 rounded bg-blue-700 hover:bg-blue-600 text-white",
                    title: "Start media",
                    aria_label: "Start media",
                    onclick: move |_| on_start_media.call(()),
                    CastIcon {}
                }
            }
            button {
                class: "p-2 rounded {stop_class}",
                title: "Stop media",
                aria_label: "Stop media",
                disabled: !allow_stop,
                onclick: move |_| on_stop_media.call(()),
                StopIcon {}
            }
        }
    }
}
