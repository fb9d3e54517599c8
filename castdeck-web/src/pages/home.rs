use crate::components::DeviceCard;
use crate::discovery::use_device_list;
use castdeck_ui::{ErrorNotice, LoadingSpinner};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let list = use_device_list();

    let devices = list.devices();
    let loading = list.loading();
    let refresh_class = if loading {
        "px-4 py-2 rounded bg-blue-900 text-blue-300 text-sm cursor-default"
    } else {
        "px-4 py-2 rounded bg-blue-700 hover:bg-blue-600 text-white text-sm"
    };

    rsx! {
        div { class: "flex justify-between items-center mb-6",
            h1 { class: "text-2xl font-semibold text-white", "Cast Devices" }
            div { class: "flex gap-2",
                button {
                    class: "px-4 py-2 rounded bg-gray-700 hover:bg-gray-600 text-gray-200 text-sm",
                    title: "Run a fresh discovery scan",
                    onclick: move |_| list.rescan(),
                    "Rescan Network"
                }
                button {
                    class: "{refresh_class}",
                    disabled: loading,
                    onclick: move |_| list.refresh(),
                    "Refresh Devices"
                }
            }
        }

        if let Some(error) = list.error() {
            ErrorNotice { message: "Error: {error}" }
        }

        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for device in devices.iter() {
                DeviceCard { key: "{device.fullname}", device: device.clone() }
            }
        }

        if list.is_searching() {
            LoadingSpinner { message: "Searching for cast devices...".to_string() }
        }

        if list.found_nothing() {
            div { class: "bg-yellow-900 border border-yellow-700 text-yellow-100 px-4 py-3 rounded",
                "No cast devices found. Try refreshing the list."
            }
        }
    }
}
