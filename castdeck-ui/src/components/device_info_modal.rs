//! Device info modal with the raw discovery record

use crate::components::icons::XIcon;
use castdeck_common::DiscoveredDevice;
use dioxus::prelude::*;

/// Modal showing the full mDNS record for a device, TXT properties included.
#[component]
pub fn DeviceInfoModal(
    device: DiscoveredDevice,
    is_open: bool,
    on_close: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let device_id = device.id.as_deref().unwrap_or("Unknown").to_string();

    rsx! {
        div { class: "fixed inset-0 z-40 flex items-center justify-center",
            div {
                class: "absolute inset-0 bg-black/60",
                onclick: move |_| on_close.call(()),
            }
            div { class: "relative bg-gray-800 rounded-lg shadow-xl w-full max-w-lg mx-4",
                header { class: "flex justify-between items-center px-6 py-4 border-b border-gray-700",
                    p { class: "text-lg font-semibold text-white", "Device Information" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        aria_label: "close",
                        onclick: move |_| on_close.call(()),
                        XIcon {}
                    }
                }
                section { class: "px-6 py-4 max-h-96 overflow-y-auto",
                    p { class: "text-sm text-gray-300 mb-1",
                        strong { "Device ID: " }
                        "{device_id}"
                    }
                    p { class: "text-sm text-gray-300 mb-4 break-all",
                        strong { "Full Name: " }
                        "{device.fullname}"
                    }

                    h4 { class: "text-sm font-semibold text-white mb-2", "TXT Properties" }
                    table { class: "w-full text-sm text-left",
                        thead {
                            tr { class: "text-gray-400 border-b border-gray-700",
                                th { class: "py-1 pr-4", "Property" }
                                th { class: "py-1", "Value" }
                            }
                        }
                        tbody {
                            for (key, value) in device.txt_properties.iter() {
                                tr { key: "{key}", class: "text-gray-300 border-b border-gray-700/50",
                                    td { class: "py-1 pr-4 font-mono", "{key}" }
                                    td { class: "py-1 break-all", "{value}" }
                                }
                            }
                        }
                    }
                }
                footer { class: "px-6 py-3 border-t border-gray-700 text-right",
                    button {
                        class: "px-4 py-2 rounded bg-gray-700 hover:bg-gray-600 text-gray-200 text-sm",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
