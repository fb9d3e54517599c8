//! Start media modal

use crate::components::icons::XIcon;
use castdeck_common::{DiscoveredDevice, MediaSettings, ReceiverKind, StreamType};
use dioxus::prelude::*;

fn receiver_from_value(value: &str) -> ReceiverKind {
    match value {
        "YouTube" => ReceiverKind::YouTube,
        "Web" => ReceiverKind::Web,
        _ => ReceiverKind::Default,
    }
}

fn stream_type_from_value(value: &str) -> StreamType {
    match value {
        "Live" => StreamType::Live,
        "Buffered" => StreamType::Buffered,
        _ => StreamType::None,
    }
}

/// Modal form for launching media on a device.
///
/// Collects receiver kind, media URL, MIME type and stream type; emits the
/// whole form as `MediaSettings` on submit. The caller is responsible for
/// the actual request and for refreshing the device status afterwards.
#[component]
pub fn StartMediaModal(
    device: DiscoveredDevice,
    is_open: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<MediaSettings>,
) -> Element {
    let mut receiver = use_signal(ReceiverKind::default);
    let mut media_url = use_signal(String::new);
    let mut content_type = use_signal(String::new);
    let mut stream_type = use_signal(StreamType::default);

    if !is_open {
        return rsx! {};
    }

    let device_id = device.id.as_deref().unwrap_or("Unknown").to_string();
    let receiver_value = format!("{:?}", receiver());
    let stream_type_value = format!("{:?}", stream_type());

    rsx! {
        div { class: "fixed inset-0 z-40 flex items-center justify-center",
            div {
                class: "absolute inset-0 bg-black/60",
                onclick: move |_| on_close.call(()),
            }
            div { class: "relative bg-gray-800 rounded-lg shadow-xl w-full max-w-lg mx-4",
                header { class: "flex justify-between items-center px-6 py-3 border-b border-gray-700",
                    p { class: "text-lg font-semibold text-white", "{device.display_name()}" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        aria_label: "close",
                        onclick: move |_| on_close.call(()),
                        XIcon {}
                    }
                }
                section { class: "px-6 py-4",
                    div { class: "flex justify-between text-xs text-gray-400 mb-1",
                        strong { "Device Model:" }
                        span { "{device.model_label()}" }
                    }
                    div { class: "flex justify-between text-xs text-gray-400 mb-4",
                        strong { "Device ID:" }
                        span { class: "break-all ml-2", "{device_id}" }
                    }

                    div { class: "space-y-4",
                        div {
                            label { class: "block text-sm text-gray-300 mb-1", "Receiver Type" }
                            select {
                                class: "w-full bg-gray-700 text-gray-200 rounded px-3 py-2 text-sm",
                                value: "{receiver_value}",
                                onchange: move |e| receiver.set(receiver_from_value(&e.value())),
                                for kind in ReceiverKind::ALL {
                                    option { value: "{kind:?}", "{kind.label()}" }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm text-gray-300 mb-1", "Content ID (URL)" }
                            input {
                                class: "w-full bg-gray-700 text-gray-200 rounded px-3 py-2 text-sm",
                                r#type: "text",
                                placeholder: "e.g. http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
                                value: "{media_url}",
                                oninput: move |e| media_url.set(e.value()),
                            }
                        }
                        div {
                            label { class: "block text-sm text-gray-300 mb-1", "Content Type (MIME)" }
                            input {
                                class: "w-full bg-gray-700 text-gray-200 rounded px-3 py-2 text-sm",
                                r#type: "text",
                                placeholder: "e.g. video/mp4",
                                value: "{content_type}",
                                oninput: move |e| content_type.set(e.value()),
                            }
                        }
                        div {
                            label { class: "block text-sm text-gray-300 mb-1", "Stream Type" }
                            select {
                                class: "w-full bg-gray-700 text-gray-200 rounded px-3 py-2 text-sm",
                                value: "{stream_type_value}",
                                onchange: move |e| stream_type.set(stream_type_from_value(&e.value())),
                                for st in StreamType::ALL {
                                    option { value: "{st:?}", "{st.label()}" }
                                }
                            }
                        }
                    }
                }
                footer { class: "flex justify-end gap-2 px-6 py-3 border-t border-gray-700",
                    button {
                        class: "px-4 py-2 rounded bg-gray-700 hover:bg-gray-600 text-gray-200 text-sm",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "px-4 py-2 rounded bg-blue-700 hover:bg-blue-600 text-white text-sm",
                        onclick: move |_| {
                            on_submit.call(MediaSettings {
                                receiver: receiver(),
                                media_url: media_url(),
                                content_type: content_type(),
                                stream_type: stream_type(),
                            });
                        },
                        "Send to Receiver"
                    }
                }
            }
        }
    }
}
