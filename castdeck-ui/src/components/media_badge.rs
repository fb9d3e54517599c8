//! Receiver app badge shown on each device card

use crate::components::icons::{
    GlobeIcon, ImagesIcon, MonitorPlayIcon, QuestionIcon, YoutubeIcon,
};
use castdeck_common::AppIdentity;
use dioxus::prelude::*;

/// Badge showing which receiver application is currently running.
///
/// Unrecognized identities fall through to the `Unknown` styling, so a new
/// app on the device never renders an empty badge.
#[component]
pub fn MediaBadgeView(identity: AppIdentity) -> Element {
    let (bg_class, text_class) = match identity {
        AppIdentity::Backdrop => ("bg-gray-700", "text-gray-300"),
        AppIdentity::DefaultMedia => ("bg-blue-900", "text-blue-200"),
        AppIdentity::YouTube => ("bg-red-800", "text-red-100"),
        AppIdentity::WebView => ("bg-indigo-900", "text-indigo-200"),
        AppIdentity::Unknown => ("bg-gray-700", "text-gray-400"),
    };

    rsx! {
        div { class: "rounded-lg mt-4 h-32 flex justify-center items-center {bg_class}",
            div { class: "text-center {text_class}",
                match identity {
                    AppIdentity::Backdrop => rsx! { ImagesIcon { class: "w-12 h-12 mx-auto" } },
                    AppIdentity::DefaultMedia => rsx! { MonitorPlayIcon { class: "w-12 h-12 mx-auto" } },
                    AppIdentity::YouTube => rsx! { YoutubeIcon { class: "w-12 h-12 mx-auto" } },
                    AppIdentity::WebView => rsx! { GlobeIcon { class: "w-12 h-12 mx-auto" } },
                    AppIdentity::Unknown => rsx! { QuestionIcon { class: "w-12 h-12 mx-auto" } },
                }
                p { class: "mt-2 text-xs font-bold", "{identity.label()}" }
            }
        }
    }
}
