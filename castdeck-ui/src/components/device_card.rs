//! Device card view

use crate::components::button_tray::ButtonTrayView;
use crate::components::helpers::ErrorNotice;
use crate::components::media_badge::MediaBadgeView;
use castdeck_common::{AppIdentity, DiscoveredDevice, MediaStatus};
use dioxus::prelude::*;

/// Card for one discovered device: name, address, current receiver badge,
/// optional playback line, status error, and the action tray.
///
/// Purely presentational. The app crate owns the status provider and passes
/// the latest snapshot fields down as props.
#[component]
pub fn DeviceCardView(
    device: DiscoveredDevice,
    /// Identity of the receiver app from the latest status snapshot.
    identity: AppIdentity,
    /// Error from the latest failed status fetch, shown inline. A stale
    /// badge stays visible alongside it.
    #[props(default)]
    error: Option<String>,
    /// Media playback status, when a media session is active.
    #[props(default)]
    media: Option<MediaStatus>,
    allow_stop: bool,
    on_info: EventHandler<()>,
    on_refresh: EventHandler<()>,
    on_start_media: EventHandler<()>,
    on_stop_media: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bg-gray-800 rounded-lg p-5 shadow",
            h4 { class: "text-lg font-semibold text-white mb-1", "{device.display_name()}" }
            p { class: "text-sm text-gray-400 mb-3", "{device.model_label()}" }

            p { class: "text-xs text-gray-500 uppercase font-bold", "IP Address" }
            p { class: "text-sm text-gray-300 break-all", "{device.address_label()}" }

            MediaBadgeView { identity }

            if let Some(media) = media {
                MediaStatusLine { media }
            }

            if let Some(error) = error {
                div { class: "mt-3",
                    ErrorNotice { message: error }
                }
            }

            ButtonTrayView {
                allow_stop,
                on_info,
                on_refresh,
                on_start_media,
                on_stop_media,
            }
        }
    }
}

/// One-line playback summary under the media badge.
#[component]
pub fn MediaStatusLine(media: MediaStatus) -> Element {
    let position = media
        .current_time
        .map(|secs| format!(" · {}", format_position(secs)))
        .unwrap_or_default();

    rsx! {
        p { class: "mt-2 text-xs text-gray-400 text-center",
            "{media.player_state.label()}{position}"
        }
    }
}

/// Format a position in seconds as m:ss.
fn format_position(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
