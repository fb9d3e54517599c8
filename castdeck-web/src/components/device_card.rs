//! Device card wiring: one provider per card, pure views inside.

use crate::api;
use crate::device_status::{
    use_device_status, DeviceStatusProvider, ACTION_REFRESH_DELAY_MS,
};
use castdeck_common::{AppIdentity, DiscoveredDevice, MediaSettings};
use castdeck_ui::{DeviceCardView, DeviceInfoModal, StartMediaModal};
use dioxus::prelude::*;

/// Card for one discovered device.
///
/// Wraps its content in a [`DeviceStatusProvider`] so the badge, media line
/// and button tray all observe (and refresh) the same status snapshot.
#[component]
pub fn DeviceCard(device: DiscoveredDevice) -> Element {
    rsx! {
        DeviceStatusProvider {
            ip: device.ip_address.clone(),
            port: device.port,
            DeviceCardContent { device }
        }
    }
}

#[component]
fn DeviceCardContent(device: DiscoveredDevice) -> Element {
    let status = use_device_status();
    let mut show_info = use_signal(|| false);
    let mut show_start_media = use_signal(|| false);

    let identity = status.app_identity();
    let allow_stop = identity != AppIdentity::Backdrop;

    // Re-read the media channel whenever the status snapshot changes. Any
    // running app other than the idle backdrop may host a media session.
    let media = use_resource({
        let ip = device.ip_address.clone();
        let port = device.port;
        move || {
            let ip = ip.clone();
            let media_app_active = status
                .status()
                .map_or(false, |s| s.media_app_active());
            async move {
                if media_app_active {
                    api::fetch_media_status(&ip, port).await.ok()
                } else {
                    None
                }
            }
        }
    });
    let media = media().flatten();

    let on_stop_media = {
        let device = device.clone();
        move |_| {
            let ip = device.ip_address.clone();
            let port = device.port;
            spawn(async move {
                if let Err(err) = api::stop_media(&ip, port).await {
                    tracing::error!("stop media failed for {ip}:{port}: {err}");
                }
            });
            status.refresh_after(ACTION_REFRESH_DELAY_MS);
        }
    };

    let on_submit_media = {
        let device = device.clone();
        move |settings: MediaSettings| {
            let device = device.clone();
            spawn(async move {
                match api::start_media(&device, settings).await {
                    Ok(()) => tracing::info!("media sent to {}", device.address_label()),
                    Err(err) => tracing::error!("start media failed: {err}"),
                }
            });
            status.refresh_after(ACTION_REFRESH_DELAY_MS);
            show_start_media.set(false);
        }
    };

    rsx! {
        DeviceCardView {
            device: device.clone(),
            identity,
            error: status.error(),
            media,
            allow_stop,
            on_info: move |_| show_info.set(true),
            on_refresh: move |_| status.refresh(),
            on_start_media: move |_| show_start_media.set(true),
            on_stop_media,
        }

        StartMediaModal {
            device: device.clone(),
            is_open: show_start_media(),
            on_close: move |_| show_start_media.set(false),
            on_submit: on_submit_media,
        }

        DeviceInfoModal {
            device,
            is_open: show_info(),
            on_close: move |_| show_info.set(false),
        }
    }
}
