//! Device list state: fetched once on mount, then on demand.
//!
//! Unlike the per-device status there is no poller here; the list only
//! changes when the user asks for a refresh or a rescan. Every refresh
//! replaces the whole collection; `fullname` keys keep rendering stable.

use crate::api;
use castdeck_common::{DiscoveredDevice, FetchState};
use dioxus::prelude::*;

/// Handle to the discovered-device list state.
#[derive(Clone, Copy)]
pub struct DeviceListHandle {
    snapshot: Signal<FetchState<Vec<DiscoveredDevice>>>,
    refresh: Callback<()>,
}

impl DeviceListHandle {
    /// Devices from the last successful fetch. Empty both before the first
    /// fetch completes and when discovery genuinely found nothing; use
    /// [`Self::is_searching`] and [`Self::found_nothing`] to tell the two
    /// apart.
    pub fn devices(&self) -> Vec<DiscoveredDevice> {
        self.snapshot.read().value.clone().unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.snapshot.read().loading
    }

    /// True while the list is being fetched with nothing to show yet.
    pub fn is_searching(&self) -> bool {
        self.snapshot.read().is_searching()
    }

    /// True once a fetch completed and discovery found no devices.
    pub fn found_nothing(&self) -> bool {
        self.snapshot.read().found_nothing()
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot.read().error.clone()
    }

    /// Re-fetch the device list.
    pub fn refresh(&self) {
        self.refresh.call(());
    }

    /// Ask the backend to run a fresh discovery scan, then re-fetch.
    pub fn rescan(&self) {
        let refresh = self.refresh;
        spawn(async move {
            if let Err(err) = api::trigger_scan().await {
                tracing::warn!("discovery scan request failed: {err}");
            }
            refresh.call(());
        });
    }
}

/// Device list store, refreshed on mount.
pub fn use_device_list() -> DeviceListHandle {
    let snapshot = use_signal(FetchState::<Vec<DiscoveredDevice>>::default);

    let refresh = use_callback(move |_: ()| {
        let mut snapshot = snapshot;
        spawn(async move {
            snapshot.with_mut(FetchState::begin);
            let result = api::fetch_devices().await;
            match &result {
                Ok(devices) => tracing::info!("found {} device(s)", devices.len()),
                Err(err) => tracing::warn!("device list fetch failed: {err}"),
            }
            snapshot.with_mut(|s| s.resolve(result.map_err(|e| e.to_string())));
        });
    });

    use_effect(move || {
        refresh.call(());
    });

    DeviceListHandle { snapshot, refresh }
}
