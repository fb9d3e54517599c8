//! Shared per-device status state, distributed by context.
//!
//! One `DeviceStatusProvider` owns the status snapshot for one device and
//! makes it available to every component in its subtree. Sibling consumers
//! (badge, media line, button tray) read the same snapshot and trigger
//! refreshes on the same underlying state.

use crate::api;
use crate::time::sleep_ms;
use castdeck_common::{AppIdentity, DeviceStatus, FetchState};
use dioxus::prelude::*;

/// How often a mounted device card re-reads its status.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

/// Delay before re-reading status after a start/stop action, giving the
/// receiver time to apply the change.
pub const ACTION_REFRESH_DELAY_MS: u64 = 500;

/// Handle to the device status shared within one provider subtree.
#[derive(Clone, Copy)]
pub struct DeviceStatusContext {
    snapshot: Signal<FetchState<DeviceStatus>>,
    refresh: Callback<()>,
}

impl DeviceStatusContext {
    /// Latest successfully fetched status, if any.
    pub fn status(&self) -> Option<DeviceStatus> {
        self.snapshot.read().value.clone()
    }

    /// Whether a status fetch is in flight.
    pub fn loading(&self) -> bool {
        self.snapshot.read().loading
    }

    /// Error from the most recent failed fetch. The last good status stays
    /// available alongside it.
    pub fn error(&self) -> Option<String> {
        self.snapshot.read().error.clone()
    }

    /// Identity of the receiver app from the latest status.
    pub fn app_identity(&self) -> AppIdentity {
        self.snapshot
            .read()
            .value
            .as_ref()
            .map(DeviceStatus::app_identity)
            .unwrap_or(AppIdentity::Unknown)
    }

    /// Trigger a refresh now.
    pub fn refresh(&self) {
        self.refresh.call(());
    }

    /// Schedule a refresh after `delay_ms`.
    pub fn refresh_after(&self, delay_ms: u64) {
        let refresh = self.refresh;
        spawn(async move {
            sleep_ms(delay_ms).await;
            refresh.call(());
        });
    }
}

/// Access the device status shared by the nearest [`DeviceStatusProvider`].
///
/// Panics when called outside a provider subtree; that is a wiring defect,
/// not a runtime condition.
pub fn use_device_status() -> DeviceStatusContext {
    use_context::<DeviceStatusContext>()
}

/// Binds one status snapshot and poller to a device address for the lifetime
/// of its subtree.
#[component]
pub fn DeviceStatusProvider(
    ip: String,
    port: u16,
    #[props(default = DEFAULT_POLL_INTERVAL_MS)] poll_interval_ms: u64,
    children: Element,
) -> Element {
    let snapshot = use_signal(FetchState::<DeviceStatus>::default);

    // Each refresh runs to completion independently. Overlapping calls (a
    // poll tick racing a button-triggered refresh) are last-write-wins on
    // the snapshot, which is acceptable for an idempotent read.
    let refresh = use_callback({
        let ip = ip.clone();
        move |_: ()| {
            let ip = ip.clone();
            let mut snapshot = snapshot;
            spawn(async move {
                snapshot.with_mut(FetchState::begin);
                let result = api::fetch_device_status(&ip, port).await;
                if let Err(ref err) = result {
                    tracing::warn!("status fetch for {ip}:{port} failed: {err}");
                }
                snapshot.with_mut(|s| s.resolve(result.map_err(|e| e.to_string())));
            });
        }
    });

    use_context_provider(|| DeviceStatusContext { snapshot, refresh });

    // Fetch immediately, then on a fixed interval. The loop task belongs to
    // this scope, so unmounting stops future ticks; a response still in
    // flight is dropped with its task and never writes to the snapshot.
    use_effect({
        let ip = ip.clone();
        move || {
            if ip.is_empty() {
                return;
            }
            spawn(async move {
                loop {
                    refresh.call(());
                    sleep_ms(poll_interval_ms).await;
                }
            });
        }
    });

    rsx! {
        {children}
    }
}
