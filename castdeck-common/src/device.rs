//! Wire types for discovered devices and receiver status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cast device found by the backend's mDNS discovery.
///
/// `fullname` is the full mDNS service name and is the stable identity for
/// a device across repeated discovery runs; everything else may be absent
/// depending on what the device advertised.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// IPv4 or IPv6 address of the device.
    pub ip_address: String,
    /// Port the cast service listens on (typically 8009).
    pub port: u16,
    /// Full mDNS service name, e.g. "Chromecast-<id>._googlecast._tcp.local."
    pub fullname: String,
    /// Device ID (TXT key "id").
    #[serde(default)]
    pub id: Option<String>,
    /// Model name (TXT key "md").
    #[serde(default)]
    pub model_name: Option<String>,
    /// Friendly name (TXT key "fn").
    #[serde(default)]
    pub friendly_name: Option<String>,
    /// All raw TXT record properties.
    #[serde(default)]
    pub txt_properties: BTreeMap<String, String>,
}

impl DiscoveredDevice {
    /// Name to show in the UI, falling back when the device has none.
    pub fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or("Unnamed device")
    }

    /// Model to show in the UI.
    pub fn model_label(&self) -> &str {
        self.model_name.as_deref().unwrap_or("Unknown model")
    }

    /// "address:port" label.
    pub fn address_label(&self) -> String {
        format!("{}:{}", self.ip_address, self.port)
    }
}

/// Live status of a single device, as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub is_active_input: bool,
    pub in_standby: bool,
    pub volume: VolumeStatus,
    /// The currently running receiver application, if any.
    #[serde(default)]
    pub app_status: Option<AppStatus>,
}

impl DeviceStatus {
    /// Identity of the running receiver app, `Unknown` when none reported.
    pub fn app_identity(&self) -> AppIdentity {
        self.app_status
            .as_ref()
            .map(AppStatus::identity)
            .unwrap_or(AppIdentity::Unknown)
    }

    /// True when an app other than the idle Backdrop is running. Any such app
    /// may host a media session worth querying.
    pub fn media_app_active(&self) -> bool {
        self.app_status
            .as_ref()
            .map(AppStatus::identity)
            .is_some_and(|identity| identity != AppIdentity::Backdrop)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeStatus {
    /// Volume level in 0.0..=1.0.
    pub level: f32,
    pub muted: bool,
}

/// Status of the receiver application running on a device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppStatus {
    /// Cast application ID, e.g. "CC1AD845".
    pub id: String,
    pub display_name: String,
    pub namespaces: Vec<String>,
    pub session_id: String,
    /// Free-form status text reported by the app.
    pub status: String,
    pub transport_id: String,
    /// Parsed identity; older backends omit this field.
    #[serde(default)]
    pub app_identity: AppIdentity,
}

impl AppStatus {
    /// Effective app identity. Falls back to mapping the raw app ID when the
    /// backend didn't include a parsed identity.
    pub fn identity(&self) -> AppIdentity {
        match self.app_identity {
            AppIdentity::Unknown => AppIdentity::from_app_id(&self.id),
            identity => identity,
        }
    }
}

/// Closed set of receiver applications the dashboard recognizes.
///
/// Unrecognized wire values deserialize to `Unknown` rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppIdentity {
    Backdrop,
    DefaultMedia,
    YouTube,
    WebView,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Cast app ID of the Backdrop (idle screen) app.
pub const BACKDROP_APP_ID: &str = "E8C28D3C";
/// Cast app ID of the default media receiver.
pub const DEFAULT_MEDIA_APP_ID: &str = "CC1AD845";
/// Cast app ID of the YouTube receiver.
pub const YOUTUBE_APP_ID: &str = "233637DE";
/// Cast app ID of the web page viewer receiver.
pub const WEBVIEW_APP_ID: &str = "209991B4";

impl AppIdentity {
    /// Map a raw cast application ID to an identity.
    pub fn from_app_id(app_id: &str) -> Self {
        match app_id {
            BACKDROP_APP_ID => Self::Backdrop,
            DEFAULT_MEDIA_APP_ID => Self::DefaultMedia,
            YOUTUBE_APP_ID => Self::YouTube,
            WEBVIEW_APP_ID => Self::WebView,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backdrop => "Backdrop",
            Self::DefaultMedia => "Default Receiver",
            Self::YouTube => "YouTube",
            Self::WebView => "Web Viewer",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_identity_from_known_ids() {
        assert_eq!(AppIdentity::from_app_id("E8C28D3C"), AppIdentity::Backdrop);
        assert_eq!(
            AppIdentity::from_app_id("CC1AD845"),
            AppIdentity::DefaultMedia
        );
        assert_eq!(AppIdentity::from_app_id("233637DE"), AppIdentity::YouTube);
        assert_eq!(AppIdentity::from_app_id("209991B4"), AppIdentity::WebView);
        assert_eq!(AppIdentity::from_app_id("DEADBEEF"), AppIdentity::Unknown);
    }

    #[test]
    fn test_unrecognized_identity_deserializes_to_unknown() {
        let identity: AppIdentity = serde_json::from_str("\"SomeNewApp\"").unwrap();
        assert_eq!(identity, AppIdentity::Unknown);
    }

    #[test]
    fn test_device_status_from_backend_json() {
        let json = r#"{
            "is_active_input": true,
            "in_standby": false,
            "volume": { "level": 0.5, "muted": false },
            "app_status": {
                "id": "233637DE",
                "display_name": "YouTube",
                "namespaces": ["urn:x-cast:com.google.cast.media"],
                "session_id": "s-1",
                "status": "Now playing",
                "transport_id": "t-1",
                "app_identity": "YouTube"
            }
        }"#;
        let status: DeviceStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_active_input);
        assert!(!status.in_standby);
        assert_eq!(status.volume.level, 0.5);
        assert_eq!(status.app_identity(), AppIdentity::YouTube);
    }

    #[test]
    fn test_identity_falls_back_to_app_id_mapping() {
        // Older backend revision: no app_identity field at all.
        let json = r#"{
            "id": "E8C28D3C",
            "display_name": "Backdrop",
            "namespaces": [],
            "session_id": "s-2",
            "status": "",
            "transport_id": "t-2"
        }"#;
        let app: AppStatus = serde_json::from_str(json).unwrap();
        assert_eq!(app.identity(), AppIdentity::Backdrop);
    }

    #[test]
    fn test_idle_device_has_unknown_identity() {
        let json = r#"{
            "is_active_input": false,
            "in_standby": true,
            "volume": { "level": 0.0, "muted": true }
        }"#;
        let status: DeviceStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.app_status, None);
        assert_eq!(status.app_identity(), AppIdentity::Unknown);
    }

    #[test]
    fn test_media_app_active_for_any_app_but_backdrop() {
        let mut status = DeviceStatus {
            is_active_input: true,
            in_standby: false,
            volume: VolumeStatus {
                level: 0.5,
                muted: false,
            },
            app_status: None,
        };
        // No app running at all.
        assert!(!status.media_app_active());

        let mut app = AppStatus {
            id: BACKDROP_APP_ID.into(),
            display_name: "Backdrop".into(),
            namespaces: vec![],
            session_id: "s-1".into(),
            status: String::new(),
            transport_id: "t-1".into(),
            app_identity: AppIdentity::Unknown,
        };
        status.app_status = Some(app.clone());
        assert!(!status.media_app_active());

        for id in [DEFAULT_MEDIA_APP_ID, YOUTUBE_APP_ID, WEBVIEW_APP_ID] {
            app.id = id.into();
            status.app_status = Some(app.clone());
            assert!(status.media_app_active(), "app {id} should count as active");
        }

        // An unrecognized receiver still hosts a session.
        app.id = "DEADBEEF".into();
        status.app_status = Some(app);
        assert!(status.media_app_active());
    }

    #[test]
    fn test_discovered_device_identity_stable_across_refreshes() {
        let json = r#"{
            "ip_address": "10.0.0.5",
            "port": 8009,
            "fullname": "Chromecast-abc123._googlecast._tcp.local.",
            "friendly_name": "Living Room TV",
            "txt_properties": { "id": "abc123", "md": "Chromecast Ultra" }
        }"#;
        let first: DiscoveredDevice = serde_json::from_str(json).unwrap();
        let second: DiscoveredDevice = serde_json::from_str(json).unwrap();
        assert_eq!(first.fullname, second.fullname);
        assert_eq!(first.display_name(), "Living Room TV");
        assert_eq!(first.model_label(), "Unknown model");
        assert_eq!(first.address_label(), "10.0.0.5:8009");
    }
}
