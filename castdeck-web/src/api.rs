//! HTTP client for the castdeck backend API.
//!
//! Every function issues exactly one request and surfaces transport errors
//! and non-2xx responses as [`ApiError`]. Retry policy belongs to callers.

use castdeck_common::{
    DeviceStatus, DiscoveredDevice, MediaSettings, MediaStatus, ReceiverKind, StreamType,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {status} {status_text}")]
    Status { status: u16, status_text: String },
}

/// Shared HTTP client for all backend requests.
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Treat any non-2xx response as a failure carrying the HTTP status.
fn ok_or_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
        })
    }
}

/// Request body addressing a single device.
#[derive(Debug, Serialize)]
struct DeviceAddress<'a> {
    ip: &'a str,
    port: u16,
}

/// Body of the start-media request. Field names are the backend's contract.
#[derive(Debug, Serialize)]
pub struct StartMediaRequest {
    pub ip_address: String,
    pub port: u16,
    pub receiver: ReceiverKind,
    pub media_url: String,
    pub content_type: String,
    pub stream_type: StreamType,
}

/// Response of the version endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerVersionInfo {
    pub version: String,
}

/// Fetch the list of discovered devices.
pub async fn fetch_devices() -> Result<Vec<DiscoveredDevice>, ApiError> {
    let response = http_client().get("/api/chromecasts").send().await?;
    Ok(ok_or_status(response)?.json().await?)
}

/// Fetch the live status of one device.
pub async fn fetch_device_status(ip: &str, port: u16) -> Result<DeviceStatus, ApiError> {
    let response = http_client()
        .post("/api/device-status")
        .json(&DeviceAddress { ip, port })
        .send()
        .await?;
    Ok(ok_or_status(response)?.json().await?)
}

/// Fetch the media playback status of one device.
pub async fn fetch_media_status(ip: &str, port: u16) -> Result<MediaStatus, ApiError> {
    let response = http_client()
        .post("/api/media-status")
        .json(&DeviceAddress { ip, port })
        .send()
        .await?;
    Ok(ok_or_status(response)?.json().await?)
}

/// Launch media on a device's receiver.
pub async fn start_media(
    device: &DiscoveredDevice,
    settings: MediaSettings,
) -> Result<(), ApiError> {
    let body = StartMediaRequest {
        ip_address: device.ip_address.clone(),
        port: device.port,
        receiver: settings.receiver,
        media_url: settings.media_url,
        content_type: settings.content_type,
        stream_type: settings.stream_type,
    };
    let response = http_client()
        .post("/api/start-media")
        .json(&body)
        .send()
        .await?;
    ok_or_status(response)?;
    Ok(())
}

/// Stop whatever is playing on a device.
pub async fn stop_media(ip: &str, port: u16) -> Result<(), ApiError> {
    let response = http_client()
        .post("/api/stop-media")
        .json(&DeviceAddress { ip, port })
        .send()
        .await?;
    ok_or_status(response)?;
    Ok(())
}

/// Fetch the backend server version.
pub async fn fetch_version() -> Result<ServerVersionInfo, ApiError> {
    let response = http_client().get("/api/version").send().await?;
    Ok(ok_or_status(response)?.json().await?)
}

/// Kick off a new discovery scan on the backend.
pub async fn trigger_scan() -> Result<(), ApiError> {
    let response = http_client().post("/api/scan").send().await?;
    ok_or_status(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_media_request_uses_backend_field_names() {
        let body = StartMediaRequest {
            ip_address: "10.0.0.5".into(),
            port: 8009,
            receiver: ReceiverKind::YouTube,
            media_url: "http://example.com/video.mp4".into(),
            content_type: "video/mp4".into(),
            stream_type: StreamType::Buffered,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["ip_address"], "10.0.0.5");
        assert_eq!(json["port"], 8009);
        assert_eq!(json["receiver"], "YouTube");
        assert_eq!(json["media_url"], "http://example.com/video.mp4");
        assert_eq!(json["content_type"], "video/mp4");
        assert_eq!(json["stream_type"], "Buffered");
    }

    #[test]
    fn test_device_address_body_shape() {
        let json = serde_json::to_value(DeviceAddress {
            ip: "10.0.0.5",
            port: 8009,
        })
        .unwrap();
        assert_eq!(json["ip"], "10.0.0.5");
        assert_eq!(json["port"], 8009);
    }

    #[test]
    fn test_status_error_display_carries_http_status() {
        let err = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "server returned 500 Internal Server Error");
    }
}
