//! Wire types for media playback status and the start-media request.

use serde::{Deserialize, Serialize};

/// Playback state reported by a device's media channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Playing,
    Buffering,
    Paused,
}

impl PlayerState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::Buffering => "Buffering",
            Self::Paused => "Paused",
        }
    }
}

/// Status of media playing on a device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaStatus {
    /// Playback position in seconds, when the stream reports one.
    #[serde(default)]
    pub current_time: Option<f64>,
    pub playback_rate: f64,
    pub player_state: PlayerState,
}

/// Which receiver application to launch for new media.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiverKind {
    #[default]
    Default,
    YouTube,
    Web,
}

impl ReceiverKind {
    pub const ALL: [Self; 3] = [Self::Default, Self::YouTube, Self::Web];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default Media Receiver",
            Self::YouTube => "YouTube Receiver",
            Self::Web => "Web Receiver",
        }
    }
}

/// Stream type hint passed to the receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamType {
    Live,
    Buffered,
    #[default]
    None,
}

impl StreamType {
    pub const ALL: [Self; 3] = [Self::Buffered, Self::Live, Self::None];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Buffered => "Buffered",
            Self::None => "None",
        }
    }
}

/// Settings collected from the start-media form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaSettings {
    pub receiver: ReceiverKind,
    pub media_url: String,
    pub content_type: String,
    pub stream_type: StreamType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_status_without_current_time() {
        let json = r#"{ "playback_rate": 1.0, "player_state": "Buffering" }"#;
        let status: MediaStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.current_time, None);
        assert_eq!(status.player_state, PlayerState::Buffering);
    }

    #[test]
    fn test_receiver_kind_serializes_as_backend_variant_names() {
        assert_eq!(
            serde_json::to_string(&ReceiverKind::Default).unwrap(),
            "\"Default\""
        );
        assert_eq!(serde_json::to_string(&ReceiverKind::Web).unwrap(), "\"Web\"");
        assert_eq!(
            serde_json::to_string(&StreamType::Buffered).unwrap(),
            "\"Buffered\""
        );
    }
}
