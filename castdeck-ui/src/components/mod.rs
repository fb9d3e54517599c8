//! Shared UI components

pub mod button_tray;
pub mod device_card;
pub mod device_info_modal;
pub mod helpers;
pub mod icons;
pub mod media_badge;
pub mod nav_bar;
pub mod start_media_modal;

pub use button_tray::ButtonTrayView;
pub use device_card::{DeviceCardView, MediaStatusLine};
pub use device_info_modal::DeviceInfoModal;
pub use helpers::{ErrorNotice, LoadingSpinner};
pub use icons::{
    CastIcon, GlobeIcon, ImagesIcon, InfoIcon, MonitorPlayIcon, QuestionIcon, RefreshIcon,
    StopIcon, XIcon, YoutubeIcon,
};
pub use media_badge::MediaBadgeView;
pub use nav_bar::{NavBarView, NavItem};
pub use start_media_modal::StartMediaModal;
