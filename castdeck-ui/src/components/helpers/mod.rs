//! Small reusable helpers

pub mod error_notice;
pub mod loading_spinner;

pub use error_notice::ErrorNotice;
pub use loading_spinner::LoadingSpinner;
