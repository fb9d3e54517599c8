mod about;
mod home;
mod layout;

pub use about::About;
pub use home::Home;
pub use layout::AppLayout;
