mod loading;
mod nav;
mod password_modal;
mod section;

pub use loading::LoadingOverlay;
pub use nav::TabNav;
pub use password_modal::PasswordModal;
pub use section::Section;
