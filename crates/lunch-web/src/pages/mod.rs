mod form;
mod lookup;
mod management;
mod settings;

pub use form::OrderFormPage;
pub use lookup::LookupPage;
pub use management::ManagementPage;
pub use settings::SettingsPage;
