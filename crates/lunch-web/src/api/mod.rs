mod http;
mod scripts;
mod sheets;

pub use scripts::{delete_orders, get_store_options, submit_settings};
pub use sheets::{fetch_lookup, fetch_orders};
