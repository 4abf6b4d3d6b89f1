pub mod app_config;
pub mod config;
pub mod dropdown;
pub mod form;
pub mod listing;
pub mod location;
pub mod weekday;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dropdown::{Dropdown, DropdownOption, Visibility};
pub use form::LocationForm;
pub use listing::render_location_list;
pub use location::{format_open_days, LocationRecord, NewLocationInput, NOT_OPEN_MESSAGE};
pub use weekday::Weekday;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
