pub mod fflogs_api;
pub mod log_data_provider;
pub mod settings_manager;

pub use fflogs_api::*;
pub use log_data_provider::*;
pub use settings_manager::*;
