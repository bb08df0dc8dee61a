// Settings service
// Loads and stores display settings as TOML

mod service;

pub use service::SettingsService;
