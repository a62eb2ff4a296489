use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Aliza";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    "info,aliza=debug".to_string()
}

/// Get the application data directory
/// ~/Aliza/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Aliza")
}

/// Get the default database path
pub fn database_path() -> PathBuf {
    app_data_dir().join("aliza.db")
}
