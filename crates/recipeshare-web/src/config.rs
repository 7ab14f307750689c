//! Build-time configuration of the browser app

use recipeshare_core::ApiConfig;

/// Backend base URL, baked in at compile time by Trunk
///
/// `RECIPESHARE_API_URL=https://api.example.com trunk build --release`
pub fn api_config() -> ApiConfig {
    ApiConfig::from_env_value(option_env!("RECIPESHARE_API_URL"))
}
