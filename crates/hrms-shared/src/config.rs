//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub tenant: TenantResolutionSettings,
    pub calendar: CalendarSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TenantResolutionSettings {
    /// Domain of the tenant to fall back to when host resolution fails.
    pub default_domain: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarSettings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "hrms-server")?
            .set_default("tenant.default_domain", "techcorp.com")?
            .set_default("calendar.api_base_url", "https://www.googleapis.com/calendar/v3")?
            .set_default("calendar.request_timeout_secs", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.tenant.default_domain, "techcorp.com");
        assert_eq!(config.calendar.request_timeout_secs, 10);
    }
}
