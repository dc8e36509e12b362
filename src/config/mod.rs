use config::{Config, Environment, File};
use serde::Deserialize;

use crate::types::Error;

/// Runtime settings. Read from an optional `configuration` file, then from `APP__`-prefixed
/// environment variables (`APP__PORT=8080`), with a `.env` file loaded first when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// filename offered in the Content-Disposition header
    #[serde(default = "default_download_name")]
    pub download_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_download_name() -> String {
    "invoice.pdf".to_string()
}

impl ServiceConfig {
    pub fn load() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            download_name: default_download_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_empty_source() {
        let settings = Config::builder().build().unwrap();
        let config: ServiceConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.port, ServiceConfig::default().port);
        assert_eq!(config.download_name, "invoice.pdf");
        assert_eq!(config.address(), "0.0.0.0:5001");
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Config::builder()
            .set_override("port", 8080)
            .unwrap()
            .set_override("download_name", "factura.pdf")
            .unwrap()
            .build()
            .unwrap();
        let config: ServiceConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.download_name, "factura.pdf");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn load_reads_prefixed_environment() {
        std::env::set_var("APP__DOWNLOAD_NAME", "factura-env.pdf");
        let loaded = ServiceConfig::load();
        std::env::remove_var("APP__DOWNLOAD_NAME");

        let config = loaded.unwrap();
        assert_eq!(config.download_name, "factura-env.pdf");
        assert_eq!(config.log_level, "info");
    }
}
