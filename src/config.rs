use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub tavily_api_key: String,
    pub tavily_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} is not set", name)))
        };

        let groq_api_key = required("GROQ_API_KEY")?;
        let tavily_api_key = required("TAVILY_API_KEY")?;

        // Load server configuration with defaults
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let groq_base_url = lookup("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string());
        let tavily_base_url = lookup("TAVILY_BASE_URL").unwrap_or_else(|| DEFAULT_TAVILY_BASE_URL.to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            groq_api_key,
            groq_base_url,
            tavily_api_key,
            tavily_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("TAVILY_API_KEY", "tvly-test"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.groq_base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(config.tavily_base_url, DEFAULT_TAVILY_BASE_URL);
        assert_eq!(config.groq_api_key, "gsk-test");
    }

    #[test]
    fn missing_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk-test")]))
            .err()
            .unwrap();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("TAVILY_API_KEY")));
    }

    #[test]
    fn invalid_port_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("TAVILY_API_KEY", "tvly-test"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn overrides_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("TAVILY_API_KEY", "tvly-test"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("TAVILY_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.tavily_base_url, "http://localhost:9000");
    }
}
