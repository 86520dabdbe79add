use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis backend, without the `/api` suffix.
    pub backend_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let backend_url = std::env::var("SITELENS_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let bind_addr = std::env::var("SITELENS_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self::new(&backend_url, &bind_addr)
    }

    pub fn new(backend_url: &str, bind_addr: &str) -> Result<Self, ConfigError> {
        let backend_url = backend_url.trim().trim_end_matches('/').to_string();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "SITELENS_BACKEND_URL",
                value: backend_url,
            });
        }

        let bind_addr = bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "SITELENS_BIND_ADDR",
                value: bind_addr.to_string(),
            })?;

        Ok(Self {
            backend_url,
            bind_addr,
        })
    }

    /// Root of the backend's JSON API.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::new("https://backend.example.com/", "127.0.0.1:8080").unwrap();
        assert_eq!(config.api_base(), "https://backend.example.com/api");
    }

    #[test]
    fn rejects_backend_without_scheme() {
        let err = Config::new("backend.example.com", "127.0.0.1:8080").unwrap_err();
        assert!(err.to_string().contains("SITELENS_BACKEND_URL"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        assert!(Config::new(DEFAULT_BACKEND_URL, "not-an-addr").is_err());
    }
}
