// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILTER: &str = "info,nihongo_chat=debug,tower_http=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Reads the process environment. `main` loads `.env` into it first.
    ///
    /// Supported variables:
    /// - APP_HOST, APP_PORT: bind address (default 0.0.0.0:8000)
    /// - APP_STATIC_DIR: directory with index.html and assets (default "static")
    /// - OPENAI_BASE_URL: completion API base (default https://api.openai.com/v1)
    /// - OPENAI_MODEL: model identifier (default gpt-4o-mini)
    /// - OPENAI_TIMEOUT_SECS: per-call timeout (default 60)
    ///
    /// The API key is never read here; callers send it with each request.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("APP_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid APP_PORT {:?}", port),
            }
        }
        if let Some(dir) = lookup("APP_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            config.openai_base_url = url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            config.openai_model = model;
        }
        if let Some(secs) = lookup("OPENAI_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => config.openai_timeout = Duration::from_secs(secs),
                Err(_) => tracing::warn!("Ignoring invalid OPENAI_TIMEOUT_SECS {:?}", secs),
            }
        }

        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.openai_base_url, "http://localhost:11434/v1");
        assert_eq!(config.openai_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_PORT", "eighty"),
            ("OPENAI_TIMEOUT_SECS", "-1"),
        ]));
        assert_eq!(config.port, 8000);
        assert_eq!(config.openai_timeout, Duration::from_secs(60));
    }
}
