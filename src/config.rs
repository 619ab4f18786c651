//! Server configuration from environment variables
//!
//! - `PORT`: listen port (default 3000)
//! - `WORMS_BASE_URL`: WoRMS REST root (default the public service)
//! - `PUBLIC_DIR`: static asset directory (default `public`)

use crate::lookup::DEFAULT_WORMS_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub worms_base_url: String,
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            worms_base_url: DEFAULT_WORMS_BASE_URL.to_string(),
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unset or empty values keep the
    /// default; an unparsable `PORT` falls back to 3000.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = var("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self {
            port,
            worms_base_url: var("WORMS_BASE_URL").unwrap_or(defaults.worms_base_url),
            public_dir: var("PUBLIC_DIR").unwrap_or(defaults.public_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.worms_base_url, "https://www.marinespecies.org/rest");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("WORMS_BASE_URL", "http://127.0.0.1:4000"),
            ("PUBLIC_DIR", "/srv/ocean/public"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.worms_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.public_dir, "/srv/ocean/public");
    }

    #[test]
    fn test_bad_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "not-a-port")]).port, 3000);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 3000);
        assert_eq!(config_from(&[("PORT", "")]).port, 3000);
    }
}
