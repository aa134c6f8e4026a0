//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: expected one of on, off, true, false, 1, 0")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Externally visible base URL
    /// Example: https://smartagenda.com.br
    pub public_url: Option<String>,

    /// Whether responses are compressed (brotli/gzip)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let public_url = lookup("PUBLIC_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_switch("COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            public_url,
            compression,
        })
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// Base URL to show in logs: the public URL, or the bind address
    pub fn display_url(&self, addr: &std::net::SocketAddr) -> String {
        match &self.public_url {
            Some(url) => url.clone(),
            None => format!("http://{addr}"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_url: None,
            compression: true,
        }
    }
}

fn parse_switch(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
