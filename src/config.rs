//! Server configuration from environment variables.
//!
//! | Variable         | Default                | Meaning                                         |
//! |------------------|------------------------|-------------------------------------------------|
//! | `HOST`           | `0.0.0.0`              | bind address                                    |
//! | `PORT`           | `3001`                 | bind port                                       |
//! | `DATA_FILE`      | `data/tournament.json` | JSON snapshot; empty keeps everything in memory |
//! | `STATIC_DIR`     | `static`               | web client served at `/` when present           |
//! | `ROSTER_FILE`    | `data/roster.csv`      | default roster for the pre-built tournament     |
//! | `ADMIN_USERNAME` | `admin`                |                                                 |
//! | `ADMIN_PASSWORD` | unset                  | unset disables admin login                      |
//! | `SESSION_KEY`    | random per process     | cookie signing key, at least 64 bytes           |
//! | `COOKIE_SECURE`  | `false`                | only send the session cookie over HTTPS         |
//! | `CORS_ORIGIN`    | unset                  | comma-separated origins allowed with cookies    |
//! | `MAX_GROUPS`     | `5`                    | groups allowed per tournament                   |
//! | `SEED_GROUPS`    | `4`                    | groups in the pre-built tournament              |

use std::path::PathBuf;

/// Minimum length of `SESSION_KEY` accepted by the cookie session store.
pub const SESSION_KEY_MIN_LEN: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    NotABool { name: &'static str, value: String },

    #[error("SESSION_KEY must be at least 64 bytes (got {0})")]
    SessionKeyTooShort(usize),
}

/// Runtime configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub roster_file: PathBuf,
    pub admin_username: String,
    pub admin_password: Option<String>,
    pub session_key: Option<Vec<u8>>,
    pub cookie_secure: bool,
    /// Cross-origin clients allowed to send the session cookie. Empty allows any
    /// origin without credentials.
    pub cors_origins: Vec<String>,
    pub max_groups: usize,
    pub seed_groups: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            data_file: Some(PathBuf::from("data/tournament.json")),
            static_dir: PathBuf::from("static"),
            roster_file: PathBuf::from("data/roster.csv"),
            admin_username: "admin".to_string(),
            admin_password: None,
            session_key: None,
            cookie_secure: false,
            cors_origins: Vec::new(),
            max_groups: 5,
            seed_groups: 4,
        }
    }
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_number("PORT", &port)?;
        }
        if let Some(path) = lookup("DATA_FILE") {
            config.data_file = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("ROSTER_FILE") {
            config.roster_file = PathBuf::from(path);
        }
        if let Some(user) = lookup("ADMIN_USERNAME") {
            config.admin_username = user;
        }
        config.admin_password = lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty());
        if let Some(key) = lookup("SESSION_KEY") {
            if key.len() < SESSION_KEY_MIN_LEN {
                return Err(ConfigError::SessionKeyTooShort(key.len()));
            }
            config.session_key = Some(key.into_bytes());
        }
        if let Some(secure) = lookup("COOKIE_SECURE") {
            config.cookie_secure = parse_bool("COOKIE_SECURE", &secure)?;
        }
        if let Some(origins) = lookup("CORS_ORIGIN") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(max) = lookup("MAX_GROUPS") {
            config.max_groups = parse_number("MAX_GROUPS", &max)?;
        }
        if let Some(n) = lookup("SEED_GROUPS") {
            config.seed_groups = parse_number("SEED_GROUPS", &n)?;
        }

        Ok(config)
    }

    /// Whether `username`/`password` match the configured admin. Always false without a password.
    pub fn admin_credentials_match(&self, username: &str, password: &str) -> bool {
        match &self.admin_password {
            Some(expected) => username == self.admin_username && password == expected,
            None => false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: value.to_string(),
    })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::NotABool {
            name,
            value: value.to_string(),
        }),
    }
}
