//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so every variable below may
//! also come from that file.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_REFRESH_SECS: u64 = 30;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com";
pub const DEFAULT_UPLOAD_PRESET: &str = "portfolio";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_CONTACT_TO: &str = client::content::EMAIL;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Outbound HTTP timeouts shared by the Firestore and Cloudinary clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
    pub base_url: String,
    /// Interval of the refresh tick that picks up edits made elsewhere.
    pub refresh_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
}

/// Which document store backs the repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore(FirestoreConfig),
    Postgres(PostgresConfig),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// Contact messages are only logged when unset.
    pub resend_api_key: Option<String>,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub store: StoreBackend,
    pub media: MediaConfig,
    pub contact: ContactConfig,
    pub timeouts: HttpTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CLOUDINARY_CLOUD_NAME`
    /// - `FIRESTORE_PROJECT_ID` when `STORE_BACKEND=firestore` (the default)
    /// - `DATABASE_URL` when `STORE_BACKEND=postgres`
    ///
    /// Optional:
    /// - `PORT` (3000), `STATIC_DIR` (`<crate>/static`)
    /// - `FIRESTORE_API_KEY`, `FIRESTORE_BASE_URL`, `FIRESTORE_REFRESH_SECS` (30)
    /// - `DB_MAX_CONNECTIONS` (5)
    /// - `CLOUDINARY_UPLOAD_PRESET` (`portfolio`), `CLOUDINARY_BASE_URL`
    /// - `HTTP_REQUEST_TIMEOUT_SECS` (60), `HTTP_CONNECT_TIMEOUT_SECS` (10)
    /// - `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        let store = match std::env::var("STORE_BACKEND").ok().as_deref().unwrap_or("firestore") {
            "firestore" => StoreBackend::Firestore(FirestoreConfig {
                project_id: required("FIRESTORE_PROJECT_ID")?,
                api_key: optional("FIRESTORE_API_KEY"),
                base_url: trimmed_url("FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_BASE_URL),
                refresh_secs: env_parse("FIRESTORE_REFRESH_SECS", DEFAULT_FIRESTORE_REFRESH_SECS)?,
            }),
            "postgres" => StoreBackend::Postgres(PostgresConfig {
                database_url: required("DATABASE_URL")?,
                max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            }),
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::Invalid { var: "STORE_BACKEND", value: other.to_owned() }),
        };

        let media = MediaConfig {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            upload_preset: optional("CLOUDINARY_UPLOAD_PRESET").unwrap_or_else(|| DEFAULT_UPLOAD_PRESET.to_owned()),
            base_url: trimmed_url("CLOUDINARY_BASE_URL", DEFAULT_CLOUDINARY_BASE_URL),
        };

        let contact = ContactConfig {
            resend_api_key: optional("RESEND_API_KEY"),
            from: optional("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_owned()),
            to: optional("CONTACT_TO").unwrap_or_else(|| DEFAULT_CONTACT_TO.to_owned()),
        };

        let timeouts = HttpTimeouts {
            request_secs: env_parse("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_HTTP_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_HTTP_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { port, static_dir, store, media, contact, timeouts })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing { var })
}

/// Unset and blank values are both treated as absent.
fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn trimmed_url(var: &str, default: &str) -> String {
    optional(var)
        .unwrap_or_else(|| default.to_owned())
        .trim_end_matches('/')
        .to_owned()
}

fn env_parse<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match optional(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
