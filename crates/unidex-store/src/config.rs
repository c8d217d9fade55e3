//! Store backend selection and configuration.
//!
//! The active backend is a deployment concern: it is decided here once and
//! injected into callers, which only ever see the repository trait.

use std::env;
use std::path::PathBuf;

use url::Url;

/// Fixed name of the local storage slot.
pub const DEFAULT_STORAGE_FILE: &str = "unidex.universities.json";

const ENV_STORE: &str = "UNIDEX_STORE";
const ENV_DATA_PATH: &str = "UNIDEX_DATA_PATH";
const ENV_API_URL: &str = "UNIDEX_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown store backend: {0} (expected \"local\" or \"remote\")")]
    UnknownBackend(String),

    #[error("{ENV_API_URL} must be set for the remote backend")]
    MissingBaseUrl,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Which persistence backend to build.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// Durable JSON slot on the local filesystem.
    Local { path: PathBuf },
    /// HTTP API at the given base address.
    Remote { base_url: Url },
}

/// Configuration for building a university store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Local {
                path: PathBuf::from(DEFAULT_STORAGE_FILE),
            },
        }
    }
}

impl StoreConfig {
    /// Reads the backend selection from the environment.
    ///
    /// `UNIDEX_STORE` picks `local` (default) or `remote`;
    /// `UNIDEX_DATA_PATH` overrides the local slot path and
    /// `UNIDEX_API_URL` supplies the remote base address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = env::var(ENV_STORE).unwrap_or_else(|_| "local".into());
        match backend.as_str() {
            "local" => {
                let path = env::var(ENV_DATA_PATH)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_FILE));
                Ok(Self {
                    backend: StoreBackend::Local { path },
                })
            }
            "remote" => {
                let raw = env::var(ENV_API_URL).map_err(|_| ConfigError::MissingBaseUrl)?;
                Ok(Self {
                    backend: StoreBackend::Remote {
                        base_url: Url::parse(&raw)?,
                    },
                })
            }
            other => Err(ConfigError::UnknownBackend(other.to_owned())),
        }
    }
}
