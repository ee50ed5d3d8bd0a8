use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

pub const BASE_URL_VAR: &str = "API_BASE_URL";
pub const SIGN_UP_PATH_VAR: &str = "SIGN_UP_PATH";

pub const DEFAULT_BASE_URL: &str = "http://localhost:4001";
pub const DEFAULT_SIGN_UP_PATH: &str = "/users/signup";

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0} cannot be used as a base URL")]
    NotABase(Url),

    #[error("sign-up path {path} cannot be joined to the base URL: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Where the sign-up endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpConfig {
    base_url: Url,
    sign_up_path: String,
    endpoint: Url,
}

/// Loads `.env` from the working directory or its parents into the process
/// environment. `Ok(false)` when there is none. Call before telemetry so a
/// `RUST_LOG` set there takes effect.
pub fn load_dotenv() -> Result<bool, dotenvy::Error> {
    found(dotenvy::dotenv().map(drop))
}

pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, dotenvy::Error> {
    found(dotenvy::from_path(path))
}

fn found(result: Result<(), dotenvy::Error>) -> Result<bool, dotenvy::Error> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

impl SignUpConfig {
    pub fn new(base_url: Url, sign_up_path: impl Into<String>) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url));
        }
        let sign_up_path = sign_up_path.into();
        let endpoint = base_url
            .join(&sign_up_path)
            .map_err(|source| ConfigError::InvalidPath {
                path: sign_up_path.clone(),
                source,
            })?;

        Ok(Self {
            base_url,
            sign_up_path,
            endpoint,
        })
    }

    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = load_dotenv() {
            tracing::warn!("ignoring unreadable .env file: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base_url).map_err(|source| ConfigError::InvalidUrl {
            var: BASE_URL_VAR,
            value: raw_base_url.clone(),
            source,
        })?;
        let sign_up_path =
            lookup(SIGN_UP_PATH_VAR).unwrap_or_else(|| DEFAULT_SIGN_UP_PATH.to_string());

        Self::new(base_url, sign_up_path)
    }

    /// Environment configuration, loaded once per process.
    pub fn shared() -> Result<&'static SignUpConfig, ConfigError> {
        static SHARED: OnceLock<Result<SignUpConfig, ConfigError>> = OnceLock::new();
        SHARED.get_or_init(Self::from_env).as_ref().map_err(ConfigError::clone)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn sign_up_path(&self) -> &str {
        &self.sign_up_path
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
