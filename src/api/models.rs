use std::time::Duration;

use url::Url;

const ORIGIN_ENV: &str = "PORTFOLIO_ORIGIN";

/// Where the downloadable documents live and how they are saved locally
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Base URL that `resume_path` is resolved against
    pub origin: String,
    pub resume_path: String,
    /// Name suggested to the save dialog
    pub file_name: String,
    pub connect_timeout: Duration,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5173/".to_string(),
            resume_path: "/resume.pdf".to_string(),
            file_name: "Sai_Charan_Resume.pdf".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl AssetConfig {
    /// Default config with the origin taken from `PORTFOLIO_ORIGIN` when set
    pub fn from_env() -> Self {
        Self::default().with_origin_override(std::env::var(ORIGIN_ENV).ok().as_deref())
    }

    /// Replace the origin with `raw` if it is a usable URL.
    /// Blank values are ignored; unparsable ones are logged and ignored.
    pub fn with_origin_override(self, raw: Option<&str>) -> Self {
        let Some(origin) = raw.map(str::trim).filter(|o| !o.is_empty()) else {
            return self;
        };

        match Url::parse(origin) {
            Ok(_) => {
                tracing::info!(%origin, "using asset origin from {ORIGIN_ENV}");
                self.with_origin(origin)
            }
            Err(e) => {
                tracing::warn!(value = %origin, error = %e, "ignoring invalid {ORIGIN_ENV}");
                self
            }
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}
