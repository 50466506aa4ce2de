use crate::api::ApiResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured API base URL.
pub const BASE_URL_ENV: &str = "VISUALIZER_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "variant-viz", "variant-viz")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// The saved configuration, or defaults when there is none.
    pub fn load_saved() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Base URL precedence: `cli`, then `env`, then the saved value.
    pub fn resolve(saved: Config, env: Option<String>, cli: Option<String>) -> Self {
        let mut config = saved;
        config.apply_base_url_override(env);
        config.apply_base_url_override(cli);
        config
    }

    pub fn load_from(path: &Path) -> ApiResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = base_url;
        }
    }

    pub fn save(&self) -> ApiResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            crate::api::ApiError::Config("Failed to determine project directories".to_string())
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> ApiResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
