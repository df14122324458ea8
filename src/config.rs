use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the production deployment URL.
pub const ENV_PRODUCTION_URL: &str = "ALBUMCOLORS_PRODUCTION_URL";

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub production_url: Option<String>,
}

/// Resolved site configuration handed to the page loader.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Canonical deployment URL. Empty when no source provides one; templates
    /// treat empty as "render relative links".
    pub production_url: String,
}

impl SiteConfig {
    /// Resolve the effective configuration from its three sources.
    /// Precedence: explicit option, then environment, then config file.
    /// Absence everywhere yields the empty string, never an error.
    pub fn resolve(
        explicit: Option<String>,
        env: Option<String>,
        file: Option<FileConfig>,
    ) -> Self {
        let file = file.unwrap_or_default();
        SiteConfig {
            production_url: explicit
                .or(env)
                .or(file.production_url)
                .unwrap_or_default(),
        }
    }

    /// Discover the config file, read the environment, and resolve.
    /// An unreadable or unparseable config file degrades to the remaining
    /// sources rather than failing resolution.
    pub fn discover() -> Self {
        let file_config = find_config_file(None).and_then(|path| match load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        });
        SiteConfig::resolve(None, production_url_from_env(), file_config)
    }
}

/// Read the production URL from the process environment.
/// `None` when the variable is unset or not valid Unicode.
pub fn production_url_from_env() -> Option<String> {
    std::env::var(ENV_PRODUCTION_URL).ok()
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("albumcolors.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("albumcolors").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
