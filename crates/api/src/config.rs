use std::path::PathBuf;

use deckforge_planner::{LayoutPolicy, ThemeSource};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`; deck execution
    /// is a long chain of remote calls).
    pub request_timeout_secs: u64,
    /// Directory holding the static template assets (icons, logo).
    pub assets_dir: PathBuf,
    /// Layout used when the form does not pick one.
    pub default_layout: LayoutPolicy,
    /// Reference document for master-slide cloning, when configured.
    pub theme: Option<ThemeSource>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                   |
    /// | `ASSETS_DIR`           | `assets`                |
    /// | `DECK_LAYOUT`          | `user-count`            |
    /// | `THEME_SOURCE_PATH`    | unset (no theme clone)  |
    /// | `THEME_SOURCE_SLIDE`   | `1`                     |
    /// | `THEME_APPLY_TO_ALL`   | `true`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let assets_dir = PathBuf::from(std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".into()));

        let default_layout = match std::env::var("DECK_LAYOUT").as_deref() {
            Ok("fixed-three") => LayoutPolicy::FixedThreeSlide,
            Ok("user-count") | Err(_) => LayoutPolicy::UserCountTemplate,
            Ok(other) => panic!("DECK_LAYOUT must be fixed-three or user-count, got '{other}'"),
        };

        let theme = std::env::var("THEME_SOURCE_PATH").ok().map(|source_path| {
            let source_slide: u32 = std::env::var("THEME_SOURCE_SLIDE")
                .unwrap_or_else(|_| "1".into())
                .parse()
                .expect("THEME_SOURCE_SLIDE must be a positive integer");
            let apply_to_all: bool = std::env::var("THEME_APPLY_TO_ALL")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .expect("THEME_APPLY_TO_ALL must be true or false");
            ThemeSource {
                source_path,
                source_slide,
                apply_to_all,
            }
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assets_dir,
            default_layout,
            theme,
        }
    }
}
