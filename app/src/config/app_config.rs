//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use sampling::SearchStrategy;

use super::validation::validate_setting;

const DEFAULT_DOTS: u32 = 4000;
const DEFAULT_MIN_RADIUS: u32 = 1;
const DEFAULT_MAX_RADIUS: u32 = 3;

/// Stipple rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub dots: u32,
    pub min_radius: u32,
    pub max_radius: u32,
    pub jitter: u32,
    pub bias: i16,
    pub random_colors: bool,
    pub seed: Option<u64>,
    pub search: SearchStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output_path(),
            dots: DEFAULT_DOTS,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            jitter: 0,
            bias: 0,
            random_colors: false,
            seed: None,
            search: SearchStrategy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or invalid values.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?.trim().to_string();
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {key}={value:?}: {e}");
                    None
                }
            }
        };

        let defaults = Self::default();
        Self {
            input: g("STIPPLE_INPUT").map(PathBuf::from),
            output: g("STIPPLE_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            dots: parse_or(g("STIPPLE_DOTS"), defaults.dots),
            min_radius: parse_or(g("STIPPLE_MIN_RADIUS"), defaults.min_radius),
            max_radius: parse_or(g("STIPPLE_MAX_RADIUS"), defaults.max_radius),
            jitter: parse_or(g("STIPPLE_JITTER"), defaults.jitter),
            bias: parse_or(g("STIPPLE_BIAS"), defaults.bias),
            random_colors: g("STIPPLE_RANDOM_COLORS").is_some_and(|v| v == "true"),
            seed: g("STIPPLE_SEED").and_then(|v| v.parse().ok()),
            search: parse_or(g("STIPPLE_SEARCH"), defaults.search),
        }
    }

    /// Check cross-field constraints that single-key validation cannot see.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.input.is_none() {
            anyhow::bail!("no input image: pass a path or set STIPPLE_INPUT");
        }
        if self.min_radius > self.max_radius {
            anyhow::bail!(
                "STIPPLE_MIN_RADIUS ({}) exceeds STIPPLE_MAX_RADIUS ({})",
                self.min_radius,
                self.max_radius
            );
        }
        Ok(())
    }
}

fn default_output_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("stipple_{stamp}.png"))
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
