use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached ranking responses
    pub capacity: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Server-side cap on requested result counts
    pub max_limit: Option<usize>,
    /// Budget assumed when a sponsor request omits one
    pub default_sponsor_budget: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub gig_weights: GigWeightsConfig,
    #[serde(default)]
    pub sponsor_weights: SponsorWeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GigWeightsConfig {
    #[serde(default = "default_gig_category_weight")]
    pub category: f64,
    #[serde(default = "default_gig_follower_size_weight")]
    pub follower_size: f64,
    #[serde(default = "default_gig_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_gig_location_weight")]
    pub location: f64,
    #[serde(default = "default_gig_engagement_weight")]
    pub engagement: f64,
    #[serde(default = "default_gig_price_compat_weight")]
    pub price_compat: f64,
}

impl Default for GigWeightsConfig {
    fn default() -> Self {
        Self {
            category: default_gig_category_weight(),
            follower_size: default_gig_follower_size_weight(),
            budget: default_gig_budget_weight(),
            location: default_gig_location_weight(),
            engagement: default_gig_engagement_weight(),
            price_compat: default_gig_price_compat_weight(),
        }
    }
}

fn default_gig_category_weight() -> f64 {
    0.30
}
fn default_gig_follower_size_weight() -> f64 {
    0.20
}
fn default_gig_budget_weight() -> f64 {
    0.20
}
fn default_gig_location_weight() -> f64 {
    0.10
}
fn default_gig_engagement_weight() -> f64 {
    0.15
}
fn default_gig_price_compat_weight() -> f64 {
    0.05
}

#[derive(Debug, Clone, Deserialize)]
pub struct SponsorWeightsConfig {
    #[serde(default = "default_sponsor_category_weight")]
    pub category: f64,
    #[serde(default = "default_sponsor_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_sponsor_location_weight")]
    pub location: f64,
    #[serde(default = "default_sponsor_engagement_weight")]
    pub engagement: f64,
    #[serde(default = "default_sponsor_follower_tier_weight")]
    pub follower_tier: f64,
}

impl Default for SponsorWeightsConfig {
    fn default() -> Self {
        Self {
            category: default_sponsor_category_weight(),
            budget: default_sponsor_budget_weight(),
            location: default_sponsor_location_weight(),
            engagement: default_sponsor_engagement_weight(),
            follower_tier: default_sponsor_follower_tier_weight(),
        }
    }
}

fn default_sponsor_category_weight() -> f64 {
    0.35
}
fn default_sponsor_budget_weight() -> f64 {
    0.25
}
fn default_sponsor_location_weight() -> f64 {
    0.15
}
fn default_sponsor_engagement_weight() -> f64 {
    0.15
}
fn default_sponsor_follower_tier_weight() -> f64 {
    0.10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HYPELY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HYPELY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HYPELY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HYPELY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gig_weights() {
        let weights = GigWeightsConfig::default();
        assert_eq!(weights.category, 0.30);
        assert_eq!(weights.follower_size, 0.20);
        assert_eq!(weights.budget, 0.20);
        assert_eq!(weights.location, 0.10);
        assert_eq!(weights.engagement, 0.15);
        assert_eq!(weights.price_compat, 0.05);
    }

    #[test]
    fn test_default_sponsor_weights() {
        let weights = SponsorWeightsConfig::default();
        assert_eq!(weights.category, 0.35);
        assert_eq!(weights.budget, 0.25);
        assert_eq!(weights.location, 0.15);
        assert_eq!(weights.engagement, 0.15);
        assert_eq!(weights.follower_tier, 0.10);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_settings_default_is_complete() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert!(settings.cache.capacity.is_none());
        assert!(settings.matching.max_limit.is_none());
    }
}
