use serde::{Deserialize, Serialize};
use std::fs;

use drawodds_engine::series::DEFAULT_SWEEP_MAX;

pub const CONFIG_ENV: &str = "DRAWODDS_CONFIG";
pub const DECK_SIZE_ENV: &str = "DRAWODDS_DECK_SIZE";
pub const HAND_SIZE_ENV: &str = "DRAWODDS_HAND_SIZE";
pub const SERIES_MAX_ENV: &str = "DRAWODDS_SERIES_MAX";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub deck_size: u32,
    pub hand_size: u32,
    pub series_max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub deck_size: ValueSource,
    pub hand_size: ValueSource,
    pub series_max: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            deck_size: ValueSource::Default,
            hand_size: ValueSource::Default,
            series_max: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_size: 40,
            hand_size: 5,
            series_max: DEFAULT_SWEEP_MAX,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration from defaults, then the TOML file named by
/// `DRAWODDS_CONFIG`, then individual environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.deck_size {
            cfg.deck_size = v;
            sources.deck_size = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.series_max {
            cfg.series_max = v;
            sources.series_max = ValueSource::File;
        }
    }

    if let Some(v) = env_u32(DECK_SIZE_ENV, "deck size")? {
        cfg.deck_size = v;
        sources.deck_size = ValueSource::Env;
    }
    if let Some(v) = env_u32(HAND_SIZE_ENV, "hand size")? {
        cfg.hand_size = v;
        sources.hand_size = ValueSource::Env;
    }
    if let Some(v) = env_u32(SERIES_MAX_ENV, "series max")? {
        cfg.series_max = v;
        sources.series_max = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_u32(key: &str, what: &str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", what, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    deck_size: Option<u32>,
    #[serde(default)]
    hand_size: Option<u32>,
    #[serde(default)]
    series_max: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.deck_size == 0 {
        return Err(ConfigError::Invalid("deck_size must be >0".into()));
    }
    if cfg.hand_size == 0 {
        return Err(ConfigError::Invalid("hand_size must be >0".into()));
    }
    if cfg.series_max == 0 {
        return Err(ConfigError::Invalid("series_max must be >0".into()));
    }
    Ok(())
}
