use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "CONVOCA_CONFIG";
pub const FORMAT_ENV: &str = "CONVOCA_FORMAT";
pub const RNG_COUNT_ENV: &str = "CONVOCA_RNG_COUNT";
pub const LOG_ENV: &str = "CONVOCA_LOG";

const MAX_RNG_COUNT: usize = 1_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Output format for `split`
    pub format: OutputFormat,
    /// Samples printed by `rng`
    pub rng_count: usize,
    /// JSONL file every `split` appends its record to
    pub log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            rng_count: 5,
            log: None,
        }
    }
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
    pub format: ValueSource,
    pub rng_count: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            rng_count: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

/// Resolves defaults < TOML file (`CONVOCA_CONFIG`) < environment, reading
/// variables through `env`.
pub fn load_from<E>(env: E) -> Result<ConfigResolved, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.rng_count {
            cfg.rng_count = v;
            sources.rng_count = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = Some(v);
            sources.log = ValueSource::File;
        }
    }

    if let Some(format) = env(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = parse_format(&format)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {format}")))?;
        sources.format = ValueSource::Env;
    }
    if let Some(count) = env(RNG_COUNT_ENV)
        && !count.is_empty()
    {
        cfg.rng_count = count
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rng count: {count}")))?;
        sources.rng_count = ValueSource::Env;
    }
    if let Some(log) = env(LOG_ENV)
        && !log.is_empty()
    {
        cfg.log = Some(log);
        sources.log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    rng_count: Option<usize>,
    #[serde(default)]
    log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rng_count == 0 || cfg.rng_count > MAX_RNG_COUNT {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: rng_count must be between 1 and {MAX_RNG_COUNT}"
        )));
    }
    Ok(())
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}
