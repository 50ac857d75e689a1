//! Table configuration resolved from defaults, an optional TOML file and the
//! environment, in that order. Each value remembers where it came from.
//!
//! | Key           | File key      | Environment           | Default  |
//! |---------------|---------------|-----------------------|----------|
//! | decks         | `decks`       | `HOLECARD_DECKS`      | 6        |
//! | seed          | `seed`        | `HOLECARD_SEED`       | random   |
//! | default bet   | `default_bet` | `HOLECARD_BET`        | 10       |
//! | bot policy    | `bot_policy`  | `HOLECARD_BOT_POLICY` | `dealer` |
//!
//! The file is read from the path in `HOLECARD_CONFIG`.

use holecard_ai::{DEFAULT_POLICY, available_policies};
use holecard_engine::rules::DEFAULT_DECKS;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const MAX_DECKS: usize = 8;
pub const DEFAULT_BET: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: usize,
    pub seed: Option<u64>,
    pub default_bet: u32,
    pub bot_policy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            seed: None,
            default_bet: DEFAULT_BET,
            bot_policy: DEFAULT_POLICY.into(),
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
    pub decks: ValueSource,
    pub seed: ValueSource,
    pub default_bet: ValueSource,
    pub bot_policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            seed: ValueSource::Default,
            default_bet: ValueSource::Default,
            bot_policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLECARD_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.default_bet {
            cfg.default_bet = v;
            sources.default_bet = ValueSource::File;
        }
        if let Some(v) = f.bot_policy {
            cfg.bot_policy = v;
            sources.bot_policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOLECARD_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("HOLECARD_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid decks: {decks}")))?;
        sources.decks = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("HOLECARD_BET")
        && !bet.is_empty()
    {
        cfg.default_bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bet: {bet}")))?;
        sources.default_bet = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var("HOLECARD_BOT_POLICY")
        && !policy.is_empty()
    {
        cfg.bot_policy = policy;
        sources.bot_policy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    default_bet: Option<u32>,
    #[serde(default)]
    bot_policy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(1..=MAX_DECKS).contains(&cfg.decks) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: decks must be between 1 and {MAX_DECKS}"
        )));
    }
    if cfg.default_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_bet must be >0".into(),
        ));
    }
    if !available_policies().contains(&cfg.bot_policy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown bot_policy '{}' (expected one of: {})",
            cfg.bot_policy,
            available_policies().join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cfg = Config {
            decks: 9,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());

        let cfg = Config {
            default_bet: 0,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());

        let cfg = Config {
            bot_policy: "martingale".into(),
            ..Config::default()
        };
        let msg = validate(&cfg).unwrap_err().to_string();
        assert!(msg.contains("martingale"));
        assert!(msg.contains("basic"));
    }

    #[test]
    fn file_keys_parse() {
        let f: FileConfig = toml::from_str("decks = 2\nbot_policy = \"basic\"\n").unwrap();
        assert_eq!(f.decks, Some(2));
        assert_eq!(f.bot_policy.as_deref(), Some("basic"));
        assert!(f.seed.is_none());
        assert!(toml::from_str::<FileConfig>("stack = 5\n").is_err());
    }
}
