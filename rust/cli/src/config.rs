use serde::{Deserialize, Serialize};
use std::fs;
use whodunit_ai::StrategyKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub strategy: String,
    pub seed: Option<u64>,
    pub max_turns: u32,
    pub cards_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub strategy: ValueSource,
    pub seed: ValueSource,
    pub max_turns: ValueSource,
    pub cards_file: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            strategy: ValueSource::Default,
            seed: ValueSource::Default,
            max_turns: ValueSource::Default,
            cards_file: ValueSource::Default,
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
            players: 3,
            strategy: StrategyKind::Dumb.as_str().into(),
            seed: None,
            max_turns: 1000,
            cards_file: None,
        }
    }
}

impl Config {
    pub fn strategy_kind(&self) -> Result<StrategyKind, ConfigError> {
        self.strategy
            .parse()
            .map_err(|e: whodunit_ai::UnknownStrategy| ConfigError::Invalid(e.to_string()))
    }
}

/// Values given explicitly on the command line; they win over every other
/// layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub players: Option<usize>,
    pub strategy: Option<StrategyKind>,
    pub seed: Option<u64>,
    pub cards_file: Option<String>,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("WHODUNIT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
            sources.max_turns = ValueSource::File;
        }
        if let Some(v) = f.cards_file {
            cfg.cards_file = Some(v);
            sources.cards_file = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("WHODUNIT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("WHODUNIT_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var("WHODUNIT_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }
    if let Ok(turns) = std::env::var("WHODUNIT_MAX_TURNS")
        && !turns.is_empty()
    {
        cfg.max_turns = turns
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_turns".into()))?;
        sources.max_turns = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Loads every layer and then applies command-line overrides.
pub fn resolve(overrides: Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_with_sources()?;
    let ConfigResolved { config, sources } = &mut resolved;
    if let Some(v) = overrides.players {
        config.players = v;
        sources.players = ValueSource::Flag;
    }
    if let Some(v) = overrides.strategy {
        config.strategy = v.as_str().into();
        sources.strategy = ValueSource::Flag;
    }
    if let Some(v) = overrides.seed {
        config.seed = Some(v);
        sources.seed = ValueSource::Flag;
    }
    if let Some(v) = overrides.cards_file {
        config.cards_file = Some(v);
        sources.cards_file = ValueSource::Flag;
    }
    validate(config)?;
    Ok(resolved)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_turns: Option<u32>,
    #[serde(default)]
    cards_file: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be >=1".into(),
        ));
    }
    if cfg.max_turns == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_turns must be >=1".into(),
        ));
    }
    cfg.strategy_kind()?;
    Ok(())
}
