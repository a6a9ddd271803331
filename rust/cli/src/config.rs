use serde::{Deserialize, Serialize};
use std::fs;

/// Image formats the renderer is asked to produce.
pub const IMAGE_FORMATS: &[&str] = &["jpg", "png", "svg", "pdf"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// External Graphviz-compatible program fed with DOT on stdin
    pub renderer: String,
    pub image_format: String,
    pub seed: Option<u64>,
    /// Cards dealt when no explicit hand is given
    pub hand_size: usize,
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
    pub renderer: ValueSource,
    pub image_format: ValueSource,
    pub seed: ValueSource,
    pub hand_size: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            renderer: ValueSource::Default,
            image_format: ValueSource::Default,
            seed: ValueSource::Default,
            hand_size: ValueSource::Default,
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
            renderer: "dot".into(),
            image_format: "jpg".into(),
            seed: None,
            hand_size: 10,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    renderer: Option<String>,
    image_format: Option<String>,
    seed: Option<u64>,
    hand_size: Option<usize>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `CARDTREE_CONFIG`, then
/// `CARDTREE_*` variables, reading variables through `env`.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var("CARDTREE_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.renderer {
            cfg.renderer = v;
            sources.renderer = ValueSource::File;
        }
        if let Some(v) = f.image_format {
            cfg.image_format = v;
            sources.image_format = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
    }

    if let Some(renderer) = var("CARDTREE_RENDERER") {
        cfg.renderer = renderer;
        sources.renderer = ValueSource::Env;
    }
    if let Some(format) = var("CARDTREE_FORMAT") {
        cfg.image_format = format;
        sources.image_format = ValueSource::Env;
    }
    if let Some(seed) = var("CARDTREE_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(size) = var("CARDTREE_HAND_SIZE") {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand size".into()))?;
        sources.hand_size = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.renderer.trim().is_empty() {
        return Err(ConfigError::Invalid("renderer must not be empty".into()));
    }
    if !IMAGE_FORMATS.contains(&cfg.image_format.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "image_format must be one of {}",
            IMAGE_FORMATS.join(", ")
        )));
    }
    if !(1..=52).contains(&cfg.hand_size) {
        return Err(ConfigError::Invalid("hand_size must be 1-52".into()));
    }
    Ok(())
}
