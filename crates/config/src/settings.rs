//! Main settings structure

use config::{Config, Environment, File};
use g2p_frontend_core::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{features, observability, paths, CONFIG_DIR, ENV_PREFIX};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Relaxed validation, missing resources are warnings
    #[default]
    Development,
    /// Stricter validation
    Staging,
    /// All validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Missing resources are fatal in strict environments
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Language selection and error policy
    #[serde(default)]
    pub g2p: G2pSettings,

    /// Japanese reading options
    #[serde(default)]
    pub japanese: JapaneseSettings,

    /// Dictionary and tokenizer locations
    #[serde(default)]
    pub models: ModelPaths,

    /// Phone-level feature expansion
    #[serde(default)]
    pub features: FeatureSettings,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_g2p()?;
        self.validate_features()?;
        self.validate_model_paths()?;
        Ok(())
    }

    /// Concrete languages this configuration can produce
    pub fn enabled_languages(&self) -> Vec<Language> {
        if self.g2p.languages.contains(&Language::Multi) {
            Language::CONCRETE.to_vec()
        } else {
            self.g2p.languages.clone()
        }
    }

    fn validate_g2p(&self) -> Result<(), ConfigError> {
        let languages = &self.g2p.languages;

        if languages.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "g2p.languages".to_string(),
                message: "At least one language tag is required".to_string(),
            });
        }

        if languages.contains(&Language::Multi) && languages.len() > 1 {
            return Err(ConfigError::InvalidValue {
                field: "g2p.languages".to_string(),
                message: format!(
                    "MULTI cannot be combined with concrete tags, got {:?}",
                    languages
                ),
            });
        }

        Ok(())
    }

    fn validate_features(&self) -> Result<(), ConfigError> {
        let weight = self.features.assist_text_weight;
        if !(0.0..=1.0).contains(&weight) {
            return Err(ConfigError::InvalidValue {
                field: "features.assist_text_weight".to_string(),
                message: format!("Must be between 0.0 and 1.0, got {}", weight),
            });
        }

        if self.features.embedding_dim == 0 {
            return Err(ConfigError::InvalidValue {
                field: "features.embedding_dim".to_string(),
                message: "Embedding dimension must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Resources needed by an enabled language are required; the rest only warn
    fn validate_model_paths(&self) -> Result<(), ConfigError> {
        let enabled = self.enabled_languages();
        let jp = enabled.contains(&Language::Jp);
        let en = enabled.contains(&Language::En);

        let resources = [
            ("models.jp_lexicon", &self.models.jp_lexicon, jp, Some(".tsv")),
            ("models.cmudict", &self.models.cmudict, en, None),
            ("models.en_shortform", &self.models.en_shortform, false, None),
            ("models.en_tokenizer", &self.models.en_tokenizer, false, Some(".json")),
        ];

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (field, path, required, expected_ext) in resources {
            if path.is_empty() {
                if required && self.environment.is_strict() {
                    errors.push(format!(
                        "{}: path is required in {} mode",
                        field,
                        self.environment.name()
                    ));
                } else if required {
                    tracing::warn!("{}: path not configured, using built-in fallback", field);
                }
                continue;
            }

            if let Some(ext) = expected_ext {
                if !path.ends_with(ext) {
                    warnings.push(format!("{}: expected {} extension, got '{}'", field, ext, path));
                }
            }

            let path_obj = Path::new(path);
            if !path_obj.exists() {
                if required && self.environment.is_strict() {
                    errors.push(format!("{}: resource not found: {}", field, path));
                } else {
                    tracing::warn!("Resource not found: {} = {}", field, path);
                }
            } else if !path_obj.is_file() {
                errors.push(format!("{}: path exists but is not a file: {}", field, path));
            }
        }

        if !warnings.is_empty() {
            tracing::warn!("Resource path warnings:\n  - {}", warnings.join("\n  - "));
        }

        if !errors.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "models".to_string(),
                message: errors.join("\n  - "),
            });
        }

        Ok(())
    }
}

/// Language selection and error policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct G2pSettings {
    /// Candidate language tags, `["MULTI"]` lets the selector choose freely
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    /// Abort on unreadable input instead of substituting UNK
    #[serde(default)]
    pub raise_yomi_error: bool,
}

fn default_languages() -> Vec<Language> {
    vec![Language::Multi]
}

impl Default for G2pSettings {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            raise_yomi_error: false,
        }
    }
}

/// Japanese reading options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JapaneseSettings {
    /// Kansai (Keihan) high-start pitch pattern
    #[serde(default)]
    pub keihan: bool,

    /// Child-speech substitutions on the pronunciation
    #[serde(default)]
    pub babytalk: bool,

    /// Voice every voiceable mora
    #[serde(default)]
    pub dakuten: bool,

    /// Moraic nasal as `N` instead of `n`
    #[serde(default = "default_true")]
    pub use_jp_extra: bool,
}

impl Default for JapaneseSettings {
    fn default() -> Self {
        Self {
            keihan: false,
            babytalk: false,
            dakuten: false,
            use_jp_extra: true,
        }
    }
}

/// Resource locations. Empty strings mean "not configured".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPaths {
    /// Tab-separated Japanese lexicon for the in-tree analyzer
    #[serde(default = "default_jp_lexicon")]
    pub jp_lexicon: String,

    /// CMU-style pronouncing dictionary
    #[serde(default = "default_cmudict")]
    pub cmudict: String,

    /// Spell-out dictionary for all-caps short forms
    #[serde(default = "default_en_shortform")]
    pub en_shortform: String,

    /// HuggingFace `tokenizer.json` for English subwords
    #[serde(default)]
    pub en_tokenizer: String,
}

fn default_jp_lexicon() -> String {
    paths::JP_LEXICON.to_string()
}
fn default_cmudict() -> String {
    paths::CMUDICT.to_string()
}
fn default_en_shortform() -> String {
    paths::EN_SHORTFORM.to_string()
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            jp_lexicon: default_jp_lexicon(),
            cmudict: default_cmudict(),
            en_shortform: default_en_shortform(),
            en_tokenizer: paths::EN_TOKENIZER.to_string(),
        }
    }
}

/// Phone-level feature expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSettings {
    /// Blend weight of the assist text, in [0, 1]
    #[serde(default = "default_assist_text_weight")]
    pub assist_text_weight: f32,

    /// Width of sentence-embedding vectors
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
}

fn default_assist_text_weight() -> f32 {
    features::DEFAULT_ASSIST_TEXT_WEIGHT
}
fn default_embedding_dim() -> usize {
    features::DEFAULT_EMBEDDING_DIM
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            assist_text_weight: default_assist_text_weight(),
            embedding_dim: default_embedding_dim(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    observability::DEFAULT_LOG_LEVEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from `config/default`, `config/{env}` and the environment
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(CONFIG_DIR), env)
}

/// Same as [`load_settings`] with an explicit config directory
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_file = dir.join("default");
    builder = builder.add_source(File::with_name(&default_file.to_string_lossy()).required(false));

    if let Some(env_name) = env {
        let env_file = dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_file.to_string_lossy()).required(false));
    }

    // G2P_FRONTEND__G2P__LANGUAGES=JP,EN
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("g2p.languages"),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
