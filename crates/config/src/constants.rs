//! Centralized defaults for the G2P front end
//!
//! Every default used by `Settings` lives here so the config files, the CLI
//! and the tests agree on one value.

/// Environment variable prefix (`G2P_FRONTEND__G2P__RAISE_YOMI_ERROR=true`)
pub const ENV_PREFIX: &str = "G2P_FRONTEND";

/// Directory searched for `default.{toml,yaml,json}` and `{env}.*`
pub const CONFIG_DIR: &str = "config";

/// Feature extraction defaults
pub mod features {
    /// Blend weight of the assist text embedding
    pub const DEFAULT_ASSIST_TEXT_WEIGHT: f32 = 0.7;

    /// Width of the sentence-embedding model output
    pub const DEFAULT_EMBEDDING_DIM: usize = 1024;
}

/// Default resource locations, relative to the working directory
pub mod paths {
    pub const JP_LEXICON: &str = "data/jp_lexicon.tsv";
    pub const CMUDICT: &str = "data/cmudict.rep";
    pub const EN_SHORTFORM: &str = "data/cmudict_shortform.rep";
    pub const EN_TOKENIZER: &str = "";
}

/// Observability defaults
pub mod observability {
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
