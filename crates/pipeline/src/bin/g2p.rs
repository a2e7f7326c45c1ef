//! Command-line G2P
//!
//! Reads text from the arguments (or one line per input on stdin) and prints
//! one JSON `LanguageResult` per line. Configuration comes from `config/`
//! and `G2P_FRONTEND__*` variables; `G2P_FRONTEND_ENV` selects the
//! environment file.

use anyhow::Context;
use std::io::BufRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use g2p_frontend_config::{load_settings, Settings};
use g2p_frontend_pipeline::MultilingualG2p;

fn main() -> anyhow::Result<()> {
    let env = std::env::var("G2P_FRONTEND_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // tracing is not up yet
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);
    tracing::info!(
        environment = settings.environment.name(),
        languages = ?settings.g2p.languages,
        "Starting g2p v{}",
        env!("CARGO_PKG_VERSION")
    );

    let g2p = MultilingualG2p::from_settings(&settings);
    let candidates = settings.g2p.languages.clone();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .context("reading stdin")?
    } else {
        vec![args.join(" ")]
    };

    for text in inputs.iter().filter(|t| !t.trim().is_empty()) {
        let result = g2p
            .g2p(text, &candidates)
            .with_context(|| format!("g2p failed for {:?}", text))?;
        println!("{}", serde_json::to_string(&result)?);
    }

    g2p.backends().unload_all();
    Ok(())
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("g2p_frontend={},g2p={}", level, level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
