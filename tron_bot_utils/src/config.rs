use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tron::Protocol;

/// Command line arguments shared by all bots.
///
/// Use `#[command(flatten)]` to include them in a bot's own arguments.
#[derive(Args, Debug)]
pub struct BotArgs {
    /// How moves are sent to the referee, "numeric" or "symbolic".
    /// Overrides the config file.
    #[arg(short, long)]
    pub protocol: Option<Protocol>,

    /// Path to a config JSON file, e.g. {"protocol": "symbolic"}
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// Settings that stay fixed for the whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    pub protocol: Protocol,
}

impl BotConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl BotArgs {
    /// The config file if one was given, with command line overrides applied.
    pub fn config(&self) -> anyhow::Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load(path)?,
            None => BotConfig::default(),
        };
        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        Ok(config)
    }
}
