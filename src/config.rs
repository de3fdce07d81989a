use figment2::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::inspect::InspectOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Quiet,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Log every polling sample.
    pub fn log_samples(&self) -> bool {
        *self >= Self::Trace
    }

    /// Log gating decisions (change detected, target matched).
    pub fn log_gating(&self) -> bool {
        *self >= Self::Debug
    }
}

/// CLI arguments subset that can override config
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub brief: bool,
    pub poll_interval_ms: Option<u64>,
    pub verbosity: Verbosity,
}

fn default_poll_interval() -> u64 {
    100
}

fn default_brief() -> bool {
    false
}

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between foreground polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Suppress the extended report sections
    #[serde(default = "default_brief")]
    pub brief: bool,

    /// Enable verbose logging
    #[serde(default = "default_verbose")]
    pub verbose: bool,

    /// Verbosity level (0-5, higher = more verbose)
    #[serde(skip)]
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            brief: default_brief(),
            verbose: default_verbose(),
            verbosity: Verbosity::Quiet,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in order:
    /// 1. Default values
    /// 2. Config file at $XDG_CONFIG_HOME/hwnd-inspector/config.toml
    /// 3. Environment variables (HI_* prefix)
    /// 4. CLI args (if provided)
    pub fn load(args: Option<&CliArgs>) -> Result<Self, figment2::Error> {
        Self::load_from(Self::config_path().as_deref(), args)
    }

    pub fn load_from(
        config_file: Option<&Path>,
        args: Option<&CliArgs>,
    ) -> Result<Self, figment2::Error> {
        let mut figment = Figment::new();

        if let Some(path) = config_file {
            if path.exists() {
                if let Some(path_str) = path.to_str() {
                    figment = figment.merge(Toml::file(path_str));
                }
            }
        }

        figment = figment.merge(Env::prefixed("HI_").split("__"));

        if let Some(args) = args {
            if args.brief {
                figment = figment.merge(("brief", true));
            }
            if let Some(interval) = args.poll_interval_ms {
                figment = figment.merge(("poll_interval_ms", interval));
            }
            if args.verbosity != Verbosity::default() {
                figment = figment.merge(("verbose", true));
            }
        }

        let mut config: Config = figment.extract()?;
        config.verbosity = args.map(|a| a.verbosity).unwrap_or_default();
        Ok(config)
    }

    /// Get path to config file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hwnd-inspector").join("config.toml"))
    }

    /// Convert to InspectOptions for the Inspector
    pub fn to_inspect_options(&self) -> InspectOptions {
        let verbosity = if self.verbose && self.verbosity < Verbosity::Debug {
            Verbosity::Debug
        } else {
            self.verbosity
        };

        InspectOptions {
            brief: self.brief,
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            verbosity,
        }
    }
}
