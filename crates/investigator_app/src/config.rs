//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use investigator_core::Locale;
use investigator_engine::{ClientSettings, DEFAULT_ENDPOINT};
use log::LevelFilter;
use url::Url;

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "investigator", version)]
#[command(about = "Send a news lead to the investigation service and show its verdict")]
pub struct Cli {
    /// Investigate endpoint of the service.
    #[arg(long, global = true, env = "INVESTIGATOR_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Language of messages and example leads (`en` or `pt`).
    #[arg(long, global = true, env = "INVESTIGATOR_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Render result sections without collapse toggles.
    #[arg(long, global = true)]
    pub flat: bool,

    /// Directory holding the theme preference and the log file.
    #[arg(long, global = true, env = "INVESTIGATOR_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogDestination::Off)]
    pub log: LogDestination,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Give up on the service after this many seconds. Waits forever when unset.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Investigate a lead given as free text or a URL.
    Investigate {
        #[arg(required = true, num_args = 1..)]
        lead: Vec<String>,
        /// Also write the result page into this directory.
        #[arg(long, value_name = "DIR")]
        html: Option<PathBuf>,
    },
    /// Load one of the canned example leads and investigate it.
    Example {
        key: String,
        #[arg(long, value_name = "DIR")]
        html: Option<PathBuf>,
        /// Only show the lead, do not contact the service.
        #[arg(long)]
        load_only: bool,
    },
    /// Show or toggle the stored light/dark theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Ask the service whether it is up.
    Health,
    /// Line-driven session; type `:help` for commands.
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub locale: Locale,
    pub collapsible: bool,
    pub state_dir: PathBuf,
    pub log: LogDestination,
    pub level: LevelFilter,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let endpoint = Url::parse(&cli.endpoint)
            .with_context(|| format!("invalid endpoint url `{}`", cli.endpoint))?;

        let mut client = ClientSettings::new(endpoint);
        client.request_timeout = cli.timeout.map(Duration::from_secs);

        let state_dir = match &cli.state_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let level = if cli.verbose {
            LevelFilter::Debug
        } else {
            engine_logging::default_level()
        };

        Ok(Self {
            client,
            locale: cli.locale,
            collapsible: !cli.flat,
            state_dir,
            log: cli.log,
            level,
        })
    }
}
