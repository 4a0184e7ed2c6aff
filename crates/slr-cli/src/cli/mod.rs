//! CLI for the SLR launch-link redirector.

mod commands;

use anyhow::Result;
use chrono::Utc;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use slr_core::config::Toggle;
use slr_core::gate::pause::MAX_PAUSE_MINUTES;
use slr_core::store::FileStore;
use std::io;

use commands::{
    run_check, run_completions, run_disable, run_man, run_pause, run_resume, run_set, run_status,
    run_translate, run_watch,
};

/// Top-level CLI for the SLR redirector.
#[derive(Debug, Parser)]
#[command(name = "slr")]
#[command(about = "SLR: open store and community web links in the desktop client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the launch URI for each URL (`-` when the page stays in the browser).
    Translate {
        /// Web URLs to translate.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Run the full redirect decision for a URL with the current settings.
    Check {
        /// Web URL to check.
        url: String,
        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show whether redirects are active, paused or disabled, and each category toggle.
    Status,

    /// Pause redirects for MINUTES, or until resumed when omitted.
    Pause {
        /// Pause length in minutes (1 to 10080, one week).
        #[arg(value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAUSE_MINUTES)))]
        minutes: Option<u32>,
    },

    /// Resume redirects: clears any pause and turns the switch back on.
    #[command(visible_alias = "enable")]
    Resume,

    /// Turn redirects off until resumed.
    Disable,

    /// Turn a category on or off (store, community, help, help-wizard, help-tickets).
    Set {
        /// Category toggle name.
        toggle: Toggle,
        /// on/off (also accepts true/false, yes/no, 1/0).
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        on: bool,
    },

    /// Read navigation events (`<tab-id> <url> [top|sub]`) from stdin and print
    /// `<tab-id>\t<launch-uri>` for every redirect.
    Watch,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Render the man page.
    Man,
}

fn open_store() -> Result<FileStore> {
    let store = FileStore::open_default()?;
    tracing::debug!("using settings at {}", store.path().display());
    Ok(store)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    pub fn run(self) -> Result<()> {
        let mut out = io::stdout().lock();

        match self {
            CliCommand::Translate { urls } => run_translate(&urls, &mut out)?,
            CliCommand::Check { url, json } => {
                run_check(&open_store()?, &url, json, Utc::now(), &mut out)?;
            }
            CliCommand::Status => {
                let store = open_store()?;
                run_status(&store, Some(store.path()), Utc::now(), &mut out)?;
            }
            CliCommand::Pause { minutes } => {
                run_pause(&open_store()?, minutes, Utc::now(), &mut out)?;
            }
            CliCommand::Resume => run_resume(&open_store()?, &mut out)?,
            CliCommand::Disable => run_disable(&open_store()?, &mut out)?,
            CliCommand::Set { toggle, on } => run_set(&open_store()?, toggle, on, &mut out)?,
            CliCommand::Watch => {
                let handled = run_watch(open_store()?, io::stdin().lock(), &mut out)?;
                tracing::info!(handled, "navigation stream closed");
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut out)?,
            CliCommand::Man => run_man(&mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
