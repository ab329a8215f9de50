//! Cosmid Control - print cosmid-style console messages from the shell

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cosmid_messenger::{ColorMode, Messenger, MessengerConfig};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cosmidctl")]
#[command(about = "Print cosmid banners and status messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Messenger config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the welcome banner
    Welcome {
        /// Version shown in the banner, without a leading "v"
        version: String,
    },

    /// Print a single status line
    Send {
        /// Name printed in the first column
        #[arg(long, default_value = "")]
        sender: String,

        /// warning, error, update or ghost; anything else prints as a note
        category: String,

        /// Message text
        message: String,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only messages
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.no_color)?;
    debug!(color = config.color.as_str(), "resolved output config");

    match cli.command {
        Commands::Welcome { version } => {
            Messenger::with_config("", &config)
                .welcome(&version)
                .context("failed to print welcome banner")?;
        }
        Commands::Send {
            sender,
            category,
            message,
        } => {
            Messenger::with_config(sender, &config)
                .send(category.as_str(), &message)
                .context("failed to print message")?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>, no_color: bool) -> Result<MessengerConfig> {
    let mut config = match path {
        Some(path) => MessengerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => MessengerConfig::default(),
    };

    if no_color {
        config.color = ColorMode::Never;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::parse_from(["cosmidctl", "send", "--sender", "build", "error", "disk full"]);
        match cli.command {
            Commands::Send {
                sender,
                category,
                message,
            } => {
                assert_eq!(sender, "build");
                assert_eq!(category, "error");
                assert_eq!(message, "disk full");
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_no_color_overrides_default() {
        let config = load_config(None, true).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(load_config(None, false).unwrap().color, ColorMode::Always);
    }
}
