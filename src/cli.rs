//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::CommitMode;

/// Campaign Analytics - read-oriented API over advertising campaigns
#[derive(Parser, Debug)]
#[command(name = "campaign-analytics")]
#[command(version)]
#[command(about = "Campaign analytics API and CSV loader", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server (default)
    Serve,

    /// Replace the store content with the CSV sources
    Load {
        /// Directory holding the three CSV exports
        #[arg(long)]
        data_dir: Option<String>,

        /// Transaction mode: atomic | two_phase
        #[arg(long)]
        commit_mode: Option<CommitMode>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["campaign-analytics"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_load_arguments() {
        let cli = Cli::try_parse_from([
            "campaign-analytics",
            "load",
            "--data-dir",
            "/tmp/csv",
            "--commit-mode",
            "two-phase",
            "--config",
            "prod.toml",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
        match cli.command {
            Some(Commands::Load {
                data_dir,
                commit_mode,
            }) => {
                assert_eq!(data_dir.as_deref(), Some("/tmp/csv"));
                assert_eq!(commit_mode, Some(CommitMode::TwoPhase));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_commit_mode_rejected() {
        let result =
            Cli::try_parse_from(["campaign-analytics", "load", "--commit-mode", "eventual"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_generate_arguments() {
        let cli =
            Cli::try_parse_from(["campaign-analytics", "config", "generate", "out.toml", "--force"])
                .unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            }) => {
                assert_eq!(output_path.as_deref(), Some("out.toml"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
