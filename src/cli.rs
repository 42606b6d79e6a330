//! Command-line interface definitions for Awful News Narrator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Options marked with `env` can also be provided via environment variables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Awful News Narrator application.
///
/// # Examples
///
/// ```sh
/// # One-off report written to disk
/// awful_news_narrator analyze -c Tesla -j ./json -m ./markdown
///
/// # HTTP service with a custom config
/// awful_news_narrator --config ./config.yaml serve --addr 0.0.0.0:8000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to config.yaml file
    #[arg(long, global = true, env = "NEWS_NARRATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse news coverage for one company and write the report
    Analyze {
        /// Company to analyse
        #[arg(short, long)]
        company: String,

        /// Output directory for the JSON report
        #[arg(short, long)]
        json_output_dir: PathBuf,

        /// Output directory for the Markdown report
        #[arg(short, long)]
        markdown_output_dir: Option<PathBuf>,
    },
    /// Serve analyses over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "NEWS_NARRATOR_ADDR", default_value = "127.0.0.1:8000")]
        addr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "awful_news_narrator",
            "analyze",
            "--company",
            "Tesla",
            "--json-output-dir",
            "./json",
            "--markdown-output-dir",
            "./markdown",
        ]);

        match cli.command {
            Command::Analyze {
                company,
                json_output_dir,
                markdown_output_dir,
            } => {
                assert_eq!(company, "Tesla");
                assert_eq!(json_output_dir, PathBuf::from("./json"));
                assert_eq!(markdown_output_dir, Some(PathBuf::from("./markdown")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["awful_news_narrator", "analyze", "-c", "Apple", "-j", "/tmp/json"]);

        match cli.command {
            Command::Analyze {
                company,
                json_output_dir,
                markdown_output_dir,
            } => {
                assert_eq!(company, "Apple");
                assert_eq!(json_output_dir, PathBuf::from("/tmp/json"));
                assert!(markdown_output_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from([
            "awful_news_narrator",
            "serve",
            "--addr",
            "0.0.0.0:9000",
            "--config",
            "cfg.yaml",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("cfg.yaml")));
        match cli.command {
            Command::Serve { addr } => assert_eq!(addr, "0.0.0.0:9000"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_analyze_requires_company() {
        assert!(Cli::try_parse_from(["awful_news_narrator", "analyze", "-j", "./json"]).is_err());
    }
}
