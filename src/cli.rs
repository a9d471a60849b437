//! CLI definitions for wingskills.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Wingskills CLI.
#[derive(Parser)]
#[command(name = "wingskills")]
#[command(about = "Pluggable LLM tool skills for voice assistants")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/wingskills.toml", global = true)]
    pub config: PathBuf,

    /// Emit verbose skill diagnostics regardless of the config file
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the tool schemas of the enabled skills
    Tools {
        /// Schema flavour
        #[arg(long, value_enum, default_value_t = ToolFormat::Openai)]
        format: ToolFormat,
    },

    /// Invoke one tool and print its responses
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },

    /// Validate the configuration file
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ToolFormat {
    Openai,
    Anthropic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tools_defaults() {
        let cli = Cli::try_parse_from(["wingskills", "tools"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config/wingskills.toml"));
        assert!(!cli.debug);
        assert!(matches!(cli.command, Commands::Tools { format: ToolFormat::Openai }));
    }

    #[test]
    fn test_parse_call_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wingskills",
            "call",
            "send_api_request",
            "--params",
            r#"{"url":"http://localhost"}"#,
            "--debug",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Commands::Call { tool, params } => {
                assert_eq!(tool, "send_api_request");
                assert!(params.contains("localhost"));
            }
            _ => panic!("Expected call command"),
        }
    }

    #[test]
    fn test_parse_anthropic_format() {
        let cli = Cli::try_parse_from(["wingskills", "tools", "--format", "anthropic"]).unwrap();
        assert!(matches!(cli.command, Commands::Tools { format: ToolFormat::Anthropic }));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["wingskills", "tools", "--format", "xml"]).is_err());
    }
}
