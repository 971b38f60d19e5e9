use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "trackfield")]
#[command(about = "Athletics result value tool", version)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "TRACKFIELD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format a canonical magnitude as a display string
    Format {
        /// Result kind tag (TIME, DISTANCE, POINTS)
        #[arg(short, long)]
        kind: Option<String>,

        /// Non-negative magnitude in the kind's unit
        #[arg(allow_hyphen_values = true)]
        magnitude: u64,
    },
    /// Parse a display string into its canonical magnitude
    Parse {
        /// Result kind tag (TIME, DISTANCE, POINTS)
        #[arg(short, long)]
        kind: Option<String>,

        value: String,
    },
    /// Mask raw keystroke text into the display shape of a kind
    Mask {
        /// Result kind tag (TIME, DISTANCE, POINTS)
        #[arg(short, long)]
        kind: Option<String>,

        #[arg(allow_hyphen_values = true)]
        raw: String,

        /// Cursor position to clamp against the masked text
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// List result kinds with their units and input hints
    Kinds,
    /// Export stored results as a formatted table
    Export {
        /// JSON array of stored results
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Tsv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format_command() {
        let cli = Cli::parse_from(["trackfield", "format", "--kind", "TIME", "732051"]);
        match cli.command {
            Command::Format { kind, magnitude } => {
                assert_eq!(kind.as_deref(), Some("TIME"));
                assert_eq!(magnitude, 732051);
            }
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn test_format_accepts_full_magnitude_range() {
        let max = u64::MAX.to_string();
        let cli = Cli::parse_from(["trackfield", "format", "-k", "POINTS", max.as_str()]);
        assert!(matches!(
            cli.command,
            Command::Format {
                magnitude: u64::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_format_rejects_negative_magnitude() {
        assert!(Cli::try_parse_from(["trackfield", "format", "-k", "POINTS", "-5"]).is_err());
    }

    #[test]
    fn test_parse_export_command() {
        let cli = Cli::parse_from([
            "trackfield", "export", "--input", "results.json", "--format", "json",
        ]);
        match cli.command {
            Command::Export { format, output, .. } => {
                assert_eq!(format, Some(ExportFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("expected export command"),
        }
    }
}
