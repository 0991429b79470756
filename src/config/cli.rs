use crate::config::toml_config::SquawkConfig;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "squawk-gen")]
#[command(about = "Generate and validate four digit octal transponder codes")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the built-in scenario suite (default)
    CheckSelf {
        /// Codes generated for the distinct-count report
        #[arg(long)]
        sample_size: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print freshly generated codes
    Generate {
        /// How many codes to print
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip reserved emergency codes
        #[arg(long)]
        assignable: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check whether codes may be assigned
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliConfig {
    /// Loads the file named by `--config`, or defaults when none is given.
    pub fn load_file_config(&self) -> crate::Result<SquawkConfig> {
        match &self.config {
            Some(path) => SquawkConfig::from_file(path),
            None => Ok(SquawkConfig::default()),
        }
    }

    /// Folds subcommand flags over the file configuration.
    pub fn apply_overrides(&self, config: &mut SquawkConfig) {
        match &self.command {
            Some(Command::CheckSelf { sample_size, seed }) => {
                if let Some(sample_size) = sample_size {
                    config.self_check.sample_size = *sample_size;
                }
                if seed.is_some() {
                    config.self_check.seed = *seed;
                }
            }
            Some(Command::Generate {
                count,
                seed,
                assignable,
                ..
            }) => {
                if let Some(count) = count {
                    config.generator.count = *count;
                }
                if seed.is_some() {
                    config.generator.seed = *seed;
                }
                if *assignable {
                    config.generator.assignable_only = true;
                }
            }
            Some(Command::Validate { .. }) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_self_check() {
        let cli = CliConfig::parse_from(["squawk-gen"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_flags_override_file() {
        let cli = CliConfig::parse_from([
            "squawk-gen", "generate", "-n", "8", "--seed", "3", "--assignable",
        ]);
        let mut config = SquawkConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.generator.count, 8);
        assert_eq!(config.generator.seed, Some(3));
        assert!(config.generator.assignable_only);
    }

    #[test]
    fn test_validate_requires_codes() {
        assert!(CliConfig::try_parse_from(["squawk-gen", "validate"]).is_err());

        let cli = CliConfig::try_parse_from(["squawk-gen", "validate", "1234", "7500"]).unwrap();
        match cli.command {
            Some(Command::Validate { codes, format }) => {
                assert_eq!(codes, vec!["1234", "7500"]);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_flags_after_codes_are_not_codes() {
        let cli = CliConfig::try_parse_from([
            "squawk-gen", "validate", "1234", "--format", "json", "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Validate { codes, format }) => {
                assert_eq!(codes, vec!["1234"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from(["squawk-gen", "check-self", "--verbose", "--seed", "9"]);
        assert!(cli.verbose);
        let mut config = SquawkConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.self_check.seed, Some(9));
    }
}
