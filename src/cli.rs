//! CLI argument parsing.
//!
//! The animation runs with no arguments at all; the few flags here cover
//! config loading and seed overrides. Parsing accepts any iterator of
//! strings so it can be tested without touching `std::env`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the animation.
    Run {
        /// Optional path to a YAML config file.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed_override: Option<u64>,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        let mut config_path = None;
        let mut seed_override = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => {
                    return Self {
                        command: Command::Help,
                    }
                }
                "-V" | "--version" => {
                    return Self {
                        command: Command::Version,
                    }
                }
                "--config" => {
                    if i + 1 >= args.len() {
                        eprintln!("Error: '--config' requires a file path");
                        return Self {
                            command: Command::Help,
                        };
                    }
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                }
                "--seed" => {
                    if i + 1 >= args.len() {
                        eprintln!("Error: '--seed' requires a value");
                        return Self {
                            command: Command::Help,
                        };
                    }
                    if let Ok(seed) = args[i + 1].parse() {
                        seed_override = Some(seed);
                    }
                    i += 2;
                }
                unknown => {
                    eprintln!("Unknown argument: {unknown}");
                    return Self {
                        command: Command::Help,
                    };
                }
            }
        }

        Self {
            command: Command::Run {
                config_path,
                seed_override,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs() {
        let args = Args::parse_from(["helixterm"]);
        assert_eq!(
            args.command,
            Command::Run {
                config_path: None,
                seed_override: None,
            }
        );
    }

    #[test]
    fn test_help_flag() {
        assert_eq!(Args::parse_from(["helixterm", "-h"]).command, Command::Help);
        assert_eq!(
            Args::parse_from(["helixterm", "--help"]).command,
            Command::Help
        );
    }

    #[test]
    fn test_version_flag() {
        assert_eq!(
            Args::parse_from(["helixterm", "-V"]).command,
            Command::Version
        );
        assert_eq!(
            Args::parse_from(["helixterm", "--version"]).command,
            Command::Version
        );
    }

    #[test]
    fn test_seed_override() {
        let args = Args::parse_from(["helixterm", "--seed", "99"]);
        assert_eq!(
            args.command,
            Command::Run {
                config_path: None,
                seed_override: Some(99),
            }
        );
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["helixterm", "--config", "helix.yaml"]);
        assert_eq!(
            args.command,
            Command::Run {
                config_path: Some(PathBuf::from("helix.yaml")),
                seed_override: None,
            }
        );
    }

    #[test]
    fn test_config_and_seed_together() {
        let args = Args::parse_from(["helixterm", "--config", "h.yaml", "--seed", "7"]);
        assert_eq!(
            args.command,
            Command::Run {
                config_path: Some(PathBuf::from("h.yaml")),
                seed_override: Some(7),
            }
        );
    }

    #[test]
    fn test_trailing_config_without_path_shows_help() {
        let args = Args::parse_from(["helixterm", "--config"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_trailing_seed_without_value_shows_help() {
        let args = Args::parse_from(["helixterm", "--seed"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_unknown_argument_shows_help() {
        let args = Args::parse_from(["helixterm", "--frames"]);
        assert_eq!(args.command, Command::Help);
    }

    #[test]
    fn test_invalid_seed_ignored() {
        let args = Args::parse_from(["helixterm", "--seed", "banana"]);
        assert_eq!(
            args.command,
            Command::Run {
                config_path: None,
                seed_override: None,
            }
        );
    }
}
