use clap::{Parser, Subcommand};
use std::path::PathBuf;

use spdx_sq::application::dto::Query;

/// Query SPDX JSON documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "sq")]
#[command(version)]
#[command(about = "Query SPDX JSON documents from the terminal", long_about = None)]
pub struct Args {
    /// SPDX JSON file to query (defaults to the first one found below the current directory)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub sbom: Option<PathBuf>,

    /// Settings file (defaults to sq.config.yml in the current directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Disable terminal colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress messages (errors are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show document metadata
    Meta,

    /// List files
    Files {
        /// Number of leading files to show
        #[arg(value_name = "N")]
        limit: Option<usize>,
    },

    /// List packages
    #[command(args_conflicts_with_subcommands = true)]
    Pkgs {
        #[command(subcommand)]
        command: Option<PkgsCommand>,

        /// Number of leading packages to show
        #[arg(value_name = "N")]
        limit: Option<usize>,
    },

    /// List relationships
    #[command(args_conflicts_with_subcommands = true)]
    Rels {
        #[command(subcommand)]
        command: Option<RelsCommand>,

        /// Number of leading relationships to show
        #[arg(value_name = "N")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PkgsCommand {
    /// Show license and copyright information per package
    Ip {
        /// Number of leading packages to show
        #[arg(value_name = "N")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RelsCommand {
    /// Walk the relationship graph from its DESCRIBES roots
    Dig,
}

impl Args {
    /// Parses the process arguments, leaving exit handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

impl Command {
    /// Query selected by this command together with its explicit row limit
    pub fn query(&self) -> (Query, Option<usize>) {
        match self {
            Command::Meta => (Query::Meta, None),
            Command::Files { limit } => (Query::Files, *limit),
            Command::Pkgs {
                command: Some(PkgsCommand::Ip { limit }),
                ..
            } => (Query::PackageIp, *limit),
            Command::Pkgs {
                command: None,
                limit,
            } => (Query::Packages, *limit),
            Command::Rels {
                command: Some(RelsCommand::Dig),
                ..
            } => (Query::Dig, None),
            Command::Rels {
                command: None,
                limit,
            } => (Query::Relationships, *limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sq").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_meta() {
        let args = parse(&["meta"]);
        assert_eq!(args.command.query(), (Query::Meta, None));
        assert!(args.sbom.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_parse_files_with_limit() {
        let args = parse(&["files", "5"]);
        assert_eq!(args.command.query(), (Query::Files, Some(5)));
    }

    #[test]
    fn test_parse_pkgs_and_ip() {
        assert_eq!(parse(&["pkgs"]).command.query(), (Query::Packages, None));
        assert_eq!(
            parse(&["pkgs", "2"]).command.query(),
            (Query::Packages, Some(2))
        );
        assert_eq!(
            parse(&["pkgs", "ip"]).command.query(),
            (Query::PackageIp, None)
        );
        assert_eq!(
            parse(&["pkgs", "ip", "7"]).command.query(),
            (Query::PackageIp, Some(7))
        );
    }

    #[test]
    fn test_parse_rels_and_dig() {
        assert_eq!(
            parse(&["rels", "10"]).command.query(),
            (Query::Relationships, Some(10))
        );
        assert_eq!(parse(&["rels", "dig"]).command.query(), (Query::Dig, None));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["rels", "dig", "-c", "bom.json", "--no-color", "-q"]);
        assert_eq!(args.sbom, Some(PathBuf::from("bom.json")));
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_output_and_settings() {
        let args = parse(&["--settings", "ci.yml", "-o", "out.txt", "files"]);
        assert_eq!(args.settings, Some(PathBuf::from("ci.yml")));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        assert!(Args::try_parse_from(["sq", "files", "abc"]).is_err());
        assert!(Args::try_parse_from(["sq", "pkgs", "-3"]).is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["sq"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["sq", "-v", "-q", "meta"]).is_err());
    }
}
