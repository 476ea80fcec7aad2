use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `syllabus-tool` binary.
#[derive(Debug, Parser)]
#[command(
    name = "syllabus-tool",
    version,
    about = "Check, repair and preview syllabus JSON files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report malformed chapters and topics. Fails if any errors are found.
    Check(CheckArgs),
    /// Merge broken chapter titles, split glued ones and re-index.
    Heal(HealArgs),
    /// Renumber chapters and regenerate chapter/topic ids only.
    Reindex(RewriteArgs),
    /// Show the week-by-week teaching sequence.
    Plan(PlanArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Syllabus files or directories (searched recursively for *.json)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print issues as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Where a rewritten document goes.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Write the result to this file
    #[arg(short, long, conflicts_with = "in_place")]
    pub out: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(long)]
    pub in_place: bool,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct HealArgs {
    /// Syllabus file to repair
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Syllabus file to re-index
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Syllabus file
    pub path: PathBuf,

    /// Topics taught per week
    #[arg(long, default_value_t = 1)]
    pub per_week: u32,

    /// Show the status view for this week instead of the full breakdown
    #[arg(long)]
    pub week: Option<u32>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_accepts_many_paths() {
        let cli = Cli::try_parse_from(["syllabus-tool", "check", "a.json", "data/", "--strict"])
            .expect("cli should parse");
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.paths.len(), 2);
                assert!(args.strict);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_requires_a_path() {
        assert!(Cli::try_parse_from(["syllabus-tool", "check"]).is_err());
    }

    #[test]
    fn out_and_in_place_conflict() {
        let parsed = Cli::try_parse_from([
            "syllabus-tool",
            "heal",
            "a.json",
            "--out",
            "b.json",
            "--in-place",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn plan_defaults_to_one_topic_per_week() {
        let cli = Cli::try_parse_from(["syllabus-tool", "plan", "a.json", "-v"])
            .expect("cli should parse");
        assert!(cli.verbose);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.per_week, 1);
                assert_eq!(args.week, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
