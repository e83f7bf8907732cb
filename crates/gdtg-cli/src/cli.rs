use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "gdtg",
    version,
    about = "GDT-Graph CLI - graph-based structural-similarity scoring of predicted protein structures against their targets.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel seed scoring.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute GDT-graph scores for every decoy of a target, averaged over a cutoff set.
    Score(ScoreArgs),
    /// Tabulate whole-graph bond-set agreement between a target and its decoys.
    Compare(CompareArgs),
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the target's hydrogen-bond listing.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Sequence-length table with one `name<TAB>residues` record per target.
    #[arg(value_name = "SEQFILE")]
    pub seqfile: PathBuf,

    /// Directory containing the decoy bond listings for this target.
    #[arg(value_name = "DECOY_DIR")]
    pub decoy_dir: PathBuf,

    /// Directory with tertiary-interaction listings. A protein without a
    /// listing here is scored on hydrogen bonds alone.
    #[arg(long, value_name = "DIR")]
    pub tertiary_dir: Option<PathBuf>,

    /// Cutoff overrides, comma separated (default: 25,50,100,200).
    #[arg(long, value_delimiter = ',', value_name = "N")]
    pub cutoffs: Option<Vec<usize>>,

    /// TOML run-configuration file; explicit flags take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file for `decoy<TAB>score` records; stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Path to the target's hydrogen-bond listing.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing the decoy bond listings for this target.
    #[arg(value_name = "DECOY_DIR")]
    pub decoy_dir: PathBuf,

    /// Directory with tertiary-interaction listings.
    #[arg(long, value_name = "DIR")]
    pub tertiary_dir: Option<PathBuf>,

    /// Half-width of the endpoint tolerance window (default: 5).
    #[arg(long, value_name = "N")]
    pub half_width: Option<u32>,

    /// TOML run-configuration file; explicit flags take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file for the agreement table; stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
