use clap::{Args, Parser, Subcommand};
use nucleogen::core::geometry::HelixFamily;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Maximilian Pfaff",
    version,
    about = "nucleogen - Generates idealized atomic models of canonical nucleic acid helices (A-DNA, B-DNA, A-RNA) from a base sequence.",
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

    /// Path to an optional configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a PDB coordinate file for viewing in PyMOL, Coot or similar tools.
    Pdb(PdbArgs),
    /// Generate a tab-separated dump of the cylindrical coordinates.
    Table(TableArgs),
}

/// Arguments for the `pdb` subcommand.
#[derive(Args, Debug)]
pub struct PdbArgs {
    /// The helix family to model (A-DNA, B-DNA or A-RNA).
    #[arg(short, long, required = true, value_name = "FAMILY")]
    pub family: HelixFamily,

    /// The base sequence, one letter per residue (e.g. TCCCCGGGGA).
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path for the output file. Defaults to Model_<FAMILY>_<SEQUENCE>.pdb
    /// in the configured output directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the records to standard output instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// The helix family to model (A-DNA, B-DNA or A-RNA).
    #[arg(short, long, required = true, value_name = "FAMILY")]
    pub family: HelixFamily,

    /// The base sequence, one letter per residue (e.g. TCCCCGGGGA).
    #[arg(short, long, required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path for the output file. Defaults to Model_<FAMILY>_<SEQUENCE>.tsv
    /// in the configured output directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the dump to standard output instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Override the Angstrom-to-model scale factor for the secondary unit
    /// columns.
    #[arg(long, value_name = "FLOAT")]
    pub scale: Option<f64>,

    /// Override the constant offset added to the scaled height column.
    #[arg(long, value_name = "FLOAT")]
    pub height_offset: Option<f64>,
}
