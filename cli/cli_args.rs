use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nbtools",
    author,
    version,
    about = "CLI tools for local development workflow.",
    long_about = "nbtools bundles small developer-workflow utilities. The pkg command \naggregates a source tree into a single text artifact: text files are \nconcatenated with per-file markers, binary assets are copied into a \nsibling static/ directory.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        visible_alias = "p",
        about = "Concatenate files while respecting ignore patterns."
    )]
    Pkg(PkgArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PkgArgs {
    #[arg(
        short = 'd',
        long,
        value_name = "PATH",
        default_value = "notebooklm",
        help = "Destination path for the concatenated output."
    )]
    pub dest: PathBuf,

    #[arg(
        short = 's',
        long,
        value_name = "PATH",
        help = "Source directory to process (default: current dir)."
    )]
    pub source: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FORMAT",
        value_parser = ["text", "json"],
        default_value = "text",
        help = "Output format for the run report."
    )]
    pub output: String,
}
