use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Term,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "counsel",
    bin_name = "counsel",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Admin console for campus counseling records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, counselors or content
    #[command(alias = "ls")]
    List {
        /// students, counselors or content (defaults to the configured collection)
        collection: Option<String>,

        /// Only records with this status (Active, Inactive, Published, Draft, Archived)
        #[arg(long)]
        status: Option<String>,

        /// Only records in this college or content category
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text search
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Term)]
        output: OutputFormat,
    },

    /// Show dashboard statistics for a college
    Dashboard {
        /// College code or full name (defaults to the first college)
        #[arg(long)]
        college: Option<String>,

        /// weekly or monthly
        #[arg(long, default_value = "weekly")]
        range: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Term)]
        output: OutputFormat,
    },

    /// Drive the management view from commands on stdin
    Session,

    /// Show the resolved configuration
    Config {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Term)]
        output: OutputFormat,
    },
}
