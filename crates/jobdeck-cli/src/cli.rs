//! CLI argument parsing and command definitions.
//!
//! One binary drives the whole pipeline: ingesting issue bodies into
//! record files, scraping posting URLs, and compiling the JSON catalogs
//! the static site serves.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "JOBDECK_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Pipeline commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a job record from a submission issue body.
    Job {
        /// Issue body text (reads stdin when omitted).
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Create a seeker profile record from a submission issue body.
    Seeker {
        /// Issue body text (reads stdin when omitted).
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Scrape a job posting URL into a job record.
    Scrape {
        /// Posting URL (scheme optional, https assumed).
        url: String,
    },

    /// Compile record directories into JSON catalogs.
    Build {
        /// Build only the jobs catalog.
        #[arg(long)]
        jobs: bool,

        /// Build only the seekers catalog.
        #[arg(long)]
        seekers: bool,

        /// Override the catalog output directory.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print version information.
    Version,
}

// ============================================================================
// Tests
// ============================================================================
