//! The jobdeck CLI application.

use jobdeck_core::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::JobdeckConfig;
use crate::handlers;

// ============================================================================
// JobdeckCli
// ============================================================================

/// CLI application wrapping config loading, logging, and dispatch.
pub struct JobdeckCli {
    name: String,
    config: JobdeckConfig,
    version: String,
}

impl JobdeckCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = JobdeckConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: JobdeckConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded config.
    pub fn config(&self) -> &JobdeckConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Job { body }) => handlers::handle_job(&self.config, body),
            Some(Command::Seeker { body }) => handlers::handle_seeker(&self.config, body),
            Some(Command::Scrape { url }) => handlers::handle_scrape(&self.config, &url),
            Some(Command::Build {
                jobs,
                seekers,
                output,
            }) => handlers::handle_build(&self.config, jobs, seekers, output),
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn test_config(base: &std::path::Path) -> JobdeckConfig {
        JobdeckConfig {
            base_path: Some(base.to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_jobdeck_cli_new() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        assert_eq!(cli.name, "jobdeck");
        assert_eq!(cli.config().project_name, "jobdeck");
    }

    #[test]
    fn test_jobdeck_cli_with_version() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path())).with_version("1.2.3");
        assert_eq!(cli.version, "1.2.3");
    }

    #[test]
    fn test_run_version_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(cli.run(args).is_ok());
    }

    #[test]
    fn test_run_no_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        let args = CliArgs::parse_from(["test"]);
        assert!(cli.run(args).is_ok());
    }

    #[test]
    fn test_run_job_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        let args = CliArgs::parse_from([
            "test",
            "job",
            "--body",
            "### Company Name\n\nAcme\n\n### Job Title\n\nEngineer",
        ]);
        assert!(cli.run(args).is_ok());
        assert!(dir.path().join("jobs").join("acme-engineer.md").exists());
    }

    #[test]
    fn test_run_build_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        let args = CliArgs::parse_from(["test", "build"]);
        assert!(cli.run(args).is_ok());
        assert!(dir.path().join("data").join("jobs.json").exists());
    }

    #[test]
    fn test_from_args_default() {
        let args = CliArgs::parse_from(["test"]);
        let cli = JobdeckCli::from_args("jobdeck", &args).unwrap();
        assert_eq!(cli.config().project_name, "jobdeck");
    }

    #[test]
    fn test_from_args_with_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n").unwrap();

        let args = CliArgs::parse_from(["test", "--config", path.to_str().unwrap()]);
        let cli = JobdeckCli::from_args("jobdeck", &args).unwrap();
        assert_eq!(cli.config().project_name, "from-file");
    }

    #[test]
    fn test_init_logging_does_not_panic() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = JobdeckCli::new("jobdeck", test_config(dir.path()));
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }
}
