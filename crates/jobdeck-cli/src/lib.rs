//! Command-line interface for the jobdeck content pipeline.
//!
//! Wires the ingest, scrape, and catalog crates behind one binary:
//! `jobdeck job`, `jobdeck seeker`, `jobdeck scrape`, `jobdeck build`.

pub mod app;
pub mod cli;
pub mod config;
pub mod handlers;

pub use app::JobdeckCli;
pub use cli::{CliArgs, Command};
pub use config::JobdeckConfig;
