//! Command handlers: each turns parsed CLI arguments plus config into
//! filesystem effects and prints the paths it wrote.

use std::io::Read;
use std::path::PathBuf;

use jobdeck_catalog::{build_job_catalog, build_seeker_catalog, save_catalog};
use jobdeck_core::{utc_timestamp, Error, Result};
use jobdeck_ingest::{JobSubmission, SeekerSubmission};
use jobdeck_scrape::{scrape_url, HttpFetcher};
use tracing::info;

use crate::config::JobdeckConfig;

/// Ingest a job submission issue body into a record file.
pub fn handle_job(config: &JobdeckConfig, body: Option<String>) -> Result<()> {
    let body = read_body(body)?;
    let submission = JobSubmission::from_issue_body(&body);
    let path = submission.write_to(&config.jobs_dir()?, &utc_timestamp())?;
    println!("{}", path.display());
    Ok(())
}

/// Ingest a seeker profile issue body into a record file.
pub fn handle_seeker(config: &JobdeckConfig, body: Option<String>) -> Result<()> {
    let body = read_body(body)?;
    let submission = SeekerSubmission::from_issue_body(&body);
    let path = submission.write_to(&config.seekers_dir()?, &utc_timestamp())?;
    println!("{}", path.display());
    Ok(())
}

/// Scrape a posting URL and write the result as a job record.
pub fn handle_scrape(config: &JobdeckConfig, url: &str) -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let submission = scrape_url(&fetcher, url)?;
    let path = submission.write_to(&config.jobs_dir()?, &utc_timestamp())?;
    println!("{}", path.display());
    Ok(())
}

/// Compile record directories into JSON catalogs.
///
/// `jobs`/`seekers` select a single catalog; passing neither builds both.
pub fn handle_build(
    config: &JobdeckConfig,
    jobs: bool,
    seekers: bool,
    output: Option<String>,
) -> Result<()> {
    let both = !jobs && !seekers;
    let data_dir = match output {
        Some(dir) => PathBuf::from(dir),
        None => config.data_dir()?,
    };

    if jobs || both {
        let catalog = build_job_catalog(&config.jobs_dir()?)?;
        let path = data_dir.join("jobs.json");
        save_catalog(&catalog, &path)?;
        info!(count = catalog.count, path = %path.display(), "wrote job catalog");
        println!("{} ({} jobs)", path.display(), catalog.count);
    }

    if seekers || both {
        let catalog = build_seeker_catalog(&config.seekers_dir()?)?;
        let path = data_dir.join("seekers.json");
        save_catalog(&catalog, &path)?;
        info!(count = catalog.count, path = %path.display(), "wrote seeker catalog");
        println!("{} ({} seekers)", path.display(), catalog.count);
    }

    Ok(())
}

/// Use the given body or fall back to reading stdin to EOF.
fn read_body(body: Option<String>) -> Result<String> {
    match body {
        Some(body) => Ok(body),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| Error::parse(format!("reading submission from stdin: {e}")))?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdeck_catalog::JobCatalog;

    fn test_config(base: &std::path::Path) -> JobdeckConfig {
        JobdeckConfig {
            base_path: Some(base.to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    const JOB_BODY: &str = "### Company Name\n\nAcme\n\n### Job Title\n\nEngineer\n\n\
                            ### Job Description\n\nBuild things.";

    #[test]
    fn test_handle_job_writes_record() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());

        handle_job(&config, Some(JOB_BODY.to_string())).unwrap();

        let path = dir.path().join("jobs").join("acme-engineer.md");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("title: \"Engineer\""));
    }

    #[test]
    fn test_handle_seeker_writes_record() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());
        let body = "### Name\n\nJane Doe\n\n### Skills\n\nRust, SQL";

        handle_seeker(&config, Some(body.to_string())).unwrap();

        let path = dir.path().join("seekers").join("jane-doe.md");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("name: \"Jane Doe\""));
    }

    #[test]
    fn test_handle_build_no_flags_writes_both_catalogs() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());
        handle_job(&config, Some(JOB_BODY.to_string())).unwrap();

        handle_build(&config, false, false, None).unwrap();

        let catalog: JobCatalog =
            jobdeck_catalog::persistence::load_catalog(&dir.path().join("data").join("jobs.json"))
                .unwrap();
        assert_eq!(catalog.count, 1);
        assert_eq!(catalog.jobs[0].title, "Engineer");

        assert!(dir.path().join("data").join("seekers.json").exists());
    }

    #[test]
    fn test_handle_build_jobs_flag_selects_only_jobs() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());

        handle_build(&config, true, false, None).unwrap();

        assert!(dir.path().join("data").join("jobs.json").exists());
        assert!(!dir.path().join("data").join("seekers.json").exists());
    }

    #[test]
    fn test_handle_build_seekers_flag_selects_only_seekers() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());

        handle_build(&config, false, true, None).unwrap();

        assert!(!dir.path().join("data").join("jobs.json").exists());
        assert!(dir.path().join("data").join("seekers.json").exists());
    }

    #[test]
    fn test_handle_build_output_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config(dir.path());
        let out = dir.path().join("site");

        handle_build(&config, false, false, Some(out.to_string_lossy().into_owned())).unwrap();

        assert!(out.join("jobs.json").exists());
        assert!(out.join("seekers.json").exists());
    }
}
