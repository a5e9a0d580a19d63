//! Client onboarding - command-line entry point
//!
//! Reads a draft onboarding form as JSON (from the file given as the first
//! argument, or from stdin), runs the submit pipeline once and prints the
//! outcome.
//!
//! An optional second argument is a page query string such as
//! `?service=UI%2FUX,Branding` used to pre-select services.

use anyhow::{bail, Context, Result};
use client_onboarding::{
    apply_service_prefill, AsyncOnboardClient, AsyncOnboardClientImpl, Config, DraftInput,
    Metrics, OnboardClient, SubmissionController, SubmissionStatus, SubmitAttempt,
};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the outcome)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &config.onboard_url {
        Some(url) => info!("Submitting to: {}", url),
        None => info!("No ONBOARD_URL configured"),
    }

    let mut args = std::env::args().skip(1);
    let mut draft = read_draft(args.next().as_deref())?;
    if let Some(query) = args.next() {
        apply_service_prefill(&mut draft, &query);
    }

    let metrics = Metrics::new();
    let client = OnboardClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncOnboardClientImpl::new(client)) as Arc<dyn AsyncOnboardClient>;
    let controller =
        SubmissionController::new(client, config.onboard_url.clone()).with_metrics(metrics);

    let status = match controller.submit(&draft).await {
        SubmitAttempt::Completed(status) => status,
        SubmitAttempt::IgnoredWhileSubmitting => bail!("A submission is already in progress"),
    };

    info!("Metrics: {:?}", controller.metrics().summary());
    report(&status)
}

/// Read the draft JSON from a file path, or stdin when the path is absent or `-`.
fn read_draft(path: Option<&str>) -> Result<DraftInput> {
    let json = match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {}", path))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read draft from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json).context("Draft is not a valid onboarding form")
}

fn report(status: &SubmissionStatus) -> Result<()> {
    match status {
        SubmissionStatus::Success(submission) => {
            if let Some(banner) = status.banner() {
                println!("{}", banner);
            }
            println!("{}", submission.to_pretty_json()?);
            Ok(())
        }
        SubmissionStatus::ValidationError(errors) => {
            for e in errors {
                println!("{}: {}", e.field, e.message);
            }
            bail!("Validation failed")
        }
        other => {
            let banner = other.banner().unwrap_or_else(|| "Submission did not finish".to_string());
            error!("{}", banner);
            println!("Error: {}", banner);
            bail!(banner)
        }
    }
}
