//! Command-line interface parsing for jobdeck
//!
//! Parses CLI arguments with clap and validates them into a startup
//! configuration. The cache-policy values (freshness window, monthly call
//! limit, warn threshold) changed between product revisions, so all of them
//! are flags rather than constants.

use clap::Parser;
use thiserror::Error;

use crate::data::JobQuery;
use crate::feed::FeedConfig;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// Freshness window must be at least one minute
    #[error("Invalid freshness window: {0} minutes (must be at least 1)")]
    InvalidWindow(i64),

    /// Call limit must allow at least one call
    #[error("Invalid monthly call limit: {0} (must be at least 1)")]
    InvalidLimit(u32),

    /// Warn threshold is a fraction of the limit
    #[error("Invalid warn threshold: {0} (must be between 0 and 1)")]
    InvalidThreshold(f64),

    /// Results per page must be positive
    #[error("Invalid results per page: {0} (must be at least 1)")]
    InvalidResults(u32),

    /// Country must be a two-letter code the provider understands
    #[error("Invalid country code: '{0}' (expected a two-letter code like 'in' or 'gb')")]
    InvalidCountry(String),
}

/// jobdeck - browse job listings with offline caching
#[derive(Parser, Debug)]
#[command(name = "jobdeck")]
#[command(about = "Terminal dashboard for job listings with offline caching")]
#[command(version)]
pub struct Cli {
    /// Cache freshness window in minutes (default: 1440, i.e. 24 hours)
    #[arg(long, value_name = "MINUTES")]
    pub window_mins: Option<i64>,

    /// Maximum provider calls per calendar month (default: 500)
    #[arg(long, value_name = "CALLS")]
    pub limit: Option<u32>,

    /// Fraction of the limit at which the quota warning starts (default: 0.9)
    #[arg(long, value_name = "FRACTION")]
    pub warn_threshold: Option<f64>,

    /// Two-letter country code for the job search (default: in)
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Number of job listings to request per fetch (default: 10)
    #[arg(long, value_name = "COUNT")]
    pub results: Option<u32>,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Cache-and-refresh policy knobs
    pub feed: FeedConfig,
    /// Provider query parameters
    pub query: JobQuery,
}

impl StartupConfig {
    /// Builds a validated startup configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut feed = FeedConfig::default();
        let mut query = JobQuery::default();

        if let Some(minutes) = cli.window_mins {
            if minutes < 1 {
                return Err(CliError::InvalidWindow(minutes));
            }
            feed.freshness_window = chrono::Duration::minutes(minutes);
        }

        if let Some(limit) = cli.limit {
            if limit < 1 {
                return Err(CliError::InvalidLimit(limit));
            }
            feed.monthly_call_limit = limit;
        }

        if let Some(threshold) = cli.warn_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(CliError::InvalidThreshold(threshold));
            }
            feed.warn_threshold = threshold;
        }

        if let Some(results) = cli.results {
            if results < 1 {
                return Err(CliError::InvalidResults(results));
            }
            query.results_per_page = results;
        }

        if let Some(country) = &cli.country {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CliError::InvalidCountry(country.clone()));
            }
            query.country = country.to_lowercase();
        }

        Ok(Self { feed, query })
    }
}
