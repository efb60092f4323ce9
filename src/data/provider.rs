//! Job-search provider abstraction
//!
//! The feed manager talks to an abstract provider so tests can script
//! success, failure, and slow responses without touching the network. The
//! raw posting shape mirrors what job boards actually return: most fields
//! optional, names chosen by the provider.

use std::future::Future;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while fetching from a job-search provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse the provider response
    #[error("Failed to parse provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No API credentials are configured
    #[error("Missing API credentials (set {0})")]
    MissingCredentials(&'static str),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {0}")]
    BadStatus(u16),
}

/// Query parameters for one page of job search results
#[derive(Debug, Clone)]
pub struct JobQuery {
    /// ISO country code segment of the search endpoint (e.g. "in")
    pub country: String,
    /// 1-based results page
    pub page: u32,
    /// Number of postings per page
    pub results_per_page: u32,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            country: "in".to_string(),
            page: 1,
            results_per_page: 10,
        }
    }
}

/// One raw posting as returned by a provider, before normalization.
///
/// Everything beyond `id` and `title` is optional; the normalization step
/// resolves absences to the documented defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RawJobPosting {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Contract time as reported ("full_time", "part_time", ...)
    pub contract_time: Option<String>,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Category label, possibly comma-separated (e.g. "IT Jobs")
    pub category_label: Option<String>,
    /// Creation timestamp of the posting
    pub created: Option<DateTime<Utc>>,
}

/// Abstract job-search provider consumed by the feed manager
pub trait JobProvider: Send + Sync {
    /// Fetches one page of raw postings for the given query.
    fn fetch_page(
        &self,
        query: &JobQuery,
    ) -> impl Future<Output = Result<Vec<RawJobPosting>, ProviderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_query_default() {
        let query = JobQuery::default();
        assert_eq!(query.country, "in");
        assert_eq!(query.page, 1);
        assert_eq!(query.results_per_page, 10);
    }

    #[test]
    fn test_missing_credentials_message_names_env_vars() {
        let err = ProviderError::MissingCredentials("ADZUNA_APP_ID / ADZUNA_API_KEY");
        assert!(err.to_string().contains("ADZUNA_APP_ID"));
    }
}
