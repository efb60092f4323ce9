//! Core data models for jobdeck
//!
//! Contains the normalized `JobListing` shape served to the UI, plus the
//! provider abstraction used to fetch raw postings from a job-search API.

pub mod adzuna;
pub mod provider;

pub use adzuna::AdzunaClient;
pub use provider::{JobProvider, JobQuery, ProviderError, RawJobPosting};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized representation of one job opening.
///
/// Produced by the feed manager's normalization step from a provider's raw
/// posting; provider field absence is resolved to the documented defaults
/// before a listing reaches this type, so consumers never see gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    /// Provider-assigned opaque identifier, unique within a cached batch
    pub id: String,
    /// Job title
    pub title: String,
    /// Employer display name
    pub company: String,
    /// Location display name
    pub location: String,
    /// Employment type ("Full-time" when the provider omits it)
    pub employment_type: String,
    /// Free-text description
    pub description: String,
    /// Human-readable salary range ("Not specified" when unknown)
    pub salary_range: String,
    /// Skills derived from the provider's category label, split on commas
    pub skills: Vec<String>,
    /// Provider creation timestamp truncated to the calendar day
    pub posted_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_listing_serde_roundtrip() {
        let listing = JobListing {
            id: "4321".to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme Corp".to_string(),
            location: "Bengaluru, Karnataka".to_string(),
            employment_type: "Full-time".to_string(),
            description: "Build services.".to_string(),
            salary_range: "₹12,00,000 - ₹18,00,000".to_string(),
            skills: vec!["IT Jobs".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
        };

        let json = serde_json::to_string(&listing).expect("serialize");
        let back: JobListing = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, listing);
    }
}
