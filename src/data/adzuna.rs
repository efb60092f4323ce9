//! Adzuna job-search API client
//!
//! Fetches job postings from the Adzuna REST API
//! (`https://api.adzuna.com/v1/api/jobs/{country}/search/{page}`) and maps
//! the response into provider-neutral raw postings.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::provider::{JobProvider, JobQuery, ProviderError, RawJobPosting};

/// Base URL for the Adzuna jobs API
const ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";

/// Environment variables holding the Adzuna application credentials
const APP_ID_VAR: &str = "ADZUNA_APP_ID";
const API_KEY_VAR: &str = "ADZUNA_API_KEY";

/// Client for the Adzuna job-search API
///
/// Credentials are optional at construction: a client without credentials
/// fails each fetch with `ProviderError::MissingCredentials`, which flows
/// into the feed manager's cached-fallback path instead of aborting startup.
#[derive(Debug, Clone)]
pub struct AdzunaClient {
    client: Client,
    credentials: Option<(String, String)>,
    /// Base URL override for tests
    base_url: String,
}

impl AdzunaClient {
    /// Creates a client with explicit credentials.
    #[allow(dead_code)]
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credentials: Some((app_id.into(), api_key.into())),
            base_url: ADZUNA_BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `ADZUNA_APP_ID` / `ADZUNA_API_KEY`
    /// environment variables, leaving credentials unset if either is absent.
    pub fn from_env() -> Self {
        let credentials = match (std::env::var(APP_ID_VAR), std::env::var(API_KEY_VAR)) {
            (Ok(id), Ok(key)) if !id.is_empty() && !key.is_empty() => Some((id, key)),
            _ => None,
        };
        Self {
            client: Client::new(),
            credentials,
            base_url: ADZUNA_BASE_URL.to_string(),
        }
    }

    fn search_url(&self, query: &JobQuery, app_id: &str, api_key: &str) -> String {
        format!(
            "{}/{}/search/{}?app_id={}&app_key={}&results_per_page={}&content-type=application/json",
            self.base_url, query.country, query.page, app_id, api_key, query.results_per_page
        )
    }
}

impl JobProvider for AdzunaClient {
    async fn fetch_page(&self, query: &JobQuery) -> Result<Vec<RawJobPosting>, ProviderError> {
        let (app_id, api_key) = self
            .credentials
            .as_ref()
            .ok_or(ProviderError::MissingCredentials(
                "ADZUNA_APP_ID / ADZUNA_API_KEY",
            ))?;

        let url = self.search_url(query, app_id, api_key);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let api_response: SearchResponse = serde_json::from_str(&text)?;

        Ok(api_response
            .results
            .into_iter()
            .map(map_result)
            .collect())
    }
}

/// Maps one Adzuna result into the provider-neutral raw posting shape
fn map_result(result: SearchResult) -> RawJobPosting {
    RawJobPosting {
        id: result.id,
        title: result.title,
        company: result.company.and_then(|c| c.display_name),
        location: result.location.and_then(|l| l.display_name),
        contract_time: result.contract_time,
        description: result.description,
        salary_min: result.salary_min,
        salary_max: result.salary_max,
        category_label: result.category.and_then(|c| c.label),
        created: result.created,
    }
}

/// Adzuna search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

/// A single job result from the Adzuna API
#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    title: String,
    #[serde(default)]
    company: Option<CompanyRef>,
    #[serde(default)]
    location: Option<LocationRef>,
    #[serde(default)]
    contract_time: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    salary_min: Option<f64>,
    #[serde(default)]
    salary_max: Option<f64>,
    #[serde(default)]
    category: Option<CategoryRef>,
    #[serde(default)]
    created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct CompanyRef {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocationRef {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryRef {
    #[serde(default)]
    label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample Adzuna search response trimmed to the fields we read
    const VALID_RESPONSE: &str = r#"{
        "count": 21273,
        "mean": 1138636.27,
        "results": [
            {
                "id": "4873690011",
                "title": "Senior Software Engineer",
                "company": { "display_name": "Acme Systems" },
                "location": { "display_name": "Bengaluru, Karnataka", "area": ["India", "Karnataka", "Bengaluru"] },
                "contract_time": "full_time",
                "description": "We are hiring a senior engineer to build data pipelines.",
                "salary_min": 1200000,
                "salary_max": 1800000,
                "category": { "tag": "it-jobs", "label": "IT Jobs" },
                "created": "2024-11-03T08:45:12Z",
                "redirect_url": "https://www.adzuna.in/details/4873690011"
            },
            {
                "id": "4873690012",
                "title": "Campus Recruiter",
                "location": { "display_name": "Pune, Maharashtra" },
                "category": { "tag": "hr-jobs", "label": "HR & Recruitment Jobs" },
                "created": "2024-11-01T17:02:44Z"
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let response: SearchResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        assert_eq!(response.results.len(), 2);

        let first = map_result(response.results.into_iter().next().unwrap());
        assert_eq!(first.id, "4873690011");
        assert_eq!(first.title, "Senior Software Engineer");
        assert_eq!(first.company.as_deref(), Some("Acme Systems"));
        assert_eq!(first.location.as_deref(), Some("Bengaluru, Karnataka"));
        assert_eq!(first.contract_time.as_deref(), Some("full_time"));
        assert_eq!(first.salary_min, Some(1200000.0));
        assert_eq!(first.salary_max, Some(1800000.0));
        assert_eq!(first.category_label.as_deref(), Some("IT Jobs"));
        assert!(first.created.is_some());
    }

    #[test]
    fn test_map_result_with_missing_optional_fields() {
        let response: SearchResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        let second = map_result(response.results.into_iter().nth(1).unwrap());
        assert_eq!(second.id, "4873690012");
        assert!(second.company.is_none());
        assert!(second.contract_time.is_none());
        assert!(second.salary_min.is_none());
        assert!(second.salary_max.is_none());
        assert!(second.description.is_none());
    }

    #[test]
    fn test_parse_malformed_json_is_error() {
        let result: Result<SearchResponse, _> = serde_json::from_str("{ invalid json }");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"count": 0, "results": []}"#).expect("Failed to parse");
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_search_url_contains_query_parameters() {
        let client = AdzunaClient::new("my-id", "my-key");
        let query = JobQuery {
            country: "in".to_string(),
            page: 2,
            results_per_page: 25,
        };

        let url = client.search_url(&query, "my-id", "my-key");
        assert!(url.starts_with("https://api.adzuna.com/v1/api/jobs/in/search/2?"));
        assert!(url.contains("app_id=my-id"));
        assert!(url.contains("app_key=my-key"));
        assert!(url.contains("results_per_page=25"));
    }

    #[tokio::test]
    async fn test_fetch_without_credentials_fails_fast() {
        let client = AdzunaClient {
            client: Client::new(),
            credentials: None,
            base_url: ADZUNA_BASE_URL.to_string(),
        };

        let result = client.fetch_page(&JobQuery::default()).await;
        assert!(matches!(result, Err(ProviderError::MissingCredentials(_))));
    }
}
