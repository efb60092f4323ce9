//! The cache-and-refresh policy behind the dashboard's job list
//!
//! `FeedManager::get_jobs` serves the freshest data it can without spending
//! provider calls it doesn't have to: a fresh cache entry is returned with
//! no I/O at all, an exhausted or nearly exhausted monthly budget is
//! resolved from stale cache, and only then is the provider contacted. A
//! failed fetch falls back to the last cached batch of any age. The caller
//! always gets a (possibly empty, possibly stale) job list plus an optional
//! warning; no error escapes this module.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::cache::KvStore;
use crate::data::{JobListing, JobProvider, JobQuery};
use crate::feed::budget::{month_key, CallBudget};
use crate::feed::cancel::CancelToken;
use crate::feed::normalize::normalize;

/// Store key holding the cached job batch
const JOBS_CACHE_KEY: &str = "jobs_cache";

/// Store key holding the monthly call counter
const CALL_BUDGET_KEY: &str = "call_budget";

/// Persisted snapshot of one fetched batch.
///
/// Only the fetch instant is stored; staleness is computed against the
/// configured freshness window at read time, so changing the window applies
/// to existing entries instead of being frozen into them.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    fetched_at: DateTime<Utc>,
    jobs: Vec<JobListing>,
}

/// Policy knobs for the feed manager
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Age at which a cache entry stops being served without a new fetch
    pub freshness_window: Duration,
    /// Maximum provider fetch attempts per calendar month
    pub monthly_call_limit: u32,
    /// Fraction of the limit at which the quota advisory starts (0..=1)
    pub warn_threshold: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            freshness_window: Duration::hours(24),
            monthly_call_limit: 500,
            warn_threshold: 0.9,
        }
    }
}

impl FeedConfig {
    /// Remaining-call margin at which stale cache is preferred over a new
    /// fetch. The single derivation used everywhere: with a limit of 500
    /// and a threshold of 0.9 the margin is 50 calls.
    pub fn warn_margin(&self) -> u32 {
        let warn_at = (self.monthly_call_limit as f64 * self.warn_threshold).round() as u32;
        self.monthly_call_limit.saturating_sub(warn_at)
    }
}

/// Classification of a degraded `get_jobs` result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedWarning {
    /// Fetch failed; serving the last cached batch regardless of age
    StaleFallback,
    /// Remaining monthly calls are at or below the warn margin
    LimitWarning,
    /// Monthly call limit fully spent; serving cache without fetching
    LimitExhaustedFallback,
    /// Nothing to serve: fetch impossible or failed and no cache exists
    NoData,
}

impl FeedWarning {
    /// Stable machine-readable tag for this condition.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedWarning::StaleFallback => "stale-fallback",
            FeedWarning::LimitWarning => "limit-warning",
            FeedWarning::LimitExhaustedFallback => "limit-exhausted-fallback",
            FeedWarning::NoData => "no-data",
        }
    }

    /// `NoData` is the only hard error; everything else is a soft banner.
    pub fn is_error(&self) -> bool {
        matches!(self, FeedWarning::NoData)
    }
}

impl fmt::Display for FeedWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FeedWarning::StaleFallback => "Using cached data - Please check your connection",
            FeedWarning::LimitWarning => "Monthly API call limit nearly reached",
            FeedWarning::LimitExhaustedFallback => {
                "Monthly API call limit reached - Showing cached data"
            }
            FeedWarning::NoData => "Failed to fetch jobs",
        };
        f.write_str(message)
    }
}

/// Jobs plus an optional degradation warning
#[derive(Debug, Clone, PartialEq)]
pub struct FeedResponse {
    pub jobs: Vec<JobListing>,
    pub warning: Option<FeedWarning>,
}

/// Result of one `get_jobs` call
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    /// A job list was produced (possibly empty, possibly degraded)
    Ready(FeedResponse),
    /// The caller cancelled mid-fetch; nothing was persisted or metered
    Cancelled,
}

/// Job feed cache manager
///
/// Sole owner of the persisted cache entry and call counter: no other
/// component reads or writes those keys.
pub struct FeedManager<S: KvStore, P: JobProvider> {
    store: S,
    provider: P,
    config: FeedConfig,
    query: JobQuery,
    /// Serializes concurrent callers behind a single in-flight fetch
    fetch_gate: Mutex<()>,
}

impl<S: KvStore, P: JobProvider> FeedManager<S, P> {
    pub fn new(store: S, provider: P, config: FeedConfig, query: JobQuery) -> Self {
        Self {
            store,
            provider,
            config,
            query,
            fetch_gate: Mutex::new(()),
        }
    }

    /// Returns job listings for the dashboard.
    ///
    /// A cache entry younger than the freshness window is returned without
    /// any I/O, so within one window the provider is contacted at most
    /// once. Otherwise the monthly budget decides between fetching and
    /// serving stale cache; a failed fetch falls back to the cache, and the
    /// sole hard-error case (`NoData`) is a failed or impossible fetch with
    /// no cache at all.
    ///
    /// Concurrent calls are serialized: the second caller waits for the
    /// first fetch and is then satisfied from the fresh cache instead of
    /// spending another call.
    pub async fn get_jobs(&self, cancel: &CancelToken) -> FeedOutcome {
        let _gate = self.fetch_gate.lock().await;

        let now = Utc::now();
        let cached = self.read_cache();

        if let Some(entry) = &cached {
            if now - entry.fetched_at < self.config.freshness_window {
                return FeedOutcome::Ready(FeedResponse {
                    jobs: entry.jobs.clone(),
                    warning: None,
                });
            }
        }

        let month = month_key(now);
        let used = self.budget_used(&month);
        let remaining = self.config.monthly_call_limit.saturating_sub(used);

        if remaining == 0 {
            return FeedOutcome::Ready(match &cached {
                Some(entry) => FeedResponse {
                    jobs: entry.jobs.clone(),
                    warning: Some(FeedWarning::LimitExhaustedFallback),
                },
                None => FeedResponse {
                    jobs: Vec::new(),
                    warning: Some(FeedWarning::NoData),
                },
            });
        }

        if remaining <= self.config.warn_margin() {
            // Preserving the last calls of the month beats freshness; only
            // an empty cache justifies spending one here.
            if let Some(entry) = &cached {
                return FeedOutcome::Ready(FeedResponse {
                    jobs: entry.jobs.clone(),
                    warning: Some(FeedWarning::LimitWarning),
                });
            }
        }

        let mut cancel = cancel.clone();
        let fetched = tokio::select! {
            result = self.provider.fetch_page(&self.query) => result,
            _ = cancel.cancelled() => return FeedOutcome::Cancelled,
        };

        // The attempt is metered whether or not the response was usable
        self.record_attempt(&month, used);

        FeedOutcome::Ready(match fetched {
            Ok(batch) => {
                let jobs = normalize(&batch);
                self.write_cache(now, &jobs);
                let warning = (remaining - 1 <= self.config.warn_margin())
                    .then_some(FeedWarning::LimitWarning);
                FeedResponse { jobs, warning }
            }
            Err(_) => match cached {
                Some(entry) => FeedResponse {
                    jobs: entry.jobs,
                    warning: Some(FeedWarning::StaleFallback),
                },
                None => FeedResponse {
                    jobs: Vec::new(),
                    warning: Some(FeedWarning::NoData),
                },
            },
        })
    }

    /// Best-effort teardown housekeeping: drops the cache entry if it has
    /// outlived the freshness window. Never blocks or fails the caller;
    /// `get_jobs` treats stale entries correctly either way.
    pub fn invalidate_if_expired(&self) {
        if let Some(entry) = self.read_cache() {
            if Utc::now() - entry.fetched_at >= self.config.freshness_window {
                let _ = self.store.remove(JOBS_CACHE_KEY);
            }
        }
    }

    /// Reads the cache entry, treating missing or corrupt blobs as a miss.
    fn read_cache(&self) -> Option<CacheEntry> {
        let raw = self.store.get(JOBS_CACHE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    fn write_cache(&self, fetched_at: DateTime<Utc>, jobs: &[JobListing]) {
        let entry = CacheEntry {
            fetched_at,
            jobs: jobs.to_vec(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&entry) {
            let _ = self.store.set(JOBS_CACHE_KEY, &json);
        }
    }

    /// Calls used in `month`, treating missing/corrupt/other-month records
    /// as zero.
    fn budget_used(&self, month: &str) -> u32 {
        self.store
            .get(CALL_BUDGET_KEY)
            .and_then(|raw| serde_json::from_str::<CallBudget>(&raw).ok())
            .map(|budget| budget.used_in(month))
            .unwrap_or(0)
    }

    fn record_attempt(&self, month: &str, used_before: u32) {
        let budget = CallBudget {
            month: month.to_string(),
            used: used_before.saturating_add(1),
        };
        if let Ok(json) = serde_json::to_string(&budget) {
            let _ = self.store.set(CALL_BUDGET_KEY, &json);
        }
    }
}
