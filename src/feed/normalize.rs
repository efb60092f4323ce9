//! Normalization of raw provider postings into `JobListing`
//!
//! A pure transform: the same raw batch always yields the same listings.
//! Missing provider fields degrade to documented defaults instead of
//! failing the batch.

use chrono::Utc;

use crate::data::{JobListing, RawJobPosting};

/// Employment type used when the provider omits `contract_time`
const DEFAULT_EMPLOYMENT_TYPE: &str = "Full-time";

/// Salary string used when the provider gives no bounds
const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// Normalizes a raw provider batch, preserving provider order.
pub fn normalize(batch: &[RawJobPosting]) -> Vec<JobListing> {
    batch.iter().map(normalize_one).collect()
}

fn normalize_one(raw: &RawJobPosting) -> JobListing {
    JobListing {
        id: raw.id.clone(),
        title: raw.title.clone(),
        company: raw.company.clone().unwrap_or_else(|| "Unknown".to_string()),
        location: raw
            .location
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
        employment_type: raw
            .contract_time
            .clone()
            .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string()),
        description: raw.description.clone().unwrap_or_default(),
        salary_range: format_salary(raw.salary_min, raw.salary_max),
        skills: split_skills(raw.category_label.as_deref()),
        posted_date: raw
            .created
            .map(|created| created.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive()),
    }
}

/// Renders provider salary bounds as a human-readable rupee range.
fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("₹{} - ₹{}", format_inr(min), format_inr(max)),
        (Some(only), None) | (None, Some(only)) => format!("₹{}", format_inr(only)),
        (None, None) => SALARY_NOT_SPECIFIED.to_string(),
    }
}

/// Formats a rounded amount with en-IN digit grouping (last three digits,
/// then groups of two): 1200000 -> "12,00,000".
fn format_inr(value: f64) -> String {
    let rounded = value.round().abs() as u64;
    let digits = rounded.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Splits a category label on commas into trimmed, non-empty skill names.
fn split_skills(label: Option<&str>) -> Vec<String> {
    label
        .map(|label| {
            label
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
