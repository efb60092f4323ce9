//! Monthly call-budget accounting
//!
//! Provider fetch attempts are metered per calendar month. The persisted
//! record carries its own month key; a record from another month (or an
//! absent/corrupt record) reads as zero used calls, so the counter resets
//! implicitly at month rollover.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Persisted per-month counter of provider fetch attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallBudget {
    /// Calendar month this count belongs to, formatted `YYYY-MM`
    pub month: String,
    /// Fetch attempts made so far this month (success or failure)
    pub used: u32,
}

impl CallBudget {
    /// Calls used if this record belongs to `month`, zero otherwise.
    pub fn used_in(&self, month: &str) -> u32 {
        if self.month == month {
            self.used
        } else {
            0
        }
    }
}

/// Derives the `YYYY-MM` budget key from an instant.
pub fn month_key(now: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", now.year(), now.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_key_format() {
        let march = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(month_key(march), "2025-03");

        let december = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(month_key(december), "2024-12");
    }

    #[test]
    fn test_used_in_matching_month() {
        let budget = CallBudget {
            month: "2025-03".to_string(),
            used: 42,
        };
        assert_eq!(budget.used_in("2025-03"), 42);
    }

    #[test]
    fn test_used_in_other_month_reads_zero() {
        let budget = CallBudget {
            month: "2025-02".to_string(),
            used: 499,
        };
        assert_eq!(budget.used_in("2025-03"), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let budget = CallBudget {
            month: "2025-03".to_string(),
            used: 17,
        };
        let json = serde_json::to_string(&budget).expect("serialize");
        let back: CallBudget = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, budget);
    }
}
