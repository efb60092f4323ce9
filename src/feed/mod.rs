//! Job feed cache manager
//!
//! Owns the decision of whether to serve cached job listings, request fresh
//! ones from the provider, or fall back to stale data, while metering total
//! provider calls per calendar month. All failures here are resolved into a
//! `(jobs, warning?)` pair; nothing in this module can crash its caller.

mod budget;
mod cancel;
mod manager;
mod normalize;

pub use budget::{month_key, CallBudget};
pub use cancel::{cancel_pair, CancelSource, CancelToken};
pub use manager::{FeedConfig, FeedManager, FeedOutcome, FeedResponse, FeedWarning};
pub use normalize::normalize;
