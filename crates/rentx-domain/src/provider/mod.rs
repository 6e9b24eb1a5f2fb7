//! Time source used by the use cases

use chrono::{DateTime, Utc};

/// Source of the current instant and elapsed-time arithmetic
pub trait DateProvider: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Whole hours from `earlier` to `later`, truncated toward zero
    fn hours_between(&self, later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
        (later - earlier).num_hours()
    }
}

impl<T: DateProvider + ?Sized> DateProvider for std::sync::Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn hours_between(&self, later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
        (**self).hours_between(later, earlier)
    }
}
