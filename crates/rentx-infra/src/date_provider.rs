//! DateProvider implementations

use chrono::{DateTime, Utc};
use rentx_domain::provider::DateProvider;

/// Wall-clock provider
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Provider pinned to one instant, for deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider {
    now: DateTime<Utc>,
}

impl FixedDateProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl DateProvider for FixedDateProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
