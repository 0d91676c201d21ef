//! Per-User Command Cooldowns
//!
//! Each (user, command) pair may run once per window. A call inside the
//! window is rejected with the time left until the next allowed use.
//! Expired buckets are swept at most once per window, so the table only
//! holds users seen recently.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use super::category::Category;
use super::error::{Result, SrdError};

#[derive(Debug, Default)]
struct Buckets {
    last_use: HashMap<(u64, Category), DateTime<Utc>>,
    next_sweep: Option<DateTime<Utc>>,
}

impl Buckets {
    fn sweep(&mut self, now: DateTime<Utc>, window: Duration) {
        self.last_use.retain(|_, last| now - *last < window);
        self.next_sweep = now.checked_add_signed(window);
    }
}

/// Tracks the last accepted use of every (user, command) bucket.
#[derive(Debug)]
pub struct CooldownTracker {
    window: Duration,
    buckets: RwLock<Buckets>,
}

impl CooldownTracker {
    /// A zero window disables the cooldown. Windows too large for a
    /// [`Duration`] are clamped to the largest one.
    pub fn new(window_secs: u64) -> Self {
        let window = i64::try_from(window_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            window,
            buckets: RwLock::new(Buckets::default()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn check(&self, user_id: u64, category: Category) -> Result<()> {
        self.check_at(user_id, category, Utc::now())
    }

    /// Record a use at `now`, or fail if the bucket is still cooling down.
    pub fn check_at(&self, user_id: u64, category: Category, now: DateTime<Utc>) -> Result<()> {
        if self.window <= Duration::zero() {
            return Ok(());
        }

        let mut buckets = self.buckets.write().unwrap_or_else(|e| e.into_inner());
        match buckets.next_sweep {
            Some(at) if now < at => {}
            Some(_) => buckets.sweep(now, self.window),
            None => buckets.next_sweep = now.checked_add_signed(self.window),
        }

        let key = (user_id, category);
        if let Some(last) = buckets.last_use.get(&key) {
            let elapsed = now - *last;
            if elapsed < self.window {
                let retry_after = self
                    .window
                    .checked_sub(&elapsed)
                    .and_then(|left| left.to_std().ok())
                    .unwrap_or_default();
                return Err(SrdError::OnCooldown { retry_after });
            }
        }

        buckets.last_use.insert(key, now);
        Ok(())
    }

    /// Drop buckets whose window has passed.
    pub fn prune(&self, now: DateTime<Utc>) {
        let mut buckets = self.buckets.write().unwrap_or_else(|e| e.into_inner());
        buckets.sweep(now, self.window);
    }

    pub fn tracked(&self) -> usize {
        self.buckets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last_use
            .len()
    }
}
