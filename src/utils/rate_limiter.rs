use std::sync::Arc;
use tokio::sync::{AcquireError, Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

/// Caps the number of in-flight provider calls and spaces them out.
/// Shared by every request through `AppState`.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, min_delay_ms: u64) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            min_delay: Duration::from_millis(min_delay_ms),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits for a free slot. The slot is released when the guard drops.
    pub async fn acquire(&self) -> Result<RateLimitGuard, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;
        if self.min_delay.is_zero() {
            return Ok(RateLimitGuard { _permit: permit });
        }

        // Held across the sleep so spaced calls go out one at a time.
        let mut last_request = self.last_request.lock().await;
        let wait = last_request
            .and_then(|last| self.min_delay.checked_sub(last.elapsed()))
            .filter(|wait| !wait.is_zero());
        if let Some(wait) = wait {
            debug!(?wait, "spacing provider call");
            sleep(wait).await;
        }
        *last_request = Some(Instant::now());

        Ok(RateLimitGuard { _permit: permit })
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

pub struct RateLimitGuard {
    _permit: OwnedSemaphorePermit,
}
