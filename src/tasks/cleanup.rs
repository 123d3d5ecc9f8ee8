//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.
//! Reads already self-clean lazily, so this only bounds growth from
//! entries that are set and never read again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps. The returned JoinHandle is used to abort the task during
/// graceful shutdown.
pub fn spawn_cleanup_task<T>(
    cache: SharedCache<T>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
