pub mod jolpica;

use async_trait::async_trait;

use crate::models::ergast::MrData;

pub use jolpica::JolpicaClient;

/// Read access to the statistics provider.
///
/// `path` is relative to the provider root, e.g.
/// `2024/drivers/verstappen/results.json?limit=100`. Every failure (network,
/// non-2xx status, unparseable body) comes back as `None` so callers can
/// apply one degradation policy.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Option<MrData>;
}
