use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a probe result is served from the cache.
    #[serde(default = "default_retention", with = "humantime_serde")]
    pub retention: Duration,

    /// How often expired entries are swept.
    #[serde(default = "default_prune_delay", with = "humantime_serde")]
    pub prune_delay: Duration,

    /// Skip caching failed probes, which are mostly transient SSLLabs issues.
    #[serde(default)]
    pub ignore_failed: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retention: default_retention(),
            prune_delay: default_prune_delay(),
            ignore_failed: false,
        }
    }
}

fn default_retention() -> Duration {
    Duration::from_secs(60 * 60)
}

fn default_prune_delay() -> Duration {
    Duration::from_secs(60)
}
