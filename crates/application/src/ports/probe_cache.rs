use crate::services::ProbeSnapshot;
use ssllabs_exporter_domain::Target;
use std::sync::Arc;

/// Per-target store of finished probe snapshots.
///
/// Implementations must not hold their lock across an await point; both
/// operations are synchronous.
pub trait ProbeCache: Send + Sync {
    /// Stored snapshot for `target`, without touching its expiry.
    fn get(&self, target: &Target) -> Option<Arc<ProbeSnapshot>>;

    /// Store `snapshot`, replacing any previous entry for `target`.
    fn put(&self, target: &Target, snapshot: Arc<ProbeSnapshot>);
}
