pub mod probe_cache;

pub use probe_cache::ProbeResultCache;
