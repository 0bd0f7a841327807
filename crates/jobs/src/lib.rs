pub mod cache_prune;
pub mod runner;

pub use cache_prune::CachePruneJob;
pub use runner::JobRunner;
