//! Text-run optimization: fingerprinting, bounded expiring cache, fold.

pub mod cache;
pub mod fingerprint;
pub mod optimizer;

pub use cache::{CacheConfig, CacheEntry, OptimizerCache};
pub use fingerprint::{fingerprint, modifier_hash};
pub use optimizer::{OptimizationReport, OptimizeOutcome, OptimizeStats, TextRunOptimizer};
