//! The text-run optimizer.
//!
//! Rewrites a segment sequence into an equal-or-shorter one by merging
//! eligible adjacent text segments in a single left-to-right fold, O(n) in
//! segment count. Results are cached under a content fingerprint; fingerprint
//! degradation silently falls back to the uncached path and never blocks
//! optimization.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::optimize::cache::{CacheConfig, OptimizerCache};
use crate::optimize::fingerprint::fingerprint;
use crate::segment::{Segment, SegmentKind};

// ---------------------------------------------------------------------------
// OptimizeStats
// ---------------------------------------------------------------------------

/// Statistics for one optimization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeStats {
    /// Segment count before optimization.
    pub original_count: usize,
    /// Segment count after optimization.
    pub optimized_count: usize,
    /// Percentage of segments eliminated (0–100).
    pub reduction_percent: f64,
    /// Number of merges performed.
    pub merged_count: usize,
    /// Wall-clock fold time in milliseconds.
    pub processing_time_ms: f64,
}

// ---------------------------------------------------------------------------
// OptimizeOutcome
// ---------------------------------------------------------------------------

/// Result of an optimization request: the rewritten sequence, its stats, and
/// whether it was served from cache.
#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    /// The optimized segment sequence.
    pub segments: Vec<Segment>,
    /// Statistics from the pass that produced the sequence.
    pub stats: OptimizeStats,
    /// Whether this outcome came from the cache.
    pub cached: bool,
}

// ---------------------------------------------------------------------------
// OptimizationReport
// ---------------------------------------------------------------------------

/// Diagnostic analysis of a sequence, computed without touching the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    /// Total segment count.
    pub total: usize,
    /// Segment counts grouped by kind.
    pub counts_by_kind: BTreeMap<SegmentKind, usize>,
    /// Adjacent pairs that would merge.
    pub mergeable_pairs: usize,
    /// Estimated segment count after optimization.
    pub estimated_count: usize,
    /// Estimated reduction percentage (0–100).
    pub estimated_reduction_percent: f64,
}

// ---------------------------------------------------------------------------
// TextRunOptimizer
// ---------------------------------------------------------------------------

/// Merges adjacent compatible text segments, backed by an injectable cache.
#[derive(Debug, Default)]
pub struct TextRunOptimizer {
    cache: OptimizerCache,
}

impl TextRunOptimizer {
    /// Create an optimizer with the default cache configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer with an explicit cache configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            cache: OptimizerCache::new(config),
        }
    }

    /// Optimize a segment sequence.
    ///
    /// On a cache hit the stored sequence and stats are returned unchanged.
    /// On a miss, a single fold merges eligible adjacent text runs and the
    /// result is inserted under the sequence fingerprint — unless
    /// fingerprinting degraded, in which case caching is skipped.
    pub fn optimize(&mut self, segments: &[Segment]) -> OptimizeOutcome {
        let key = fingerprint(segments);

        if let Some(key) = &key {
            if let Some(entry) = self.cache.get(key) {
                tracing::trace!(fingerprint = %key, "optimizer cache hit");
                return OptimizeOutcome {
                    segments: entry.segments.clone(),
                    stats: entry.stats.clone(),
                    cached: true,
                };
            }
            tracing::trace!(fingerprint = %key, "optimizer cache miss");
        }

        let started = Instant::now();
        let optimized = fold_runs(segments);
        let merged_count = segments.len() - optimized.len();
        let stats = OptimizeStats {
            original_count: segments.len(),
            optimized_count: optimized.len(),
            reduction_percent: reduction_percent(segments.len(), merged_count),
            merged_count,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        if let Some(key) = key {
            self.cache.insert(key, optimized.clone(), stats.clone());
        }

        OptimizeOutcome {
            segments: optimized,
            stats,
            cached: false,
        }
    }

    /// Cheap pre-check: whether at least one adjacent text/text pair exists.
    ///
    /// Intentionally ignores modifiers — this answers "is a full pass worth
    /// running", not "will anything merge".
    pub fn should_optimize(segments: &[Segment]) -> bool {
        segments.windows(2).any(|pair| {
            pair[0].kind() == SegmentKind::Text && pair[1].kind() == SegmentKind::Text
        })
    }

    /// Analyze a sequence without mutating cache state.
    pub fn analyze(&self, segments: &[Segment]) -> OptimizationReport {
        let mut counts_by_kind = BTreeMap::new();
        for segment in segments {
            *counts_by_kind.entry(segment.kind()).or_insert(0) += 1;
        }
        let mergeable_pairs = segments
            .windows(2)
            .filter(|pair| pair[0].can_merge_text(&pair[1]))
            .count();
        let estimated_count = segments.len() - mergeable_pairs;
        OptimizationReport {
            total: segments.len(),
            counts_by_kind,
            mergeable_pairs,
            estimated_count,
            estimated_reduction_percent: reduction_percent(segments.len(), mergeable_pairs),
        }
    }

    /// Number of cached sequences.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached sequences.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The underlying cache.
    pub fn cache(&self) -> &OptimizerCache {
        &self.cache
    }
}

/// Single left-to-right fold: merge each incoming segment into the last
/// accepted entry when eligible, otherwise append it unchanged.
fn fold_runs(segments: &[Segment]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        if let Some(merged) = out.last().and_then(|last| last.merge_text(segment)) {
            let last = out.len() - 1;
            out[last] = merged;
        } else {
            out.push(segment.clone());
        }
    }
    out
}

fn reduction_percent(original: usize, removed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        removed as f64 / original as f64 * 100.0
    }
}

// ===========================================================================
// Tests
// ===========================================================================
