//! Composite entities: flat segment lists with lattice-merged metadata.
//!
//! A [`CompositeEntity`] owns an ordered, non-empty list of segments. The
//! flattening invariant holds by construction: the segment list can never
//! contain a bare composite — nesting only enters through the explicit
//! [`CompositeEntity::into_segment`] conversion, which wraps the whole entity
//! as a single `Nested` segment.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::compose::metadata::Metadata;
use crate::error::ConstructionError;
use crate::segment::Segment;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Process-unique identifier for a composite entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        EntityId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CompositeEntity
// ---------------------------------------------------------------------------

/// A flattened, ordered segment list plus merged accessibility metadata.
///
/// Immutable after construction. Metadata is always exactly the lattice join
/// of the constituent segments' contributions; it is recomputed whenever an
/// entity is built, so it can never drift from the segment list.
///
/// Structural equality (`PartialEq`) compares segments, metadata, and the
/// raw-content flag — not the entity id.
#[derive(Debug, Clone)]
pub struct CompositeEntity {
    id: EntityId,
    segments: Vec<Segment>,
    metadata: Metadata,
    raw_content: bool,
}

impl CompositeEntity {
    /// Build an entity from an ordered segment list.
    ///
    /// Fails with [`ConstructionError::EmptyComposite`] on an empty list —
    /// there is no silent empty-segment fallback.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, ConstructionError> {
        let Some(first) = segments.first() else {
            return Err(ConstructionError::EmptyComposite);
        };
        let metadata = segments
            .iter()
            .skip(1)
            .fold(first.metadata(), |acc, segment| acc.merge(segment.metadata()));
        Ok(Self {
            id: EntityId::next(),
            segments,
            metadata,
            raw_content: false,
        })
    }

    /// Entity id.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The flat segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the entity, yielding its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Merged accessibility metadata.
    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// Number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Present for API completeness; construction guarantees `false`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the trusted-markup directive is set on this entity.
    pub fn raw_content(&self) -> bool {
        self.raw_content
    }

    /// Attach the trusted-markup directive (builder).
    ///
    /// The renderer applies it per matching text segment, never to the
    /// assembled container — raw-content semantics are per-segment context.
    pub fn with_raw_content(mut self) -> Self {
        self.raw_content = true;
        self
    }

    /// Convert this entity into a single segment for further composition.
    ///
    /// The resulting segment contributes the `Composite` role and this
    /// entity's structure to any composite it joins.
    pub fn into_segment(self) -> Segment {
        Segment::nested(self)
    }
}

impl PartialEq for CompositeEntity {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
            && self.metadata == other.metadata
            && self.raw_content == other.raw_content
    }
}

// ===========================================================================
// Tests
// ===========================================================================
