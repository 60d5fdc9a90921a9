//! The concatenation engine.
//!
//! [`concat`] combines two renderable operands into one [`CompositeEntity`],
//! flattening composite operands into the result's segment list and joining
//! metadata through the lattice. The operand union [`Renderable`] is an
//! explicit tagged sum — every call site matches `Atomic` vs `Composite`
//! exhaustively.
//!
//! Concatenation is pure: no rendering happens here, and a malformed operand
//! fails immediately instead of producing a silent empty fallback.

use crate::compose::entity::CompositeEntity;
use crate::compose::metadata::Metadata;
use crate::error::ConstructionError;
use crate::segment::Segment;

// ---------------------------------------------------------------------------
// Renderable
// ---------------------------------------------------------------------------

/// A concatenation operand: either an atomic segment or an existing composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// An atomic renderable unit.
    Atomic(Segment),
    /// An already-built composite entity.
    Composite(CompositeEntity),
}

impl Renderable {
    /// Whether this operand can participate in concatenation.
    ///
    /// Composites are non-empty by construction, so in practice this is
    /// always true; the check exists for the external-collaborator contract.
    pub fn is_concatenatable(&self) -> bool {
        match self {
            Renderable::Atomic(_) => true,
            Renderable::Composite(entity) => !entity.is_empty(),
        }
    }

    /// Convert this operand into a single segment.
    ///
    /// Atomic operands yield their segment; composites wrap themselves via
    /// the explicit composite-as-segment conversion.
    pub fn to_segment(self) -> Segment {
        match self {
            Renderable::Atomic(segment) => segment,
            Renderable::Composite(entity) => entity.into_segment(),
        }
    }

    /// Metadata this operand contributes to a merge.
    pub fn metadata(&self) -> Metadata {
        match self {
            Renderable::Atomic(segment) => segment.metadata(),
            Renderable::Composite(entity) => entity.metadata(),
        }
    }

    /// Concatenate with another operand. See [`concat`].
    pub fn concat(self, right: impl Into<Renderable>) -> Result<CompositeEntity, ConstructionError> {
        concat(self, right.into())
    }

    /// Segments this operand contributes to a concatenation result.
    ///
    /// Composites contribute their flat segment lists (this is the one-level
    /// flatten; their own lists are flat by construction, so the result is
    /// flat at any concatenation depth). Atomics contribute one segment.
    fn into_flat_segments(self) -> Vec<Segment> {
        match self {
            Renderable::Atomic(segment) => vec![segment],
            Renderable::Composite(entity) => entity.into_segments(),
        }
    }
}

impl From<Segment> for Renderable {
    fn from(segment: Segment) -> Self {
        Renderable::Atomic(segment)
    }
}

impl From<CompositeEntity> for Renderable {
    fn from(entity: CompositeEntity) -> Self {
        Renderable::Composite(entity)
    }
}

impl Segment {
    /// Concatenate this segment with another operand, producing a composite.
    pub fn concat(self, right: impl Into<Renderable>) -> Result<CompositeEntity, ConstructionError> {
        concat(Renderable::Atomic(self), right.into())
    }
}

impl CompositeEntity {
    /// Extend this composite with another operand on the right.
    pub fn concat(self, right: impl Into<Renderable>) -> Result<CompositeEntity, ConstructionError> {
        concat(Renderable::Composite(self), right.into())
    }
}

// ---------------------------------------------------------------------------
// concat
// ---------------------------------------------------------------------------

/// Concatenate two operands into a composite entity.
///
/// The result's segment list is the left operand's flat segments followed by
/// the right operand's; its metadata is the lattice join of both operands'
/// metadata (equivalently, of all constituent segments). Associative in both
/// segment order and metadata:
/// `concat(concat(a, b), c)` ≡ `concat(a, concat(b, c))`.
pub fn concat(left: Renderable, right: Renderable) -> Result<CompositeEntity, ConstructionError> {
    let mut segments = left.into_flat_segments();
    segments.extend(right.into_flat_segments());
    CompositeEntity::from_segments(segments)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::metadata::{AccessibilityRole, SemanticStructure};
    use crate::segment::SegmentKind;

    #[test]
    fn concat_two_atomics() {
        let entity = Segment::text("Hello ").concat(Segment::text("World")).unwrap();
        assert_eq!(entity.len(), 2);
        assert_eq!(entity.metadata().role, AccessibilityRole::Text);
        assert_eq!(entity.metadata().structure, SemanticStructure::Inline);
    }

    #[test]
    fn concat_flattens_left_composite() {
        let left = Segment::text("A").concat(Segment::text("B")).unwrap();
        let entity = left.concat(Segment::text("C")).unwrap();
        assert_eq!(entity.len(), 3);
        assert!(entity
            .segments()
            .iter()
            .all(|s| s.kind() == SegmentKind::Text));
    }

    #[test]
    fn concat_flattens_right_composite() {
        let right = Segment::text("B").concat(Segment::text("C")).unwrap();
        let entity = Segment::text("A").concat(right).unwrap();
        assert_eq!(entity.len(), 3);
        let texts: Vec<_> = entity
            .segments()
            .iter()
            .map(|s| s.text_content().unwrap())
            .collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn concat_is_associative() {
        let a = Segment::text("A");
        let b = Segment::button("Go");
        let c = Segment::image("pic");

        let left_assoc = a.clone().concat(b.clone()).unwrap().concat(c.clone()).unwrap();
        let right_assoc = a.concat(b.concat(c).unwrap()).unwrap();

        assert_eq!(left_assoc.segments(), right_assoc.segments());
        assert_eq!(left_assoc.metadata(), right_assoc.metadata());
    }

    #[test]
    fn three_texts_stay_text_inline() {
        let entity = Segment::text("A")
            .concat(Segment::text("B"))
            .unwrap()
            .concat(Segment::text("C"))
            .unwrap();
        assert_eq!(entity.len(), 3);
        assert_eq!(entity.metadata().role, AccessibilityRole::Text);
        assert_eq!(entity.metadata().structure, SemanticStructure::Inline);
    }

    #[test]
    fn button_plus_text_is_group() {
        let entity = Segment::button("Go").concat(Segment::text("info")).unwrap();
        assert_eq!(entity.metadata().role, AccessibilityRole::Group);
    }

    #[test]
    fn metadata_monotonic_under_extension() {
        let base = Segment::text("a").concat(Segment::text("b")).unwrap();
        let before = base.metadata();
        let extended = base.concat(Segment::image("pic")).unwrap();
        let after = extended.metadata();
        assert!(after.role.rank() >= before.role.rank());
        assert!(after.structure.rank() >= before.structure.rank());
    }

    #[test]
    fn explicit_nesting_survives_concat() {
        let inner = Segment::text("x").concat(Segment::text("y")).unwrap();
        let nested = inner.into_segment();
        let entity = nested.concat(Segment::text("z")).unwrap();
        assert_eq!(entity.len(), 2);
        assert_eq!(entity.segments()[0].kind(), SegmentKind::Composite);
        assert_eq!(entity.metadata().role, AccessibilityRole::Composite);
    }

    #[test]
    fn operand_metadata() {
        let atomic = Renderable::from(Segment::text("t"));
        assert_eq!(atomic.metadata().role, AccessibilityRole::Text);

        let composite =
            Renderable::from(Segment::text("a").concat(Segment::image("b")).unwrap());
        assert_eq!(composite.metadata().role, AccessibilityRole::Group);
    }

    #[test]
    fn operands_are_concatenatable() {
        assert!(Renderable::from(Segment::text("t")).is_concatenatable());
        let entity = Segment::text("a").concat(Segment::text("b")).unwrap();
        assert!(Renderable::from(entity).is_concatenatable());
    }

    #[test]
    fn to_segment_on_composite_wraps() {
        let entity = Segment::text("a").concat(Segment::text("b")).unwrap();
        let segment = Renderable::from(entity).to_segment();
        assert_eq!(segment.kind(), SegmentKind::Composite);
    }

    #[test]
    fn concat_does_not_render() {
        // A thunk that would fail if invoked; concat must never call it.
        let thunk: crate::segment::RenderFn =
            std::rc::Rc::new(|_| Err(crate::error::RenderError::thunk("text", "must not render")));
        let seg = Segment::text("lazy").with_render(thunk);
        let entity = seg.concat(Segment::text("ok")).unwrap();
        assert_eq!(entity.len(), 2);
    }
}
