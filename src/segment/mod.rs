//! Segments: atomic renderable units with ordered style modifiers.
//!
//! A [`Segment`] is the leaf currency of the composition engine. It pairs a
//! tagged content payload with an ordered modifier list and an optional render
//! thunk. Segments are immutable once created — merging in the optimizer
//! always produces a new segment. The `Nested` content variant is the
//! explicit "composite-as-segment" conversion, which is how a finished
//! composite participates in further composition as a single unit.

pub mod kind;
pub mod modifier;

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::compose::entity::CompositeEntity;
use crate::compose::metadata::{AccessibilityRole, Metadata};
use crate::error::RenderError;
use crate::render::node::Node;

pub use kind::{KindCapabilities, SegmentKind};
pub use modifier::Modifier;

// ---------------------------------------------------------------------------
// SegmentId
// ---------------------------------------------------------------------------

/// Process-unique identifier for a segment.
///
/// Ids identify provenance, not content: a merged segment keeps the id of the
/// first segment in the pair, and structural equality ignores ids entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(u64);

impl SegmentId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SegmentId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SegmentContent
// ---------------------------------------------------------------------------

/// Tagged payload of a segment.
///
/// The `Nested` variant is a recursive sum: it holds a whole composite entity
/// converted back into a segment. Call sites match exhaustively — there is no
/// shape-based dispatch anywhere in the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Visible text.
    Text(String),
    /// An image with optional alt text.
    Image {
        /// Accessible alternative text.
        alt: Option<String>,
    },
    /// An interactive control with an optional accessible name.
    Button {
        /// Accessible name.
        label: Option<String>,
    },
    /// A navigational link with an optional accessible name and target.
    Link {
        /// Accessible name.
        label: Option<String>,
        /// Link target.
        href: Option<String>,
    },
    /// A composite entity embedded as a single segment.
    Nested(Box<CompositeEntity>),
}

impl SegmentContent {
    /// The kind discriminator for this payload.
    pub fn kind(&self) -> SegmentKind {
        match self {
            SegmentContent::Text(_) => SegmentKind::Text,
            SegmentContent::Image { .. } => SegmentKind::Image,
            SegmentContent::Button { .. } => SegmentKind::Button,
            SegmentContent::Link { .. } => SegmentKind::Link,
            SegmentContent::Nested(_) => SegmentKind::Composite,
        }
    }
}

// ---------------------------------------------------------------------------
// Render thunk
// ---------------------------------------------------------------------------

/// Per-segment render override.
///
/// When present, the renderer invokes this instead of its default per-kind
/// thunk. Errors propagate unmodified to the render caller.
pub type RenderFn = Rc<dyn Fn(&Segment) -> Result<Node, RenderError>>;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// An atomic renderable unit: content, ordered modifiers, optional thunk.
///
/// Segments are immutable after construction and cheaply cloneable (the thunk
/// is `Rc`-shared). Structural equality compares content and modifiers only —
/// never the id or the thunk — which is the notion of equality the
/// associativity and cache-correctness guarantees are stated in.
#[derive(Clone)]
pub struct Segment {
    id: SegmentId,
    content: SegmentContent,
    modifiers: Vec<Modifier>,
    render: Option<RenderFn>,
}

impl Segment {
    /// Create a segment from a raw content payload.
    pub fn new(content: SegmentContent) -> Self {
        Self {
            id: SegmentId::next(),
            content,
            modifiers: Vec::new(),
            render: None,
        }
    }

    /// A plain text segment.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SegmentContent::Text(content.into()))
    }

    /// An image segment with alt text.
    pub fn image(alt: impl Into<String>) -> Self {
        Self::new(SegmentContent::Image {
            alt: Some(alt.into()),
        })
    }

    /// An image segment without alt text (label falls back to "Image").
    pub fn image_unlabeled() -> Self {
        Self::new(SegmentContent::Image { alt: None })
    }

    /// A button segment with an accessible name.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(SegmentContent::Button {
            label: Some(label.into()),
        })
    }

    /// A link segment with an accessible name and no target.
    pub fn link(label: impl Into<String>) -> Self {
        Self::new(SegmentContent::Link {
            label: Some(label.into()),
            href: None,
        })
    }

    /// A link segment with an accessible name and a target.
    pub fn link_to(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(SegmentContent::Link {
            label: Some(label.into()),
            href: Some(href.into()),
        })
    }

    /// Wrap a composite entity as a single nested segment.
    pub(crate) fn nested(entity: CompositeEntity) -> Self {
        Self::new(SegmentContent::Nested(Box::new(entity)))
    }

    /// Append a modifier (builder).
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Append multiple modifiers in order (builder).
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Attach a render thunk overriding the default per-kind rendering (builder).
    pub fn with_render(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    /// Segment id.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Content payload.
    pub fn content(&self) -> &SegmentContent {
        &self.content
    }

    /// Ordered modifier list.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The render thunk, if one was attached.
    pub fn render_fn(&self) -> Option<&RenderFn> {
        self.render.as_ref()
    }

    /// Kind discriminator.
    pub fn kind(&self) -> SegmentKind {
        self.content.kind()
    }

    /// Visible text content, for text segments only.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            SegmentContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Configured accessible name (alt text or control label), if any.
    pub fn accessible_name(&self) -> Option<&str> {
        match &self.content {
            SegmentContent::Image { alt } => alt.as_deref(),
            SegmentContent::Button { label } => label.as_deref(),
            SegmentContent::Link { label, .. } => label.as_deref(),
            SegmentContent::Text(_) | SegmentContent::Nested(_) => None,
        }
    }

    /// Metadata this segment contributes to a composite.
    ///
    /// Atomic kinds contribute their capability-table defaults. A nested
    /// composite contributes the `Composite` role but keeps the structure of
    /// the entity it wraps.
    pub fn metadata(&self) -> Metadata {
        match &self.content {
            SegmentContent::Nested(entity) => Metadata::new(
                AccessibilityRole::Composite,
                entity.metadata().structure,
            ),
            _ => {
                let caps = self.kind().capabilities();
                Metadata::new(caps.default_role, caps.default_structure)
            }
        }
    }

    /// Whether this segment (or, for nested composites, any segment inside
    /// it) is a control or navigational link.
    pub fn is_interactive(&self) -> bool {
        match &self.content {
            SegmentContent::Nested(entity) => {
                entity.segments().iter().any(Segment::is_interactive)
            }
            _ => self.kind().is_interactive(),
        }
    }

    /// Whether this segment may merge with `other` as a text run.
    ///
    /// Eligible iff both are text segments and the modifier lists are
    /// pairwise deep-equal, order included. Any difference blocks the merge.
    pub fn can_merge_text(&self, other: &Segment) -> bool {
        matches!(self.content, SegmentContent::Text(_))
            && matches!(other.content, SegmentContent::Text(_))
            && self.modifiers == other.modifiers
    }

    /// Merge `other` into this segment as one text run, if eligible.
    ///
    /// The merged segment concatenates the text and takes identity,
    /// modifiers, and thunk from `self` (the first of the pair).
    pub fn merge_text(&self, other: &Segment) -> Option<Segment> {
        let (SegmentContent::Text(left), SegmentContent::Text(right)) =
            (&self.content, &other.content)
        else {
            return None;
        };
        if self.modifiers != other.modifiers {
            return None;
        }
        Some(Segment {
            id: self.id,
            content: SegmentContent::Text(format!("{left}{right}")),
            modifiers: self.modifiers.clone(),
            render: self.render.clone(),
        })
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("modifiers", &self.modifiers)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.modifiers == other.modifiers
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::metadata::SemanticStructure;
    use serde_json::json;

    #[test]
    fn text_segment_kind_and_content() {
        let seg = Segment::text("Hello");
        assert_eq!(seg.kind(), SegmentKind::Text);
        assert_eq!(seg.text_content(), Some("Hello"));
        assert_eq!(seg.accessible_name(), None);
    }

    #[test]
    fn image_segment_accessible_name() {
        let seg = Segment::image("A cat");
        assert_eq!(seg.kind(), SegmentKind::Image);
        assert_eq!(seg.text_content(), None);
        assert_eq!(seg.accessible_name(), Some("A cat"));
    }

    #[test]
    fn unlabeled_image_has_no_name() {
        let seg = Segment::image_unlabeled();
        assert_eq!(seg.accessible_name(), None);
    }

    #[test]
    fn link_to_records_href() {
        let seg = Segment::link_to("Docs", "https://example.com");
        match seg.content() {
            SegmentContent::Link { label, href } => {
                assert_eq!(label.as_deref(), Some("Docs"));
                assert_eq!(href.as_deref(), Some("https://example.com"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn ids_are_unique() {
        let a = Segment::text("a");
        let b = Segment::text("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn structural_equality_ignores_id() {
        let a = Segment::text("same");
        let b = Segment::text("same");
        assert_eq!(a, b);
    }

    #[test]
    fn structural_equality_compares_modifiers() {
        let a = Segment::text("x").with_modifier(Modifier::flag("bold"));
        let b = Segment::text("x").with_modifier(Modifier::flag("bold"));
        let c = Segment::text("x").with_modifier(Modifier::flag("italic"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn metadata_from_capability_table() {
        let text = Segment::text("t").metadata();
        assert_eq!(text.role, AccessibilityRole::Text);
        assert_eq!(text.structure, SemanticStructure::Inline);

        let image = Segment::image("i").metadata();
        assert_eq!(image.role, AccessibilityRole::Group);
        assert_eq!(image.structure, SemanticStructure::Block);
    }

    #[test]
    fn interactive_segments() {
        assert!(Segment::button("Go").is_interactive());
        assert!(Segment::link("Home").is_interactive());
        assert!(!Segment::text("t").is_interactive());
        assert!(!Segment::image("i").is_interactive());
    }

    #[test]
    fn merge_text_concatenates() {
        let a = Segment::text("Hello ");
        let b = Segment::text("World");
        let merged = a.merge_text(&b).unwrap();
        assert_eq!(merged.text_content(), Some("Hello World"));
        assert_eq!(merged.id(), a.id());
    }

    #[test]
    fn merge_text_keeps_first_modifiers() {
        let bold = Modifier::new("bold", json!({ "weight": 700 }));
        let a = Segment::text("a").with_modifier(bold.clone());
        let b = Segment::text("b").with_modifier(bold.clone());
        let merged = a.merge_text(&b).unwrap();
        assert_eq!(merged.modifiers(), &[bold]);
    }

    #[test]
    fn merge_blocked_by_modifier_mismatch() {
        let a = Segment::text("a").with_modifier(Modifier::flag("bold"));
        let b = Segment::text("b");
        assert!(!a.can_merge_text(&b));
        assert!(a.merge_text(&b).is_none());
    }

    #[test]
    fn merge_blocked_by_modifier_order() {
        let a = Segment::text("a")
            .with_modifier(Modifier::flag("bold"))
            .with_modifier(Modifier::flag("italic"));
        let b = Segment::text("b")
            .with_modifier(Modifier::flag("italic"))
            .with_modifier(Modifier::flag("bold"));
        assert!(!a.can_merge_text(&b));
    }

    #[test]
    fn merge_blocked_across_kinds() {
        let a = Segment::text("a");
        let b = Segment::image("pic");
        assert!(!a.can_merge_text(&b));
        assert!(a.merge_text(&b).is_none());
    }

    #[test]
    fn merge_keeps_render_thunk_of_first() {
        let thunk: RenderFn = Rc::new(|_seg| Ok(Node::new("span")));
        let a = Segment::text("a").with_render(thunk);
        let b = Segment::text("b");
        let merged = a.merge_text(&b).unwrap();
        assert!(merged.render_fn().is_some());
    }

    #[test]
    fn debug_omits_thunk_body() {
        let thunk: RenderFn = Rc::new(|_seg| Ok(Node::new("span")));
        let seg = Segment::text("t").with_render(thunk);
        let debug = format!("{seg:?}");
        assert!(debug.contains("render: true"));
    }
}
