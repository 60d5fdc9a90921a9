//! Segment kinds and the per-kind capability table.
//!
//! Kinds form a closed enumeration so that mergeability, default roles, and
//! label fallbacks are decided by exhaustive matching instead of comparing
//! runtime type names. Each kind maps to a static [`KindCapabilities`] record.

use crate::compose::metadata::{AccessibilityRole, SemanticStructure};

// ---------------------------------------------------------------------------
// SegmentKind
// ---------------------------------------------------------------------------

/// Discriminator for the renderable unit a segment wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    /// Plain visible text.
    Text,
    /// An image with an optional alt text.
    Image,
    /// An interactive control.
    Button,
    /// A navigational link.
    Link,
    /// A composite entity converted back into a segment.
    Composite,
}

impl SegmentKind {
    /// All kinds, in declaration order.
    pub const ALL: [SegmentKind; 5] = [
        SegmentKind::Text,
        SegmentKind::Image,
        SegmentKind::Button,
        SegmentKind::Link,
        SegmentKind::Composite,
    ];

    /// Look up the static capability record for this kind.
    pub fn capabilities(self) -> &'static KindCapabilities {
        match self {
            SegmentKind::Text => &TEXT_CAPS,
            SegmentKind::Image => &IMAGE_CAPS,
            SegmentKind::Button => &BUTTON_CAPS,
            SegmentKind::Link => &LINK_CAPS,
            SegmentKind::Composite => &COMPOSITE_CAPS,
        }
    }

    /// Lowercase display name, used in generated descriptions.
    pub fn name(self) -> &'static str {
        self.capabilities().name
    }

    /// Whether this kind is a control or navigational link.
    pub fn is_interactive(self) -> bool {
        self.capabilities().interactive
    }

    /// Whether this kind produces visible text directly.
    pub fn is_text_like(self) -> bool {
        self.capabilities().text_like
    }
}

// ---------------------------------------------------------------------------
// KindCapabilities
// ---------------------------------------------------------------------------

/// Static per-kind facts used for metadata defaults and label synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindCapabilities {
    /// Lowercase kind name (e.g. "text").
    pub name: &'static str,
    /// Accessibility role an atomic segment of this kind contributes.
    pub default_role: AccessibilityRole,
    /// Semantic structure an atomic segment of this kind contributes.
    ///
    /// For `Composite` this is a fallback only; a nested segment contributes
    /// the structure of the entity it wraps.
    pub default_structure: SemanticStructure,
    /// Label used when a segment has no visible text and no accessible name.
    pub label_fallback: &'static str,
    /// Whether segments of this kind are keyboard-interactive.
    pub interactive: bool,
    /// Whether segments of this kind carry visible text content.
    pub text_like: bool,
}

static TEXT_CAPS: KindCapabilities = KindCapabilities {
    name: "text",
    default_role: AccessibilityRole::Text,
    default_structure: SemanticStructure::Inline,
    label_fallback: "",
    interactive: false,
    text_like: true,
};

static IMAGE_CAPS: KindCapabilities = KindCapabilities {
    name: "image",
    default_role: AccessibilityRole::Group,
    default_structure: SemanticStructure::Block,
    label_fallback: "Image",
    interactive: false,
    text_like: false,
};

static BUTTON_CAPS: KindCapabilities = KindCapabilities {
    name: "button",
    default_role: AccessibilityRole::Group,
    default_structure: SemanticStructure::Inline,
    label_fallback: "Button",
    interactive: true,
    text_like: false,
};

static LINK_CAPS: KindCapabilities = KindCapabilities {
    name: "link",
    default_role: AccessibilityRole::Group,
    default_structure: SemanticStructure::Inline,
    label_fallback: "Link",
    interactive: true,
    text_like: false,
};

static COMPOSITE_CAPS: KindCapabilities = KindCapabilities {
    name: "composite",
    default_role: AccessibilityRole::Composite,
    default_structure: SemanticStructure::Mixed,
    label_fallback: "",
    interactive: false,
    text_like: false,
};

// ===========================================================================
// Tests
// ===========================================================================
