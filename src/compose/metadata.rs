//! Accessibility metadata and its merge lattice.
//!
//! Role and structure each form a join-semilattice: the merge operators are
//! commutative, associative, and idempotent, with `Composite` and `Mixed` as
//! top elements. This algebra is what makes concatenation associative — the
//! merged metadata of a composite never depends on the grouping of the
//! concatenations that built it, and adding segments can only move rank
//! upward, never back.

// ---------------------------------------------------------------------------
// AccessibilityRole
// ---------------------------------------------------------------------------

/// Accessible role of a segment or composite. Rank: `Text < Group < Composite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessibilityRole {
    /// Pure text content; no explicit container role is emitted.
    Text,
    /// A grouping of non-uniform or non-text content.
    Group,
    /// A grouping that embeds composite (nested) content.
    Composite,
}

impl AccessibilityRole {
    /// Lowercase name, used in diagnostic attributes.
    pub fn name(self) -> &'static str {
        match self {
            AccessibilityRole::Text => "text",
            AccessibilityRole::Group => "group",
            AccessibilityRole::Composite => "composite",
        }
    }

    /// Lattice rank, for monotonicity checks.
    pub fn rank(self) -> u8 {
        match self {
            AccessibilityRole::Text => 0,
            AccessibilityRole::Group => 1,
            AccessibilityRole::Composite => 2,
        }
    }
}

/// Join two roles: `Text` only if both are `Text`, `Composite` if either is,
/// otherwise `Group`.
pub fn merge_role(a: AccessibilityRole, b: AccessibilityRole) -> AccessibilityRole {
    use AccessibilityRole::*;
    match (a, b) {
        (Text, Text) => Text,
        (Composite, _) | (_, Composite) => Composite,
        _ => Group,
    }
}

// ---------------------------------------------------------------------------
// SemanticStructure
// ---------------------------------------------------------------------------

/// Semantic reading structure. `Inline` and `Block` are incomparable;
/// `Mixed` is the top element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticStructure {
    /// Flows within a line of text.
    Inline,
    /// Stands alone as a block.
    Block,
    /// Mixture of inline and block content.
    Mixed,
}

impl SemanticStructure {
    /// Lowercase name, used in diagnostic attributes.
    pub fn name(self) -> &'static str {
        match self {
            SemanticStructure::Inline => "inline",
            SemanticStructure::Block => "block",
            SemanticStructure::Mixed => "mixed",
        }
    }

    /// Lattice rank, for monotonicity checks. `Inline` and `Block` share
    /// rank 0; `Mixed` is rank 1.
    pub fn rank(self) -> u8 {
        match self {
            SemanticStructure::Inline | SemanticStructure::Block => 0,
            SemanticStructure::Mixed => 1,
        }
    }
}

/// Join two structures: preserved only when both agree, otherwise `Mixed`.
pub fn merge_structure(a: SemanticStructure, b: SemanticStructure) -> SemanticStructure {
    use SemanticStructure::*;
    match (a, b) {
        (Inline, Inline) => Inline,
        (Block, Block) => Block,
        _ => Mixed,
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Lattice-merged accessibility metadata of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
    /// Accessible role.
    pub role: AccessibilityRole,
    /// Semantic reading structure.
    pub structure: SemanticStructure,
}

impl Metadata {
    /// Create metadata from a role/structure pair.
    pub fn new(role: AccessibilityRole, structure: SemanticStructure) -> Self {
        Self { role, structure }
    }

    /// Pointwise lattice join of both fields.
    pub fn merge(self, other: Metadata) -> Metadata {
        Metadata {
            role: merge_role(self.role, other.role),
            structure: merge_structure(self.structure, other.structure),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use AccessibilityRole::*;
    use SemanticStructure::*;

    const ROLES: [AccessibilityRole; 3] = [Text, Group, Composite];
    const STRUCTURES: [SemanticStructure; 3] = [Inline, Block, Mixed];

    // -----------------------------------------------------------------------
    // merge_role
    // -----------------------------------------------------------------------

    #[test]
    fn role_text_only_when_both_text() {
        assert_eq!(merge_role(Text, Text), Text);
        assert_eq!(merge_role(Text, Group), Group);
        assert_eq!(merge_role(Group, Text), Group);
    }

    #[test]
    fn role_composite_dominates() {
        for role in ROLES {
            assert_eq!(merge_role(Composite, role), Composite);
            assert_eq!(merge_role(role, Composite), Composite);
        }
    }

    #[test]
    fn role_merge_commutative() {
        for a in ROLES {
            for b in ROLES {
                assert_eq!(merge_role(a, b), merge_role(b, a));
            }
        }
    }

    #[test]
    fn role_merge_associative() {
        for a in ROLES {
            for b in ROLES {
                for c in ROLES {
                    assert_eq!(
                        merge_role(merge_role(a, b), c),
                        merge_role(a, merge_role(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn role_merge_idempotent() {
        for role in ROLES {
            assert_eq!(merge_role(role, role), role);
        }
    }

    #[test]
    fn role_merge_never_decreases_rank() {
        for a in ROLES {
            for b in ROLES {
                let merged = merge_role(a, b);
                assert!(merged.rank() >= a.rank());
                assert!(merged.rank() >= b.rank());
            }
        }
    }

    // -----------------------------------------------------------------------
    // merge_structure
    // -----------------------------------------------------------------------

    #[test]
    fn structure_preserved_when_equal() {
        assert_eq!(merge_structure(Inline, Inline), Inline);
        assert_eq!(merge_structure(Block, Block), Block);
        assert_eq!(merge_structure(Mixed, Mixed), Mixed);
    }

    #[test]
    fn structure_mixed_when_different() {
        assert_eq!(merge_structure(Inline, Block), Mixed);
        assert_eq!(merge_structure(Block, Inline), Mixed);
        assert_eq!(merge_structure(Inline, Mixed), Mixed);
        assert_eq!(merge_structure(Mixed, Block), Mixed);
    }

    #[test]
    fn structure_merge_commutative_and_associative() {
        for a in STRUCTURES {
            for b in STRUCTURES {
                assert_eq!(merge_structure(a, b), merge_structure(b, a));
                for c in STRUCTURES {
                    assert_eq!(
                        merge_structure(merge_structure(a, b), c),
                        merge_structure(a, merge_structure(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn structure_merge_idempotent() {
        for s in STRUCTURES {
            assert_eq!(merge_structure(s, s), s);
        }
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    #[test]
    fn metadata_merge_pointwise() {
        let a = Metadata::new(Text, Inline);
        let b = Metadata::new(Group, Block);
        let merged = a.merge(b);
        assert_eq!(merged.role, Group);
        assert_eq!(merged.structure, Mixed);
    }

    #[test]
    fn metadata_merge_idempotent() {
        let m = Metadata::new(Group, Mixed);
        assert_eq!(m.merge(m), m);
    }

    #[test]
    fn names() {
        assert_eq!(Text.name(), "text");
        assert_eq!(Composite.name(), "composite");
        assert_eq!(Inline.name(), "inline");
        assert_eq!(Mixed.name(), "mixed");
    }
}
