//! Composition: metadata lattice, composite entities, concatenation engine.

pub mod concat;
pub mod entity;
pub mod metadata;

pub use concat::{concat, Renderable};
pub use entity::{CompositeEntity, EntityId};
pub use metadata::{merge_role, merge_structure, AccessibilityRole, Metadata, SemanticStructure};
