//! # weft
//!
//! An accessible composition and optimization engine for declarative UI.
//!
//! weft lets independently renderable units be concatenated into a single
//! composite output while preserving screen-reader-consumable semantics, and
//! eliminates redundant output nodes by merging compatible adjacent text
//! runs. It is a library-level subsystem: no network, no persistence, no CLI.
//!
//! ## Core Systems
//!
//! - **[`segment`]** — Atomic renderable units: tagged content, ordered style
//!   modifiers, optional render thunks, and the per-kind capability table
//! - **[`compose`]** — Concatenation engine with single-level flattening and
//!   the commutative/associative/idempotent metadata merge lattice
//! - **[`optimize`]** — Text-run optimizer: O(n) adjacent-run fold backed by
//!   a bounded, expiring, content-fingerprinted cache
//! - **[`render`]** — Composite renderer producing one container node with
//!   computed ARIA attributes and an aggregate human-readable label
//! - **[`error`]** — Construction and render error taxonomy
//!
//! ## Example
//!
//! ```
//! use weft::{CompositeRenderer, Segment};
//!
//! let entity = Segment::text("Hello ")
//!     .concat(Segment::text("World"))
//!     .unwrap();
//!
//! let mut renderer = CompositeRenderer::new();
//! let node = renderer.render(&entity).unwrap();
//! // Adjacent text runs merged into one child node.
//! assert_eq!(node.children.len(), 1);
//! assert_eq!(node.attribute("aria-label"), Some("Hello World"));
//! ```

pub mod compose;
pub mod error;
pub mod optimize;
pub mod render;
pub mod segment;

pub use compose::{
    concat, AccessibilityRole, CompositeEntity, EntityId, Metadata, Renderable, SemanticStructure,
};
pub use error::{ConstructionError, RenderError};
pub use optimize::{CacheConfig, OptimizeOutcome, OptimizeStats, TextRunOptimizer};
pub use render::{build, CompositeRenderer, Node, RenderOptions};
pub use segment::{Modifier, RenderFn, Segment, SegmentContent, SegmentId, SegmentKind};
