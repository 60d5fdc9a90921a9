//! The composite renderer.
//!
//! Turns a composite entity into a single container node: asks the optimizer
//! for the optimized segment order (transparent cache pass-through), renders
//! each segment through its thunk, then computes container accessibility
//! attributes — role, generated description, reading-order flow hints, live
//! region marking, and the aggregate label — from the entity's metadata.
//!
//! Render failures propagate unmodified; no partial, silently-degraded
//! output is ever produced.

use crate::compose::entity::CompositeEntity;
use crate::compose::metadata::{AccessibilityRole, SemanticStructure};
use crate::error::RenderError;
use crate::optimize::{CacheConfig, TextRunOptimizer};
use crate::render::label;
use crate::render::node::Node;
use crate::segment::{Modifier, Segment, SegmentContent, SegmentKind};

/// Description attached to containers holding interactive content.
const INTERACTIVE_DESCRIPTION: &str =
    "Contains interactive elements; use Tab to move between them";

/// Role description for composites that embed nested composite content.
const COMPOSITE_ROLE_DESCRIPTION: &str = "interactive content group";

// ---------------------------------------------------------------------------
// RenderOptions
// ---------------------------------------------------------------------------

/// Renderer configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit diagnostic `data-*` attributes (segment count, role, structure)
    /// on the container. Off by default.
    pub debug: bool,
}

// ---------------------------------------------------------------------------
// CompositeRenderer
// ---------------------------------------------------------------------------

/// Renders composite entities into container nodes with computed
/// accessibility attributes.
#[derive(Debug, Default)]
pub struct CompositeRenderer {
    optimizer: TextRunOptimizer,
    options: RenderOptions,
}

impl CompositeRenderer {
    /// Create a renderer with default options and cache configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with explicit options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            optimizer: TextRunOptimizer::new(),
            options,
        }
    }

    /// Create a renderer with explicit options and cache configuration.
    pub fn with_cache_config(options: RenderOptions, config: CacheConfig) -> Self {
        Self {
            optimizer: TextRunOptimizer::with_config(config),
            options,
        }
    }

    /// The underlying optimizer.
    pub fn optimizer(&self) -> &TextRunOptimizer {
        &self.optimizer
    }

    /// The underlying optimizer, mutably (e.g. to clear its cache).
    pub fn optimizer_mut(&mut self) -> &mut TextRunOptimizer {
        &mut self.optimizer
    }

    /// Render an entity into one container node.
    pub fn render(&mut self, entity: &CompositeEntity) -> Result<Node, RenderError> {
        let outcome = self.optimizer.optimize(entity.segments());
        let metadata = entity.metadata();

        let mut children = Vec::with_capacity(outcome.segments.len());
        for segment in &outcome.segments {
            let mut node = self.render_segment(segment)?;
            // Raw-content semantics are per-segment context: the directive
            // lands on each matching text segment, never on the container.
            if entity.raw_content() && segment.kind() == SegmentKind::Text {
                node.set_attr("data-raw-content", "true");
            }
            children.push(node);
        }

        let tag = match metadata.structure {
            SemanticStructure::Inline => "span",
            SemanticStructure::Block | SemanticStructure::Mixed => "div",
        };
        let mut container = Node::new(tag).attr("class", "weft-composite");

        match metadata.role {
            // Plain text relies on default child semantics.
            AccessibilityRole::Text => {}
            AccessibilityRole::Group => {
                container.set_attr("role", "group");
                container.set_attr("aria-description", group_description(&outcome.segments));
            }
            AccessibilityRole::Composite => {
                container.set_attr("role", "group");
                container.set_attr("aria-roledescription", COMPOSITE_ROLE_DESCRIPTION);
            }
        }

        if metadata.structure == SemanticStructure::Mixed && outcome.segments.len() > 2 {
            let flow = flow_hints(entity, &mut children);
            if !flow.is_empty() {
                container.set_attr("aria-flowto", flow);
            }
        }

        if outcome.segments.iter().any(Segment::is_interactive) {
            container.set_attr("aria-live", "polite");
            container.set_attr("aria-atomic", "true");
            container.set_attr("tabindex", "0");
            append_description(&mut container, INTERACTIVE_DESCRIPTION);
        }

        // Mirror the description into a referenced child node for assistive
        // technology that resolves `aria-describedby` but not the newer
        // `aria-description` (which stays as the inline fallback).
        if let Some(description) = container.attribute("aria-description").map(str::to_owned) {
            let id = format!("weft-{}-desc", entity.id());
            children.push(
                Node::with_text("span", description)
                    .attr("class", "weft-description")
                    .attr("id", id.clone()),
            );
            container.set_attr("aria-describedby", id);
        }

        let aggregate = label::segments_label(&outcome.segments, metadata.structure);
        if !aggregate.is_empty() {
            container.set_attr("aria-label", aggregate);
        }

        if self.options.debug {
            container.set_attr("data-segment-count", outcome.segments.len().to_string());
            container.set_attr("data-accessibility-role", metadata.role.name());
            container.set_attr("data-semantic-structure", metadata.structure.name());
        }

        container.children = children;
        Ok(container)
    }

    /// Render one segment: the attached thunk if present, otherwise the
    /// default per-kind rendering. Nested composites recurse through the
    /// renderer; flattening bounds the nesting depth, so recursion terminates.
    fn render_segment(&mut self, segment: &Segment) -> Result<Node, RenderError> {
        if let Some(render) = segment.render_fn() {
            return render(segment);
        }
        match segment.content() {
            SegmentContent::Text(text) => {
                let mut node = Node::with_text("span", text).attr("class", "weft-text");
                if segment.modifiers().iter().any(Modifier::is_raw_content) {
                    node.set_attr("data-raw-content", "true");
                }
                Ok(node)
            }
            SegmentContent::Image { alt } => {
                let mut node = Node::new("img").attr("class", "weft-image");
                if let Some(alt) = alt {
                    node.set_attr("alt", alt);
                }
                Ok(node)
            }
            SegmentContent::Button { label } => {
                let mut node = Node::new("button").attr("class", "weft-button");
                if let Some(label) = label {
                    node.text = Some(label.clone());
                }
                Ok(node)
            }
            SegmentContent::Link { label, href } => {
                let mut node = Node::new("a").attr("class", "weft-link");
                if let Some(label) = label {
                    node.text = Some(label.clone());
                }
                if let Some(href) = href {
                    node.set_attr("href", href);
                }
                Ok(node)
            }
            SegmentContent::Nested(entity) => self.render(entity),
        }
    }
}

/// Generated description for group containers: "Group of 3 text elements"
/// when one kind is present, "Group containing text, image elements" when
/// several are.
fn group_description(segments: &[Segment]) -> String {
    let mut kinds: Vec<&'static str> = Vec::new();
    for segment in segments {
        let name = segment.kind().name();
        if !kinds.contains(&name) {
            kinds.push(name);
        }
    }
    match kinds.as_slice() {
        [] => "Empty group".to_owned(),
        [kind] => {
            let noun = if segments.len() == 1 { "element" } else { "elements" };
            format!("Group of {} {} {}", segments.len(), kind, noun)
        }
        many => format!("Group containing {} elements", many.join(", ")),
    }
}

/// Best-effort reading-order flow hints: assign generated ids to each child
/// and return the ordered id list for `aria-flowto`.
fn flow_hints(entity: &CompositeEntity, children: &mut [Node]) -> String {
    let mut ids = Vec::with_capacity(children.len());
    for (index, child) in children.iter_mut().enumerate() {
        let id = format!("weft-{}-seg-{}", entity.id(), index);
        child.set_attr("id", id.clone());
        ids.push(id);
    }
    ids.join(" ")
}

/// Append to an existing `aria-description` rather than clobbering it.
fn append_description(container: &mut Node, description: &str) {
    let combined = match container.attribute("aria-description") {
        Some(existing) => format!("{existing}. {description}"),
        None => description.to_owned(),
    };
    container.set_attr("aria-description", combined);
}

// ===========================================================================
// Tests
// ===========================================================================
