//! Aggregate accessible-label synthesis.
//!
//! Builds one human-readable label from many sub-labels. Each segment
//! contributes its visible text, its configured accessible name, or a
//! kind-specific fallback; empty contributions are filtered out. The join
//! separator follows the composite's semantic structure.
//!
//! The mixed-structure join uses a punctuation/capital-letter heuristic to
//! detect sentence boundaries. It assumes Latin-script, English-like text;
//! other scripts may be misjoined. That limitation is accepted as-is — do not
//! "fix" it without a specified replacement policy.

use crate::compose::entity::CompositeEntity;
use crate::compose::metadata::SemanticStructure;
use crate::segment::{Segment, SegmentContent};

/// Text a single segment contributes to the aggregate label.
///
/// Text segments contribute their visible text; other atomic kinds their
/// configured accessible name, falling back to the capability-table label
/// ("Image", "Button", "Link"). Nested composites contribute their own
/// aggregate label, computed recursively.
pub fn segment_label(segment: &Segment) -> String {
    match segment.content() {
        SegmentContent::Text(text) => text.clone(),
        SegmentContent::Nested(entity) => composite_label(entity),
        _ => match segment.accessible_name() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => segment.kind().capabilities().label_fallback.to_owned(),
        },
    }
}

/// Aggregate label for a whole entity.
pub fn composite_label(entity: &CompositeEntity) -> String {
    segments_label(entity.segments(), entity.metadata().structure)
}

/// Aggregate label for a segment sequence with a known structure.
pub fn segments_label(segments: &[Segment], structure: SemanticStructure) -> String {
    let labels: Vec<String> = segments
        .iter()
        .map(segment_label)
        .filter(|label| !label.is_empty())
        .collect();
    join_labels(&labels, structure)
}

/// Join non-empty labels according to the semantic structure.
pub fn join_labels(labels: &[String], structure: SemanticStructure) -> String {
    match structure {
        SemanticStructure::Inline => labels.join(" "),
        SemanticStructure::Block => labels.join(". "),
        SemanticStructure::Mixed => mixed_join(labels),
    }
}

/// Pairwise join for mixed structure: a space by default, `". "` when the
/// left label lacks terminal punctuation and the right starts a new sentence.
fn mixed_join(labels: &[String]) -> String {
    let mut out = String::new();
    for label in labels {
        if !out.is_empty() {
            if needs_sentence_break(&out, label) {
                out.push_str(". ");
            } else {
                out.push(' ');
            }
        }
        out.push_str(label);
    }
    out
}

/// Heuristic sentence-boundary detection: the left side does not already end
/// in terminal punctuation and the right side begins with a capital letter.
fn needs_sentence_break(left: &str, right: &str) -> bool {
    let terminated = left
        .trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| matches!(c, '.' | '!' | '?'));
    let capitalized = right.chars().next().is_some_and(char::is_uppercase);
    !terminated && capitalized
}

// ===========================================================================
// Tests
// ===========================================================================
