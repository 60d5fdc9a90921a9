//! Error types for composition and rendering.
//!
//! Two failure surfaces exist: [`ConstructionError`] when an operand cannot
//! yield a segment (fatal, surfaced immediately at concatenation time), and
//! [`RenderError`] when a render thunk fails (propagated unmodified to the
//! caller — never retried or swallowed). Fingerprint degradation in the
//! optimizer is deliberately *not* an error: it only disables caching.

/// Errors from building segments and composite entities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// A composite entity needs at least one segment.
    #[error("cannot build a composite entity from an empty segment list")]
    EmptyComposite,
}

/// Errors from rendering a segment or composite entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A render thunk failed. The message comes from the thunk itself.
    #[error("render thunk for {kind} segment failed: {message}")]
    Thunk {
        /// Kind name of the segment whose thunk failed (e.g. "text").
        kind: &'static str,
        /// Thunk-provided failure description.
        message: String,
    },
}

impl RenderError {
    /// Build a thunk failure for the given segment kind name.
    pub fn thunk(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Thunk {
            kind,
            message: message.into(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_display() {
        let err = ConstructionError::EmptyComposite;
        assert_eq!(
            err.to_string(),
            "cannot build a composite entity from an empty segment list"
        );
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::thunk("text", "boom");
        assert_eq!(err.to_string(), "render thunk for text segment failed: boom");
    }

    #[test]
    fn render_error_preserves_message() {
        let err = RenderError::thunk("image", "missing source");
        match err {
            RenderError::Thunk { kind, message } => {
                assert_eq!(kind, "image");
                assert_eq!(message, "missing source");
            }
        }
    }
}
