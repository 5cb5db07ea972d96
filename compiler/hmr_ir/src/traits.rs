//! Shared node traits.

use super::Span;

/// Trait for nodes that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}
