//! Component metadata diffing.
//!
//! Compares the object literal passed to a component decorator in the stale
//! and updated versions of a class. Two comparisons run side by side:
//!
//! | Fields | Compared | Helper |
//! |--------|----------|--------|
//! | supported (`template`, `styles`, ...) | by name, order-insensitive | [`SupportedFields`] |
//! | everything else | by position, whole property text | [`UnsupportedFields`] |
//!
//! Supported fields are declarative, so reordering or editing them is
//! harmless. Unsupported fields may hold expressions whose evaluation order
//! matters, so they must match one for one, in order.

use std::collections::VecDeque;
use std::fmt;

use hmr_ir::text::ranges_equal;
use hmr_ir::{ObjectLiteral, ObjectProperty, PropertyKind, Span};
use rustc_hash::FxHashMap;

use crate::fields::is_supported_field;

/// Classification of one component's metadata change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MetadataChange {
    /// No field was added, removed or edited.
    None,
    /// Only supported fields were added, removed or edited.
    Supported,
    /// Something other than a supported field changed.
    Unsupported(MetadataIssue),
}

/// Why a metadata change is unsupported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MetadataIssue {
    /// A property is not a plain `name: value` assignment with a static name.
    PropertyShape,
    /// An unsupported field differs from the stale field at its position.
    UnsupportedFieldChanged,
    /// The updated literal has more unsupported fields than the stale one.
    UnsupportedFieldAdded,
    /// The updated literal has fewer unsupported fields than the stale one.
    UnsupportedFieldRemoved,
}

impl fmt::Display for MetadataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MetadataIssue::PropertyShape => "metadata property is not a plain assignment",
            MetadataIssue::UnsupportedFieldChanged => "unsupported metadata field changed",
            MetadataIssue::UnsupportedFieldAdded => "unsupported metadata field added",
            MetadataIssue::UnsupportedFieldRemoved => "unsupported metadata field removed",
        };
        f.write_str(msg)
    }
}

/// Classify the change between two metadata object literals.
///
/// `stale_text` and `updated_text` are the texts the respective literals'
/// spans index into.
pub fn analyze_metadata(
    stale: &ObjectLiteral,
    stale_text: &str,
    updated: &ObjectLiteral,
    updated_text: &str,
) -> MetadataChange {
    let mut supported = SupportedFields::new(stale_text, updated_text);
    let mut unsupported = UnsupportedFields::new(stale_text);
    for property in &stale.properties {
        let Some((name, value)) = plain_assignment(property) else {
            return MetadataChange::Unsupported(MetadataIssue::PropertyShape);
        };
        if is_supported_field(name) {
            supported.insert_stale(name, value);
        } else {
            unsupported.push(property.span);
        }
    }

    for property in &updated.properties {
        let Some((name, value)) = plain_assignment(property) else {
            return MetadataChange::Unsupported(MetadataIssue::PropertyShape);
        };
        if is_supported_field(name) {
            supported.insert_updated(name, value);
        } else if let Err(issue) = unsupported.match_next(updated_text, property.span) {
            tracing::trace!(field = name, %issue, "unsupported metadata field");
            return MetadataChange::Unsupported(issue);
        }
    }

    if let Err(issue) = unsupported.finish() {
        return MetadataChange::Unsupported(issue);
    }

    if supported.is_edited() {
        MetadataChange::Supported
    } else {
        MetadataChange::None
    }
}

/// Name and initializer span of a `name: value` property with a static name.
fn plain_assignment(property: &ObjectProperty) -> Option<(&str, Span)> {
    match &property.kind {
        PropertyKind::Assignment { name, initializer } => Some((name.text()?, initializer.span)),
        PropertyKind::Shorthand(_) | PropertyKind::Spread(_) | PropertyKind::Method { .. } => None,
    }
}

/// Name-keyed comparison of supported fields.
///
/// Each side keeps the last value recorded per name, as the object literal
/// itself would. The two sides are then compared name by name.
#[derive(Debug)]
pub struct SupportedFields<'a> {
    stale_text: &'a str,
    updated_text: &'a str,
    stale: FxHashMap<&'a str, Span>,
    updated: FxHashMap<&'a str, Span>,
}

impl<'a> SupportedFields<'a> {
    pub fn new(stale_text: &'a str, updated_text: &'a str) -> Self {
        SupportedFields {
            stale_text,
            updated_text,
            stale: FxHashMap::default(),
            updated: FxHashMap::default(),
        }
    }

    pub fn insert_stale(&mut self, name: &'a str, value: Span) {
        self.stale.insert(name, value);
    }

    pub fn insert_updated(&mut self, name: &'a str, value: Span) {
        self.updated.insert(name, value);
    }

    /// Check if a field was added, removed or given a different value.
    pub fn is_edited(&self) -> bool {
        if self.stale.len() != self.updated.len() {
            tracing::trace!(
                stale = self.stale.len(),
                updated = self.updated.len(),
                "supported metadata field added or removed"
            );
            return true;
        }
        self.updated.iter().any(|(&name, &value)| {
            let edited = match self.stale.get(name) {
                Some(&stale) => !ranges_equal(self.stale_text, stale, self.updated_text, value),
                None => true,
            };
            tracing::trace!(field = name, edited, "supported metadata field");
            edited
        })
    }
}

/// Positional comparison of unsupported fields.
///
/// Queues the stale properties in encounter order; each updated property must
/// equal the next one in the queue.
#[derive(Debug)]
pub struct UnsupportedFields<'a> {
    stale_text: &'a str,
    queue: VecDeque<Span>,
}

impl<'a> UnsupportedFields<'a> {
    pub fn new(stale_text: &'a str) -> Self {
        UnsupportedFields {
            stale_text,
            queue: VecDeque::new(),
        }
    }

    /// Queue a stale property.
    pub fn push(&mut self, property: Span) {
        self.queue.push_back(property);
    }

    /// Compare an updated property with the next queued stale one.
    pub fn match_next(&mut self, updated_text: &str, property: Span) -> Result<(), MetadataIssue> {
        let Some(stale) = self.queue.pop_front() else {
            return Err(MetadataIssue::UnsupportedFieldAdded);
        };
        if ranges_equal(self.stale_text, stale, updated_text, property) {
            Ok(())
        } else {
            Err(MetadataIssue::UnsupportedFieldChanged)
        }
    }

    /// Check that every queued stale property was matched.
    pub fn finish(self) -> Result<(), MetadataIssue> {
        if self.queue.is_empty() {
            Ok(())
        } else {
            Err(MetadataIssue::UnsupportedFieldRemoved)
        }
    }
}

#[cfg(test)]
mod tests;
