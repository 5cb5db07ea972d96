//! Component metadata fields that can change without a rebuild.
//!
//! Inline templates and styles, and the URLs that point at them, are
//! declarative: the runtime re-renders from whatever they hold when the
//! component is swapped. Every other field may feed code generation, so a
//! change to it needs a full rebuild.

/// Exact field names whose edits are hot-swappable.
pub const SUPPORTED_FIELD_NAMES: [&str; 5] =
    ["template", "templateUrl", "styles", "styleUrl", "stylesUrl"];

/// Check if `name` is one of [`SUPPORTED_FIELD_NAMES`]. Case-sensitive.
#[inline]
pub fn is_supported_field(name: &str) -> bool {
    SUPPORTED_FIELD_NAMES.contains(&name)
}

#[cfg(test)]
mod tests;
