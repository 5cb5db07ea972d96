//! Template and stylesheet changes.
//!
//! A template or stylesheet is a separate file from the class that uses it.
//! Swapping the class re-renders with the new resource, so such a change
//! makes every bound class a candidate and needs no structural check.

use hmr_ir::ClassId;

use crate::ProgramInspector;

/// Classes bound to `path` as a template or style file, templates first.
///
/// An empty result means `path` is not a known resource file.
pub fn components_for_resource<P>(inspector: &P, path: &str) -> Vec<ClassId>
where
    P: ProgramInspector + ?Sized,
{
    let mut classes = inspector.components_with_template_file(path);
    for class in inspector.components_with_style_file(path) {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes
}

#[cfg(test)]
mod tests;
