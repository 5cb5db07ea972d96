//! The compiler's view of the updated program.
//!
//! The analyzer never parses or resolves anything itself. It asks a
//! [`ProgramInspector`] for the updated source of a file, for component
//! metadata of a class, and for the classes bound to a template or style
//! file. [`InMemoryProgram`] is a map-backed implementation that a front end
//! can fill in directly.

use hmr_ir::{ClassDecl, ClassId, DecoratorExpr, SourceVersion};
use rustc_hash::FxHashMap;

/// What the compiler knows about a decorated class.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComponentMetadata {
    /// Index into the class's `decorators` of the decorator that carries
    /// the metadata.
    pub decorator: usize,
    /// The decorator declares a UI component (as opposed to a directive,
    /// pipe, injectable, ...).
    pub is_component: bool,
}

impl ComponentMetadata {
    pub const fn component(decorator: usize) -> Self {
        ComponentMetadata {
            decorator,
            is_component: true,
        }
    }
}

/// Read-only access to the updated program.
pub trait ProgramInspector {
    /// Classes whose template file is `path`.
    fn components_with_template_file(&self, path: &str) -> Vec<ClassId>;

    /// Classes that use `path` as a style file.
    fn components_with_style_file(&self, path: &str) -> Vec<ClassId>;

    /// Updated version of the source file at `path`, if the program still
    /// contains it.
    fn source_file(&self, path: &str) -> Option<&SourceVersion>;

    /// Metadata of a class from the updated program.
    fn component_metadata(&self, class: &ClassDecl) -> Option<ComponentMetadata>;
}

/// Map-backed [`ProgramInspector`].
///
/// # Example
///
/// ```
/// use hmr_analysis::{InMemoryProgram, ProgramInspector};
/// use hmr_ir::{ClassSpec, ObjectSpec, SourceBuilder};
///
/// let mut builder = SourceBuilder::new("src/foo.ts");
/// let foo = builder.class(&ClassSpec::component("Foo", ObjectSpec::new()));
///
/// let mut program = InMemoryProgram::new();
/// program.insert_source(builder.finish().unwrap());
/// program.bind_template_file("src/foo.html", foo);
/// assert_eq!(program.mark_components("Component"), 1);
///
/// assert_eq!(program.components_with_template_file("src/foo.html"), vec![foo]);
/// assert!(program.source_file("src/foo.ts").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryProgram {
    sources: FxHashMap<String, SourceVersion>,
    template_files: FxHashMap<String, Vec<ClassId>>,
    style_files: FxHashMap<String, Vec<ClassId>>,
    metadata: FxHashMap<ClassId, ComponentMetadata>,
}

impl InMemoryProgram {
    pub fn new() -> Self {
        InMemoryProgram::default()
    }

    /// Add or replace the source at `source.path()`.
    pub fn insert_source(&mut self, source: SourceVersion) -> Option<SourceVersion> {
        self.sources.insert(source.path().to_owned(), source)
    }

    pub fn remove_source(&mut self, path: &str) -> Option<SourceVersion> {
        self.sources.remove(path)
    }

    /// Record that `class` renders the template at `path`.
    pub fn bind_template_file(&mut self, path: impl Into<String>, class: ClassId) {
        push_unique(self.template_files.entry(path.into()).or_default(), class);
    }

    /// Record that `class` uses the stylesheet at `path`.
    pub fn bind_style_file(&mut self, path: impl Into<String>, class: ClassId) {
        push_unique(self.style_files.entry(path.into()).or_default(), class);
    }

    pub fn set_metadata(&mut self, class: ClassId, metadata: ComponentMetadata) {
        self.metadata.insert(class, metadata);
    }

    /// Tag every class whose first call decorator named `callee` (by exact
    /// source text) as a component. Returns the number of classes tagged.
    pub fn mark_components(&mut self, callee: &str) -> usize {
        let mut found = Vec::new();
        for source in self.sources.values() {
            for class in source.classes() {
                let index = class.decorators.iter().position(|decorator| {
                    matches!(
                        &decorator.expression,
                        DecoratorExpr::Call(call) if source.slice(call.callee) == Some(callee)
                    )
                });
                if let Some(index) = index {
                    found.push((class.id, ComponentMetadata::component(index)));
                }
            }
        }
        let count = found.len();
        self.metadata.extend(found);
        count
    }
}

fn push_unique(classes: &mut Vec<ClassId>, class: ClassId) {
    if !classes.contains(&class) {
        classes.push(class);
    }
}

impl ProgramInspector for InMemoryProgram {
    fn components_with_template_file(&self, path: &str) -> Vec<ClassId> {
        self.template_files.get(path).cloned().unwrap_or_default()
    }

    fn components_with_style_file(&self, path: &str) -> Vec<ClassId> {
        self.style_files.get(path).cloned().unwrap_or_default()
    }

    fn source_file(&self, path: &str) -> Option<&SourceVersion> {
        self.sources.get(path)
    }

    fn component_metadata(&self, class: &ClassDecl) -> Option<ComponentMetadata> {
        self.metadata.get(&class.id).copied()
    }
}
