//! Statement-level structural diff of one file.
//!
//! The stale and updated statement lists are aligned by position. Every pair
//! must be byte-identical, except for component classes: there, the
//! metadata object literal gets a field-aware diff ([`crate::metadata`]) and
//! the rest of the class header and body must still be unchanged.

use std::fmt;

use hmr_ir::text::{optional_ranges_equal, ranges_equal};
use hmr_ir::{ClassDecl, ClassId, SourceVersion, Span, Statement};

use crate::metadata::{analyze_metadata, MetadataChange, MetadataIssue};
use crate::ProgramInspector;

/// A change the analyzer cannot hot-apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Unsupported {
    /// Index of the offending statement pair, if the problem is local to one.
    pub statement: Option<usize>,
    pub kind: UnsupportedKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnsupportedKind {
    /// Top-level statements were added or removed.
    StatementCount { stale: usize, updated: usize },
    /// A class declaration became some other statement.
    StatementKind,
    /// Non-class statement, or non-component class, text differs.
    StatementText,
    ClassName,
    Heritage,
    TypeParameters,
    Modifiers,
    /// The class gained or lost decorators.
    DecoratorCount,
    /// More than one decorator is applied to a component class.
    MultipleDecorators,
    /// The metadata decorator index does not name a decorator of the class.
    MetadataDecorator,
    /// The metadata decorator is not a call with one object literal argument.
    DecoratorShape,
    /// The decorator being called changed.
    DecoratorCallee,
    Metadata(MetadataIssue),
    /// Class members changed.
    Members,
}

impl Unsupported {
    const fn at(statement: usize, kind: UnsupportedKind) -> Self {
        Unsupported {
            statement: Some(statement),
            kind,
        }
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnsupportedKind::StatementCount { stale, updated } => {
                write!(f, "statement count changed from {stale} to {updated}")?;
            }
            UnsupportedKind::StatementKind => f.write_str("class declaration replaced")?,
            UnsupportedKind::StatementText => f.write_str("statement text changed")?,
            UnsupportedKind::ClassName => f.write_str("class renamed")?,
            UnsupportedKind::Heritage => f.write_str("heritage clauses changed")?,
            UnsupportedKind::TypeParameters => f.write_str("type parameters changed")?,
            UnsupportedKind::Modifiers => f.write_str("class modifiers changed")?,
            UnsupportedKind::DecoratorCount => f.write_str("decorator count changed")?,
            UnsupportedKind::MultipleDecorators => {
                f.write_str("component class has more than one decorator")?;
            }
            UnsupportedKind::MetadataDecorator => {
                f.write_str("metadata decorator index out of range")?;
            }
            UnsupportedKind::DecoratorShape => {
                f.write_str("component decorator is not a call with one object literal")?;
            }
            UnsupportedKind::DecoratorCallee => f.write_str("decorator callee changed")?,
            UnsupportedKind::Metadata(issue) => write!(f, "{issue}")?,
            UnsupportedKind::Members => f.write_str("class members changed")?,
        }
        if let Some(index) = self.statement {
            write!(f, " (statement {index})")?;
        }
        Ok(())
    }
}

/// Diff two versions of one file.
///
/// Returns the component classes of `updated` whose only changes are to
/// supported metadata fields, or the first change that rules out a hot
/// update for this file.
#[tracing::instrument(level = "debug", skip_all, fields(path = updated.path()))]
pub fn analyze_file<P>(
    stale: &SourceVersion,
    updated: &SourceVersion,
    inspector: &P,
) -> Result<Vec<ClassId>, Unsupported>
where
    P: ProgramInspector + ?Sized,
{
    let (stale_statements, updated_statements) = (stale.statements(), updated.statements());
    if stale_statements.len() != updated_statements.len() {
        return Err(Unsupported {
            statement: None,
            kind: UnsupportedKind::StatementCount {
                stale: stale_statements.len(),
                updated: updated_statements.len(),
            },
        });
    }

    let mut candidates = Vec::new();
    let pairs = stale_statements.iter().zip(updated_statements);
    for (index, (stale_statement, updated_statement)) in pairs.enumerate() {
        let pair = StatementPair {
            index,
            stale,
            updated,
        };
        if let Some(class) = pair.check(stale_statement, updated_statement, inspector)? {
            tracing::debug!(%class, index, "component metadata change is hot-swappable");
            candidates.push(class);
        }
    }
    Ok(candidates)
}

/// One aligned pair of statements and the texts they index.
struct StatementPair<'a> {
    index: usize,
    stale: &'a SourceVersion,
    updated: &'a SourceVersion,
}

impl StatementPair<'_> {
    fn unsupported(&self, kind: UnsupportedKind) -> Unsupported {
        tracing::trace!(index = self.index, ?kind, "unsupported change");
        Unsupported::at(self.index, kind)
    }

    /// Returns the updated class id if the pair is a component class with a
    /// supported metadata change.
    fn check<P>(
        &self,
        stale: &Statement,
        updated: &Statement,
        inspector: &P,
    ) -> Result<Option<ClassId>, Unsupported>
    where
        P: ProgramInspector + ?Sized,
    {
        if let Some(stale_class) = stale.as_class() {
            let Some(updated_class) = updated.as_class() else {
                return Err(self.unsupported(UnsupportedKind::StatementKind));
            };
            self.check_class_header(stale_class, updated_class)?;

            if let Some(meta) = inspector.component_metadata(updated_class) {
                if meta.is_component {
                    return self.check_component(stale_class, updated_class, meta.decorator);
                }
            }
        }

        if self.same_text(stale.span, updated.span) {
            Ok(None)
        } else {
            Err(self.unsupported(UnsupportedKind::StatementText))
        }
    }

    /// Name, heritage, type parameters and modifiers.
    fn check_class_header(
        &self,
        stale: &ClassDecl,
        updated: &ClassDecl,
    ) -> Result<(), Unsupported> {
        if stale.name_text() != updated.name_text() {
            return Err(self.unsupported(UnsupportedKind::ClassName));
        }
        if !optional_ranges_equal(
            self.stale.text(),
            stale.heritage_span(),
            self.updated.text(),
            updated.heritage_span(),
        ) {
            return Err(self.unsupported(UnsupportedKind::Heritage));
        }
        if !optional_ranges_equal(
            self.stale.text(),
            stale.type_params_span(),
            self.updated.text(),
            updated.type_params_span(),
        ) {
            return Err(self.unsupported(UnsupportedKind::TypeParameters));
        }
        if stale.modifiers.len() != updated.modifiers.len()
            || stale.modifier_flags() != updated.modifier_flags()
        {
            return Err(self.unsupported(UnsupportedKind::Modifiers));
        }
        Ok(())
    }

    fn check_component(
        &self,
        stale: &ClassDecl,
        updated: &ClassDecl,
        decorator: usize,
    ) -> Result<Option<ClassId>, Unsupported> {
        if stale.decorators.len() != updated.decorators.len() {
            return Err(self.unsupported(UnsupportedKind::DecoratorCount));
        }
        // Only single-decorator components are diffed.
        if stale.decorators.len() > 1 {
            return Err(self.unsupported(UnsupportedKind::MultipleDecorators));
        }

        let (Some(stale_decorator), Some(updated_decorator)) = (
            stale.decorators.get(decorator),
            updated.decorators.get(decorator),
        ) else {
            return Err(self.unsupported(UnsupportedKind::MetadataDecorator));
        };
        let (Some(stale_call), Some(updated_call)) =
            (stale_decorator.call(), updated_decorator.call())
        else {
            return Err(self.unsupported(UnsupportedKind::DecoratorShape));
        };
        let (Some(stale_metadata), Some(updated_metadata)) = (
            stale_call.single_object_argument(),
            updated_call.single_object_argument(),
        ) else {
            return Err(self.unsupported(UnsupportedKind::DecoratorShape));
        };
        if !self.same_text(stale_call.callee, updated_call.callee) {
            return Err(self.unsupported(UnsupportedKind::DecoratorCallee));
        }

        let change = analyze_metadata(
            stale_metadata,
            self.stale.text(),
            updated_metadata,
            self.updated.text(),
        );
        if let MetadataChange::Unsupported(issue) = change {
            return Err(self.unsupported(UnsupportedKind::Metadata(issue)));
        }

        if !self.same_text(stale.members.span, updated.members.span) {
            return Err(self.unsupported(UnsupportedKind::Members));
        }

        Ok((change == MetadataChange::Supported).then_some(updated.id))
    }

    fn same_text(&self, stale: Span, updated: Span) -> bool {
        ranges_equal(self.stale.text(), stale, self.updated.text(), updated)
    }
}
