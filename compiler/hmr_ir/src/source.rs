//! One file's parsed text at one point in time.

use crate::{
    ClassDecl, ClassId, DecoratorExpr, Expr, ExprKind, PropertyKind, Span, Spanned, Statement,
    StatementKind,
};

/// Error when a statement tree does not fit the text it claims to describe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("source text of {len} bytes exceeds u32::MAX")]
    TextTooLarge { len: usize },
    #[error("span {span} ends before it starts")]
    InvertedSpan { span: Span },
    #[error("span {span} is outside the {len}-byte source text")]
    OutOfBounds { span: Span, len: usize },
    #[error("span {span} does not fall on a character boundary")]
    NotCharBoundary { span: Span },
}

/// Immutable parsed representation of one file's text.
///
/// Two versions of the same path are unrelated values; spans from one are
/// never offsets into the other.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceVersion {
    path: String,
    text: String,
    statements: Vec<Statement>,
}

impl SourceVersion {
    /// Create a version after checking that every span in `statements`
    /// addresses a character range of `text`.
    pub fn new(
        path: impl Into<String>,
        text: impl Into<String>,
        statements: Vec<Statement>,
    ) -> Result<Self, SourceError> {
        let text = text.into();
        if u32::try_from(text.len()).is_err() {
            return Err(SourceError::TextTooLarge { len: text.len() });
        }

        let mut result = Ok(());
        for statement in &statements {
            visit_statement_spans(statement, &mut |span| {
                if result.is_ok() {
                    result = check_span(&text, span);
                }
            });
        }
        result?;

        Ok(SourceVersion {
            path: path.into(),
            text,
            statements,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Text under `span`, if it is in bounds.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.to_range())
    }

    /// Top-level class declarations in statement order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.statements.iter().filter_map(Statement::as_class)
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes().find(|class| class.id == id)
    }
}

fn check_span(text: &str, span: Span) -> Result<(), SourceError> {
    if span.is_inverted() {
        return Err(SourceError::InvertedSpan { span });
    }
    if span.end as usize > text.len() {
        return Err(SourceError::OutOfBounds {
            span,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(span.start as usize) || !text.is_char_boundary(span.end as usize) {
        return Err(SourceError::NotCharBoundary { span });
    }
    Ok(())
}

fn visit_statement_spans(statement: &Statement, f: &mut impl FnMut(Span)) {
    f(statement.span);
    if let StatementKind::Class(class) = &statement.kind {
        visit_class_spans(class, f);
    }
}

fn visit_class_spans(class: &ClassDecl, f: &mut impl FnMut(Span)) {
    f(class.span);
    if let Some(name) = &class.name {
        f(name.span);
    }
    for decorator in &class.decorators {
        f(decorator.span);
        match &decorator.expression {
            DecoratorExpr::Call(call) => {
                f(call.span);
                f(call.callee);
                f(call.arguments.span);
                for argument in &call.arguments {
                    visit_expr_spans(argument, f);
                }
            }
            DecoratorExpr::Other(span) => f(*span),
        }
    }
    for modifier in &class.modifiers {
        f(modifier.span);
    }
    if let Some(type_params) = &class.type_params {
        f(type_params.span);
        for param in type_params {
            f(*param);
        }
    }
    if let Some(heritage) = &class.heritage_clauses {
        f(heritage.span);
        for clause in heritage {
            f(clause.span);
        }
    }
    f(class.members.span);
    for member in &class.members {
        f(*member);
    }
}

fn visit_expr_spans(expr: &Expr, f: &mut impl FnMut(Span)) {
    f(expr.span);
    let ExprKind::ObjectLiteral(object) = &expr.kind else {
        return;
    };
    for property in &object.properties {
        f(property.span);
        match &property.kind {
            PropertyKind::Assignment { name, initializer } => {
                f(name.span());
                visit_expr_spans(initializer, f);
            }
            PropertyKind::Shorthand(ident) => f(ident.span),
            PropertyKind::Spread(expr) => visit_expr_spans(expr, f),
            PropertyKind::Method { name } => f(name.span()),
        }
    }
}

#[cfg(test)]
mod tests;
