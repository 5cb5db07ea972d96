use super::*;
use crate::{Ident, NodeList};
use pretty_assertions::assert_eq;

fn class_at(span: Span, members: Span) -> Statement {
    Statement::class(ClassDecl {
        id: ClassId::new(0),
        span,
        name: None,
        decorators: Vec::new(),
        modifiers: smallvec::SmallVec::new(),
        type_params: None,
        heritage_clauses: None,
        members: NodeList::new(members, Vec::new()),
    })
}

#[test]
fn accepts_in_bounds_statements() {
    let text = "let a = 1;\nclass {}";
    let result = SourceVersion::new(
        "a.ts",
        text,
        vec![
            Statement::other(Span::new(0, 10)),
            class_at(Span::new(11, 19), Span::new(18, 18)),
        ],
    );
    let source = match result {
        Ok(source) => source,
        Err(err) => panic!("expected valid source: {err}"),
    };
    assert_eq!(source.statements().len(), 2);
    assert_eq!(source.slice(Span::new(0, 10)), Some("let a = 1;"));
    assert_eq!(source.classes().count(), 1);
    assert_eq!(source.slice(Span::new(5, 50)), None);
}

#[test]
fn rejects_statement_past_end() {
    let result = SourceVersion::new("a.ts", "let a;", vec![Statement::other(Span::new(0, 7))]);
    assert_eq!(
        result,
        Err(SourceError::OutOfBounds {
            span: Span::new(0, 7),
            len: 6
        })
    );
}

#[test]
fn rejects_nested_span_past_end() {
    // The statement itself fits; the member list does not.
    let result = SourceVersion::new(
        "a.ts",
        "class {}",
        vec![class_at(Span::new(0, 8), Span::new(7, 12))],
    );
    assert!(matches!(result, Err(SourceError::OutOfBounds { .. })));
}

#[test]
fn rejects_inverted_span() {
    let result = SourceVersion::new("a.ts", "let a;", vec![Statement::other(Span::new(4, 2))]);
    assert_eq!(
        result,
        Err(SourceError::InvertedSpan {
            span: Span::new(4, 2)
        })
    );
}

#[test]
fn rejects_split_character() {
    // 'é' occupies bytes 1..3.
    let result = SourceVersion::new("a.ts", "xé;", vec![Statement::other(Span::new(0, 2))]);
    assert!(matches!(result, Err(SourceError::NotCharBoundary { .. })));
}

#[test]
fn reports_first_offending_span() {
    let mut class = class_at(Span::new(0, 8), Span::new(7, 7));
    if let StatementKind::Class(decl) = &mut class.kind {
        decl.name = Some(Ident::new("Foo", Span::new(20, 23)));
    }
    let result = SourceVersion::new(
        "a.ts",
        "class {}",
        vec![class, Statement::other(Span::new(30, 40))],
    );
    assert_eq!(
        result,
        Err(SourceError::OutOfBounds {
            span: Span::new(20, 23),
            len: 8
        })
    );
}

#[test]
fn error_messages() {
    let err = SourceError::OutOfBounds {
        span: Span::new(0, 7),
        len: 6,
    };
    assert_eq!(err.to_string(), "span 0..7 is outside the 6-byte source text");
    assert_eq!(
        SourceError::InvertedSpan {
            span: Span::new(4, 2)
        }
        .to_string(),
        "span 4..2 ends before it starts"
    );
}
