//! Top-level statement tree of one source file.
//!
//! The tree keeps only as much structure as the hot-update analyzer looks
//! at: statements, class declarations, decorators and the object literals
//! passed to them. Everything else is an opaque span.

use std::fmt;

use smallvec::SmallVec;

use crate::{Modifier, ModifierFlags, Span, Spanned};

/// Identity of a class declaration within the program that produced it.
///
/// Ids are only meaningful relative to one program. The analyzer reports
/// candidates by the id of the class in the updated program.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ClassId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class#{}", self.0)
    }
}

/// An identifier with its source text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

impl Ident {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Ident {
            text: text.into(),
            span,
        }
    }
}

/// A delimited list of nodes.
///
/// `span` covers the whole list, including separators and trivia between
/// items, so that comparing the list as a unit catches edits that fall
/// between its items.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeList<T> {
    pub span: Span,
    pub items: Vec<T>,
}

impl<T> NodeList<T> {
    pub fn new(span: Span, items: Vec<T>) -> Self {
        NodeList { span, items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A top-level statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    pub span: Span,
    pub kind: StatementKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementKind {
    Class(Box<ClassDecl>),
    /// Imports, variables, functions, interfaces, ...
    Other,
}

impl Statement {
    pub fn other(span: Span) -> Self {
        Statement {
            span,
            kind: StatementKind::Other,
        }
    }

    pub fn class(class: ClassDecl) -> Self {
        Statement {
            span: class.span,
            kind: StatementKind::Class(Box::new(class)),
        }
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match &self.kind {
            StatementKind::Class(class) => Some(class.as_ref()),
            StatementKind::Other => None,
        }
    }
}

/// A class declaration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub id: ClassId,
    /// Covers decorators through the closing brace.
    pub span: Span,
    /// `None` for `export default class { .. }`.
    pub name: Option<Ident>,
    pub decorators: Vec<Decorator>,
    pub modifiers: SmallVec<[Modifier; 2]>,
    /// `<T, U extends Base>`
    pub type_params: Option<NodeList<Span>>,
    /// `extends A implements B, C`
    pub heritage_clauses: Option<NodeList<HeritageClause>>,
    /// Member list between the braces.
    pub members: NodeList<Span>,
}

impl ClassDecl {
    pub fn name_text(&self) -> Option<&str> {
        self.name.as_ref().map(|name| name.text.as_str())
    }

    /// Modifier kinds folded into an unordered set.
    pub fn modifier_flags(&self) -> ModifierFlags {
        self.modifiers
            .iter()
            .fold(ModifierFlags::empty(), |flags, modifier| {
                flags | modifier.kind.flag()
            })
    }

    pub fn heritage_span(&self) -> Option<Span> {
        self.heritage_clauses.as_ref().map(|list| list.span)
    }

    pub fn type_params_span(&self) -> Option<Span> {
        self.type_params.as_ref().map(|list| list.span)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeritageKind {
    Extends,
    Implements,
}

impl HeritageKind {
    pub fn keyword(self) -> &'static str {
        match self {
            HeritageKind::Extends => "extends",
            HeritageKind::Implements => "implements",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeritageClause {
    pub kind: HeritageKind,
    pub span: Span,
}

/// A decorator application: `@expr`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decorator {
    pub span: Span,
    pub expression: DecoratorExpr,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecoratorExpr {
    /// `@Component({ .. })`
    Call(CallExpr),
    /// `@Injectable`, `@ns.Thing`, ...
    Other(Span),
}

impl Decorator {
    pub fn call(&self) -> Option<&CallExpr> {
        match &self.expression {
            DecoratorExpr::Call(call) => Some(call),
            DecoratorExpr::Other(_) => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    pub span: Span,
    pub callee: Span,
    pub arguments: NodeList<Expr>,
}

impl CallExpr {
    /// The argument if the call has exactly one and it is an object literal.
    pub fn single_object_argument(&self) -> Option<&ObjectLiteral> {
        match self.arguments.items.as_slice() {
            [argument] => argument.as_object(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    ObjectLiteral(ObjectLiteral),
    Other,
}

impl Expr {
    pub fn other(span: Span) -> Self {
        Expr {
            span,
            kind: ExprKind::Other,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectLiteral> {
        match &self.kind {
            ExprKind::ObjectLiteral(object) => Some(object),
            ExprKind::Other => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectLiteral {
    pub properties: Vec<ObjectProperty>,
}

/// One entry of an object literal, in declaration order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectProperty {
    pub span: Span,
    pub kind: PropertyKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    /// `name: initializer`
    Assignment {
        name: PropertyName,
        initializer: Expr,
    },
    /// `name`
    Shorthand(Ident),
    /// `...expr`
    Spread(Expr),
    /// `name() { .. }`, `get name() { .. }`
    Method { name: PropertyName },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyName {
    Identifier(Ident),
    /// Text holds the unquoted value; the span includes the quotes.
    StringLiteral(Ident),
    NumericLiteral(Ident),
    /// `[expr]`
    Computed(Span),
}

impl PropertyName {
    /// The static name, or `None` for computed names.
    pub fn text(&self) -> Option<&str> {
        match self {
            PropertyName::Identifier(ident)
            | PropertyName::StringLiteral(ident)
            | PropertyName::NumericLiteral(ident) => Some(&ident.text),
            PropertyName::Computed(_) => None,
        }
    }
}

impl Spanned for PropertyName {
    fn span(&self) -> Span {
        match self {
            PropertyName::Identifier(ident)
            | PropertyName::StringLiteral(ident)
            | PropertyName::NumericLiteral(ident) => ident.span,
            PropertyName::Computed(span) => *span,
        }
    }
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for ClassDecl {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Decorator {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for ObjectProperty {
    fn span(&self) -> Span {
        self.span
    }
}
