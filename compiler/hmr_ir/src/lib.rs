//! HMR IR - parsed program model for hot-update analysis
//!
//! This crate contains the data the hot-update analyzer reads:
//! - Spans for source locations
//! - `SourceVersion`: one file's text and its top-level statements
//! - Class declarations, decorators and object literals
//! - The cross-version text comparison every change check goes through
//! - `SourceBuilder` for assembling versions with exact spans
//!
//! # Design Philosophy
//!
//! - **Only what the analyzer looks at**: anything below the statement level
//!   that is not part of a class header or a decorator argument is an opaque
//!   span.
//! - **Spans never cross versions**: two versions of one file share no
//!   buffer, so equality of regions is decided by [`text::ranges_equal`] and
//!   nowhere else.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod builder;
mod modifier;
mod source;
mod span;
pub mod text;
mod traits;

pub use ast::{
    CallExpr, ClassDecl, ClassId, Decorator, DecoratorExpr, Expr, ExprKind, HeritageClause,
    HeritageKind, Ident, NodeList, ObjectLiteral, ObjectProperty, PropertyKind, PropertyName,
    Statement, StatementKind,
};
pub use builder::{
    ClassSpec, DecoratorSpec, ExprSpec, NameSpec, ObjectSpec, PropertySpec, SourceBuilder,
};
pub use modifier::{Modifier, ModifierFlags, ModifierKind};
pub use source::{SourceError, SourceVersion};
pub use span::{Span, SpanError};
pub use traits::Spanned;
