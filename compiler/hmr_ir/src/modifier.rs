//! Declaration modifiers.

use bitflags::bitflags;

use crate::{Span, Spanned};

/// Keyword modifiers that may precede a declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierKind {
    Export,
    Default,
    Abstract,
    Declare,
    Const,
    Async,
    Public,
    Private,
    Protected,
    Readonly,
    Static,
    Override,
    Accessor,
    In,
    Out,
}

impl ModifierKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ModifierKind::Export => "export",
            ModifierKind::Default => "default",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Declare => "declare",
            ModifierKind::Const => "const",
            ModifierKind::Async => "async",
            ModifierKind::Public => "public",
            ModifierKind::Private => "private",
            ModifierKind::Protected => "protected",
            ModifierKind::Readonly => "readonly",
            ModifierKind::Static => "static",
            ModifierKind::Override => "override",
            ModifierKind::Accessor => "accessor",
            ModifierKind::In => "in",
            ModifierKind::Out => "out",
        }
    }

    pub fn flag(self) -> ModifierFlags {
        match self {
            ModifierKind::Export => ModifierFlags::EXPORT,
            ModifierKind::Default => ModifierFlags::DEFAULT,
            ModifierKind::Abstract => ModifierFlags::ABSTRACT,
            ModifierKind::Declare => ModifierFlags::DECLARE,
            ModifierKind::Const => ModifierFlags::CONST,
            ModifierKind::Async => ModifierFlags::ASYNC,
            ModifierKind::Public => ModifierFlags::PUBLIC,
            ModifierKind::Private => ModifierFlags::PRIVATE,
            ModifierKind::Protected => ModifierFlags::PROTECTED,
            ModifierKind::Readonly => ModifierFlags::READONLY,
            ModifierKind::Static => ModifierFlags::STATIC,
            ModifierKind::Override => ModifierFlags::OVERRIDE,
            ModifierKind::Accessor => ModifierFlags::ACCESSOR,
            ModifierKind::In => ModifierFlags::IN,
            ModifierKind::Out => ModifierFlags::OUT,
        }
    }
}

bitflags! {
    /// Unordered set of modifier kinds.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ModifierFlags: u16 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const ABSTRACT = 1 << 2;
        const DECLARE = 1 << 3;
        const CONST = 1 << 4;
        const ASYNC = 1 << 5;
        const PUBLIC = 1 << 6;
        const PRIVATE = 1 << 7;
        const PROTECTED = 1 << 8;
        const READONLY = 1 << 9;
        const STATIC = 1 << 10;
        const OVERRIDE = 1 << 11;
        const ACCESSOR = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;
    }
}

/// A modifier keyword at a source location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub kind: ModifierKind,
    pub span: Span,
}

impl Modifier {
    pub const fn new(kind: ModifierKind, span: Span) -> Self {
        Modifier { kind, span }
    }
}

impl Spanned for Modifier {
    fn span(&self) -> Span {
        self.span
    }
}
