//! Assemble a `SourceVersion` from declarative pieces.
//!
//! Front ends that already have a tree convert it directly; this builder is
//! for callers that want to describe a file and have the text and every span
//! laid out for them. The emitted text is TypeScript-shaped:
//!
//! ```text
//! import { Component } from '@angular/core';
//! @Component({
//!   selector: 'app-foo',
//!   template: '<p>A</p>',
//! })
//! export class Foo<T> extends Base implements OnInit {
//!   value = 1;
//! }
//! ```
//!
//! Statements are separated by a single newline. Spans exclude surrounding
//! whitespace, except the member list, which covers everything between the
//! braces.

use smallvec::SmallVec;

use crate::{
    CallExpr, ClassDecl, ClassId, Decorator, DecoratorExpr, Expr, ExprKind, HeritageClause,
    HeritageKind, Ident, Modifier, ModifierKind, NodeList, ObjectLiteral, ObjectProperty,
    PropertyKind, PropertyName, SourceError, SourceVersion, Span, Statement,
};

/// Description of a class declaration.
#[derive(Clone, Debug, Default)]
pub struct ClassSpec {
    name: Option<String>,
    decorators: Vec<DecoratorSpec>,
    modifiers: Vec<ModifierKind>,
    type_params: Vec<String>,
    heritage: Vec<(HeritageKind, String)>,
    members: Vec<String>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        ClassSpec {
            name: Some(name.into()),
            ..ClassSpec::default()
        }
    }

    /// `export default class { .. }`
    pub fn anonymous() -> Self {
        ClassSpec::default()
    }

    /// A class decorated with `@Component(metadata)`.
    pub fn component(name: impl Into<String>, metadata: ObjectSpec) -> Self {
        ClassSpec::new(name).decorator(DecoratorSpec::component(metadata))
    }

    #[must_use]
    pub fn decorator(mut self, decorator: DecoratorSpec) -> Self {
        self.decorators.push(decorator);
        self
    }

    #[must_use]
    pub fn modifier(mut self, kind: ModifierKind) -> Self {
        self.modifiers.push(kind);
        self
    }

    #[must_use]
    pub fn export(self) -> Self {
        self.modifier(ModifierKind::Export)
    }

    #[must_use]
    pub fn type_param(mut self, param: impl Into<String>) -> Self {
        self.type_params.push(param.into());
        self
    }

    #[must_use]
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.heritage.push((HeritageKind::Extends, base.into()));
        self
    }

    #[must_use]
    pub fn implements(mut self, interfaces: impl Into<String>) -> Self {
        self.heritage.push((HeritageKind::Implements, interfaces.into()));
        self
    }

    #[must_use]
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }
}

/// Description of a decorator application.
#[derive(Clone, Debug)]
pub enum DecoratorSpec {
    /// `@callee(arg, ..)`
    Call {
        callee: String,
        arguments: Vec<ExprSpec>,
    },
    /// `@expr`
    Bare(String),
}

impl DecoratorSpec {
    pub fn call(callee: impl Into<String>, arguments: Vec<ExprSpec>) -> Self {
        DecoratorSpec::Call {
            callee: callee.into(),
            arguments,
        }
    }

    pub fn component(metadata: ObjectSpec) -> Self {
        DecoratorSpec::call("Component", vec![ExprSpec::Object(metadata)])
    }

    pub fn bare(expr: impl Into<String>) -> Self {
        DecoratorSpec::Bare(expr.into())
    }
}

/// Description of an expression.
#[derive(Clone, Debug)]
pub enum ExprSpec {
    Object(ObjectSpec),
    /// Emitted verbatim as an opaque expression.
    Raw(String),
}

impl ExprSpec {
    pub fn raw(text: impl Into<String>) -> Self {
        ExprSpec::Raw(text.into())
    }
}

/// Description of an object literal.
#[derive(Clone, Debug, Default)]
pub struct ObjectSpec {
    properties: Vec<PropertySpec>,
}

#[derive(Clone, Debug)]
pub enum PropertySpec {
    Assignment { name: NameSpec, value: ExprSpec },
    Shorthand(String),
    Spread(String),
    Method { name: NameSpec, body: String },
}

#[derive(Clone, Debug)]
pub enum NameSpec {
    Identifier(String),
    /// Emitted in single quotes.
    StringLiteral(String),
    NumericLiteral(String),
    /// Emitted in brackets.
    Computed(String),
}

impl ObjectSpec {
    pub fn new() -> Self {
        ObjectSpec::default()
    }

    /// `name: value` with an identifier name and an opaque value.
    #[must_use]
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(PropertySpec::Assignment {
            name: NameSpec::Identifier(name.into()),
            value: ExprSpec::Raw(value.into()),
        })
    }

    /// `'name': value`
    #[must_use]
    pub fn quoted_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(PropertySpec::Assignment {
            name: NameSpec::StringLiteral(name.into()),
            value: ExprSpec::Raw(value.into()),
        })
    }

    /// `[key]: value`
    #[must_use]
    pub fn computed_field(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(PropertySpec::Assignment {
            name: NameSpec::Computed(key.into()),
            value: ExprSpec::Raw(value.into()),
        })
    }

    #[must_use]
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        self.property(PropertySpec::Shorthand(name.into()))
    }

    #[must_use]
    pub fn spread(self, expr: impl Into<String>) -> Self {
        self.property(PropertySpec::Spread(expr.into()))
    }

    #[must_use]
    pub fn method(self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.property(PropertySpec::Method {
            name: NameSpec::Identifier(name.into()),
            body: body.into(),
        })
    }

    #[must_use]
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }
}

/// Builds a `SourceVersion` statement by statement.
///
/// # Examples
///
/// ```
/// use hmr_ir::{ClassSpec, ObjectSpec, SourceBuilder};
///
/// let mut builder = SourceBuilder::new("src/app/foo.ts");
/// builder.statement("import { Component } from '@angular/core';");
/// let metadata = ObjectSpec::new().field("template", "'<p>A</p>'");
/// let foo = builder.class(&ClassSpec::component("Foo", metadata).export());
/// let source = builder.finish().unwrap();
///
/// assert_eq!(source.statements().len(), 2);
/// assert_eq!(source.class(foo).and_then(|c| c.name_text()), Some("Foo"));
/// ```
#[derive(Debug)]
pub struct SourceBuilder {
    path: String,
    text: String,
    statements: Vec<Statement>,
    next_class: u32,
}

impl SourceBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        SourceBuilder {
            path: path.into(),
            text: String::new(),
            statements: Vec::new(),
            next_class: 0,
        }
    }

    /// Start numbering class ids at `first`.
    ///
    /// Programs built from several files need distinct ids per class.
    #[must_use]
    pub fn first_class_id(mut self, first: u32) -> Self {
        self.next_class = first;
        self
    }

    /// Append a non-class statement, emitted verbatim.
    pub fn statement(&mut self, text: &str) -> &mut Self {
        self.separate();
        let span = self.push(text);
        self.statements.push(Statement::other(span));
        self
    }

    /// Append a class declaration and return its id.
    pub fn class(&mut self, spec: &ClassSpec) -> ClassId {
        self.separate();
        let id = ClassId::new(self.next_class);
        self.next_class = self.next_class.saturating_add(1);
        let class = self.emit_class(id, spec);
        self.statements.push(Statement::class(class));
        id
    }

    /// Validate the assembled spans and produce the version.
    pub fn finish(self) -> Result<SourceVersion, SourceError> {
        SourceVersion::new(self.path, self.text, self.statements)
    }

    fn separate(&mut self) {
        if !self.statements.is_empty() {
            self.text.push('\n');
        }
    }

    /// Current offset. Saturates; `finish` rejects oversized text.
    fn pos(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    fn push(&mut self, text: &str) -> Span {
        let start = self.pos();
        self.text.push_str(text);
        Span::new(start, self.pos())
    }

    fn emit_class(&mut self, id: ClassId, spec: &ClassSpec) -> ClassDecl {
        let start = self.pos();

        let decorators = spec
            .decorators
            .iter()
            .map(|decorator| {
                let decorator = self.emit_decorator(decorator);
                self.text.push('\n');
                decorator
            })
            .collect();

        let mut modifiers = SmallVec::new();
        for kind in &spec.modifiers {
            modifiers.push(Modifier::new(*kind, self.push(kind.keyword())));
            self.text.push(' ');
        }

        self.text.push_str("class");
        let name = spec.name.as_ref().map(|name| {
            self.text.push(' ');
            Ident::new(name.clone(), self.push(name))
        });

        let type_params = if spec.type_params.is_empty() {
            None
        } else {
            let list_start = self.pos();
            self.text.push('<');
            let params = self.emit_separated(&spec.type_params, ", ");
            self.text.push('>');
            Some(NodeList::new(Span::new(list_start, self.pos()), params))
        };

        let heritage_clauses = if spec.heritage.is_empty() {
            None
        } else {
            self.text.push(' ');
            let list_start = self.pos();
            let mut clauses = Vec::with_capacity(spec.heritage.len());
            for (i, (kind, target)) in spec.heritage.iter().enumerate() {
                if i > 0 {
                    self.text.push(' ');
                }
                let clause_start = self.pos();
                self.text.push_str(kind.keyword());
                self.text.push(' ');
                self.text.push_str(target);
                clauses.push(HeritageClause {
                    kind: *kind,
                    span: Span::new(clause_start, self.pos()),
                });
            }
            Some(NodeList::new(Span::new(list_start, self.pos()), clauses))
        };

        self.text.push_str(" {");
        let members_start = self.pos();
        let mut members = Vec::with_capacity(spec.members.len());
        for member in &spec.members {
            self.text.push_str("\n  ");
            members.push(self.push(member));
        }
        if !members.is_empty() {
            self.text.push('\n');
        }
        let members = NodeList::new(Span::new(members_start, self.pos()), members);
        self.text.push('}');

        ClassDecl {
            id,
            span: Span::new(start, self.pos()),
            name,
            decorators,
            modifiers,
            type_params,
            heritage_clauses,
            members,
        }
    }

    fn emit_separated(&mut self, items: &[String], separator: &str) -> Vec<Span> {
        let mut spans = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text.push_str(separator);
            }
            spans.push(self.push(item));
        }
        spans
    }

    fn emit_decorator(&mut self, spec: &DecoratorSpec) -> Decorator {
        let start = self.pos();
        self.text.push('@');
        let expression = match spec {
            DecoratorSpec::Call { callee, arguments } => {
                let callee = self.push(callee);
                self.text.push('(');
                let args_start = self.pos();
                let mut args = Vec::with_capacity(arguments.len());
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.text.push_str(", ");
                    }
                    args.push(self.emit_expr(argument, 0));
                }
                let arguments = NodeList::new(Span::new(args_start, self.pos()), args);
                self.text.push(')');
                DecoratorExpr::Call(CallExpr {
                    span: Span::new(callee.start, self.pos()),
                    callee,
                    arguments,
                })
            }
            DecoratorSpec::Bare(expr) => DecoratorExpr::Other(self.push(expr)),
        };
        Decorator {
            span: Span::new(start, self.pos()),
            expression,
        }
    }

    fn emit_expr(&mut self, spec: &ExprSpec, depth: usize) -> Expr {
        match spec {
            ExprSpec::Raw(text) => Expr::other(self.push(text)),
            ExprSpec::Object(object) => {
                let start = self.pos();
                let object = self.emit_object(object, depth);
                Expr {
                    span: Span::new(start, self.pos()),
                    kind: ExprKind::ObjectLiteral(object),
                }
            }
        }
    }

    fn emit_object(&mut self, spec: &ObjectSpec, depth: usize) -> ObjectLiteral {
        if spec.properties.is_empty() {
            self.text.push_str("{}");
            return ObjectLiteral::default();
        }

        let indent = "  ".repeat(depth + 1);
        self.text.push('{');
        let mut properties = Vec::with_capacity(spec.properties.len());
        for property in &spec.properties {
            self.text.push('\n');
            self.text.push_str(&indent);
            properties.push(self.emit_property(property, depth + 1));
            self.text.push(',');
        }
        self.text.push('\n');
        self.text.push_str(&"  ".repeat(depth));
        self.text.push('}');
        ObjectLiteral { properties }
    }

    fn emit_property(&mut self, spec: &PropertySpec, depth: usize) -> ObjectProperty {
        let start = self.pos();
        let kind = match spec {
            PropertySpec::Assignment { name, value } => {
                let name = self.emit_name(name);
                self.text.push_str(": ");
                let initializer = self.emit_expr(value, depth);
                PropertyKind::Assignment { name, initializer }
            }
            PropertySpec::Shorthand(name) => {
                PropertyKind::Shorthand(Ident::new(name.clone(), self.push(name)))
            }
            PropertySpec::Spread(expr) => {
                self.text.push_str("...");
                PropertyKind::Spread(Expr::other(self.push(expr)))
            }
            PropertySpec::Method { name, body } => {
                let name = self.emit_name(name);
                self.text.push_str("() { ");
                self.text.push_str(body);
                self.text.push_str(" }");
                PropertyKind::Method { name }
            }
        };
        ObjectProperty {
            span: Span::new(start, self.pos()),
            kind,
        }
    }

    fn emit_name(&mut self, spec: &NameSpec) -> PropertyName {
        match spec {
            NameSpec::Identifier(name) => {
                PropertyName::Identifier(Ident::new(name.clone(), self.push(name)))
            }
            NameSpec::NumericLiteral(name) => {
                PropertyName::NumericLiteral(Ident::new(name.clone(), self.push(name)))
            }
            NameSpec::StringLiteral(name) => {
                let start = self.pos();
                self.text.push('\'');
                self.text.push_str(name);
                self.text.push('\'');
                PropertyName::StringLiteral(Ident::new(name.clone(), Span::new(start, self.pos())))
            }
            NameSpec::Computed(key) => {
                let start = self.pos();
                self.text.push('[');
                self.text.push_str(key);
                self.text.push(']');
                PropertyName::Computed(Span::new(start, self.pos()))
            }
        }
    }
}
