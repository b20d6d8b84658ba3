use crate::{AsValue, Binding, quote};
use std::marker::PhantomData;

/// A fragment of SQL: a template string holding `?` placeholders plus the
/// ordered parameter bindings that fill them.
///
/// `T` is the logical result type of the fragment. It is carried only as a
/// phantom parameter so composition is checked statically; the runtime
/// representation is identical for every `T`, and the `fn() -> T` spelling
/// keeps the type `Send + Sync` regardless of `T`.
///
/// Expressions are immutable values: every composition operator allocates a
/// fresh one and never mutates its operands. Invariant, preserved by all of
/// [`join`](crate::join), [`infix`](crate::infix), [`prefix`](crate::prefix)
/// and [`wrap`](crate::wrap) at any nesting depth: the number of
/// placeholders in the template equals the number of bindings.
#[derive(Debug)]
pub struct Expression<T = ()> {
    template: String,
    bindings: Vec<Binding>,
    result: PhantomData<fn() -> T>,
}

impl<T> Expression<T> {
    /// Build from raw parts. The caller is responsible for keeping the
    /// placeholder count equal to the bindings length.
    pub fn new(template: impl Into<String>, bindings: Vec<Binding>) -> Self {
        Self {
            template: template.into(),
            bindings,
            result: PhantomData,
        }
    }

    /// A fragment embedded verbatim into the SQL text, e.g. `*`.
    pub fn literal(template: impl Into<String>) -> Self {
        Self::new(template, Vec::new())
    }

    /// A quoted identifier reference, e.g. a column or table name.
    pub fn identifier(name: &str) -> Self {
        Self::literal(quote(name, '"'))
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Hand the fragment to the execution layer: the template to prepare
    /// plus the bindings to attach positionally, in order, skipping
    /// [`Binding::Void`] slots.
    pub fn into_parts(self) -> (String, Vec<Binding>) {
        (self.template, self.bindings)
    }

    /// Reinterpret the logical result type without touching the fragment.
    pub fn retyped<U>(self) -> Expression<U> {
        Expression::new(self.template, self.bindings)
    }
}

impl<T: AsValue> Expression<T> {
    /// A single `?` placeholder carrying `value` as its parameter.
    pub fn value(value: &T) -> Self {
        Self::new("?", vec![Binding::Value(value.as_value())])
    }
}

impl<T> Clone for Expression<T> {
    fn clone(&self) -> Self {
        Self::new(self.template.clone(), self.bindings.clone())
    }
}

impl<T> PartialEq for Expression<T> {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template && self.bindings == other.bindings
    }
}

/// Anything reducible to a template / bindings pair: expressions of any
/// result type, plus native values that bind as a single parameter.
pub trait Expressible {
    fn expression(&self) -> Expression;
}

impl<T> Expressible for Expression<T> {
    fn expression(&self) -> Expression {
        Expression::new(self.template.clone(), self.bindings.clone())
    }
}
