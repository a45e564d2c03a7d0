//! Lexical scopes: nodes in the chain of nested lexical contexts.

use crate::base::{ScopeId, SymbolId};

/// A lexical scope at a point in a program, chained to its enclosing scope.
///
/// Scopes are built by the host's semantic analysis and are immutable during
/// resolution; the engine only traverses the `parent` back-reference.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    /// The class declaration this scope sits in, if any.
    pub enclosing_class: Option<SymbolId>,
    /// The innermost executable (method or constructor) this scope sits in,
    /// if any. Block scopes nested in a method carry the same executable.
    pub enclosing_method: Option<SymbolId>,
    /// Locally declared symbols in declaration order. The outermost scope of
    /// a non-static method also carries the receiver pseudo-locals named
    /// `this` and `super`.
    pub locals: Vec<SymbolId>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: SymbolId) -> Self {
        self.enclosing_class = Some(class);
        self
    }

    pub fn with_method(mut self, method: SymbolId) -> Self {
        self.enclosing_method = Some(method);
        self
    }

    pub fn with_locals(mut self, locals: impl IntoIterator<Item = SymbolId>) -> Self {
        self.locals = locals.into_iter().collect();
        self
    }
}
