//! Semantic model types and the [`SemanticModel`] trait.
//!
//! The completion engine is a pure read-only computation over a semantic
//! model supplied by the caller for the duration of one request. This module
//! defines the data the engine consumes ([`Symbol`], [`Type`], [`Scope`],
//! [`Package`]) and the query interface the model must provide.
//!
//! The model owns all data; the engine borrows through arena handles and
//! never mutates. Because every query takes `&self`, concurrent completion
//! requests over one snapshot are safe by construction.

mod scope;
mod symbol;
mod types;

use smol_str::SmolStr;

use crate::base::{NodeId, PackageId, ScopeId, SymbolId, TypeId};

pub use scope::Scope;
pub use symbol::{Modifiers, Symbol, SymbolKind, Visibility};
pub use types::{Type, TypeKind};

/// A package: a named container of top-level type declarations.
#[derive(Clone, Debug, Default)]
pub struct Package {
    pub name: SmolStr,
    /// Top-level members in declaration order.
    pub members: Vec<SymbolId>,
}

impl Package {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }
}

/// Query interface of the external semantic model.
///
/// Everything the completion engine needs from the host's semantic analysis:
/// symbol/type resolution for syntax positions, member enumeration,
/// accessibility judgment, package membership, documentation, and display
/// rendering. Implementations must answer consistently for the lifetime of
/// one request; the engine performs no caching of its own.
pub trait SemanticModel {
    /// Resolve the symbol a syntax position denotes, if any.
    fn resolve_symbol(&self, node: NodeId) -> Option<SymbolId>;

    /// Resolve the semantic type of a syntax position, if any.
    fn resolve_type(&self, node: NodeId) -> Option<TypeId>;

    /// Dereference a symbol handle.
    fn symbol(&self, id: SymbolId) -> &Symbol;

    /// Dereference a type handle.
    fn type_of(&self, id: TypeId) -> &Type;

    /// Dereference a scope handle.
    fn scope(&self, id: ScopeId) -> &Scope;

    /// All members of a declared type, declared and inherited, with
    /// overrides collapsed per host-language rules. Non-declared types
    /// have no members.
    fn all_members(&self, ty: TypeId) -> Vec<SymbolId>;

    /// Whether `symbol`, accessed through declared type `through`, is
    /// accessible from `from`.
    fn is_accessible(&self, from: ScopeId, symbol: SymbolId, through: TypeId) -> bool;

    /// The package enclosing a symbol, walking out through nested
    /// declarations.
    fn package_of(&self, symbol: SymbolId) -> Option<PackageId>;

    /// Top-level members of a package, in declaration order.
    fn package_members(&self, package: PackageId) -> Vec<SymbolId>;

    /// Documentation string attached to a symbol, if any.
    fn doc_comment(&self, symbol: SymbolId) -> Option<&str>;

    /// Short display form of a type, e.g. `int` or `List`.
    fn short_type_display(&self, ty: TypeId) -> SmolStr;

    /// Full signature display of an executable, e.g. `render(int, Color)`.
    fn method_signature_display(&self, symbol: SymbolId) -> SmolStr;

    /// Display name of a constructor: the constructed type's simple name.
    fn constructor_display_name(&self, symbol: SymbolId) -> SmolStr;
}
