//! Symbol sources and the visibility filter.
//!
//! Four independent producers of raw candidate symbols (locals of a method
//! scope, instance members of a type, static members of a type, members of
//! a package), plus the member resolver they share and the accessibility
//! check applied to every candidate stream.

use crate::base::{ScopeId, SymbolId, TypeId};

use super::Completions;

impl<'a> Completions<'a> {
    /// Locals of one method scope, excluding the receiver pseudo-locals.
    pub(super) fn locals(&self, scope: ScopeId) -> Vec<SymbolId> {
        self.model
            .scope(scope)
            .locals
            .iter()
            .copied()
            .filter(|&local| !self.is_this_or_super(local))
            .collect()
    }

    /// The receiver pseudo-locals (`this`/`super`) of the innermost method
    /// scope that carries any.
    pub(super) fn this_and_super(&self, scope: ScopeId) -> Vec<SymbolId> {
        for method_scope in self.method_scopes(scope) {
            let receiver: Vec<SymbolId> = self
                .model
                .scope(method_scope)
                .locals
                .iter()
                .copied()
                .filter(|&local| self.is_this_or_super(local))
                .collect();
            if !receiver.is_empty() {
                return receiver;
            }
        }
        Vec::new()
    }

    /// Non-static members of a class, declared and inherited.
    pub(super) fn instance_members(&self, class: SymbolId) -> Vec<SymbolId> {
        self.type_members(class)
            .into_iter()
            .filter(|&member| !self.model.symbol(member).is_static())
            .collect()
    }

    /// Static members of a class, declared and inherited.
    pub(super) fn static_members(&self, class: SymbolId) -> Vec<SymbolId> {
        self.type_members(class)
            .into_iter()
            .filter(|&member| self.model.symbol(member).is_static())
            .collect()
    }

    /// Top-level members of the package enclosing `class`.
    pub(super) fn package_members(&self, class: SymbolId) -> Vec<SymbolId> {
        match self.model.package_of(class) {
            Some(package) => self.model.package_members(package),
            None => Vec::new(),
        }
    }

    /// Member resolver: all members of a semantic type, declared and
    /// inherited. Only declared types have members.
    pub(super) fn members(&self, ty: TypeId) -> Vec<SymbolId> {
        if self.model.type_of(ty).declared_symbol().is_none() {
            return Vec::new();
        }
        self.model.all_members(ty)
    }

    /// All members of a class declaration's own type.
    fn type_members(&self, class: SymbolId) -> Vec<SymbolId> {
        match self.model.symbol(class).ty {
            Some(ty) => self.members(ty),
            None => Vec::new(),
        }
    }

    /// Whether `element` denotes a type by itself when named in an
    /// expression (class, interface, or enum reference).
    pub(super) fn is_type_symbol(&self, element: SymbolId) -> bool {
        self.model.symbol(element).kind.is_type_declaration()
    }

    /// Accessibility of `element` from `from`, judged against the enclosing
    /// declared type. Symbols whose enclosing element carries no nominal
    /// declared type (array members, locals of an executable) are always
    /// accessible.
    pub(super) fn is_accessible(&self, element: SymbolId, from: ScopeId) -> bool {
        let Some(enclosing) = self.model.symbol(element).enclosing else {
            return true;
        };
        let enclosing_symbol = self.model.symbol(enclosing);
        if !enclosing_symbol.kind.declares_nominal_type() {
            return true;
        }
        match enclosing_symbol.ty {
            Some(through) => self.model.is_accessible(from, element, through),
            None => true,
        }
    }

    fn is_this_or_super(&self, element: SymbolId) -> bool {
        let name = self.model.symbol(element).name.as_str();
        name == "this" || name == "super"
    }
}
