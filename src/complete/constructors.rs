//! Constructor completion: candidates after a bare `new`.

use crate::base::{ScopeId, SymbolId};
use crate::model::SymbolKind;

use super::item::CompletionItem;
use super::Completions;

impl<'a> Completions<'a> {
    /// Suggest constructors of every type declaration reachable without
    /// qualification: static members of the class-scope chain plus members
    /// of the enclosing package.
    ///
    /// Types reachable only through imports from other packages are not
    /// offered. Known limitation, kept deliberately.
    pub(super) fn constructors(&self, scope: ScopeId) -> Vec<CompletionItem> {
        let mut candidates: Vec<SymbolId> = Vec::new();

        for &class in self.class_scopes(scope).values() {
            candidates.extend(self.static_members(class));
        }
        if let Some(class) = self.model.scope(scope).enclosing_class {
            candidates.extend(self.package_members(class));
        }

        let mut items = Vec::new();
        for candidate in candidates {
            if !self.is_type_symbol(candidate) {
                continue;
            }
            if !self.is_accessible(candidate, scope) {
                continue;
            }
            for constructor in self.explode_constructors(candidate) {
                items.extend(self.completion_item(constructor, 0));
            }
        }

        items
    }

    /// The constructor members of a type declaration.
    fn explode_constructors(&self, element: SymbolId) -> Vec<SymbolId> {
        let Some(ty) = self.model.symbol(element).ty else {
            return Vec::new();
        };
        self.members(ty)
            .into_iter()
            .filter(|&member| self.model.symbol(member).kind == SymbolKind::Constructor)
            .collect()
    }
}
