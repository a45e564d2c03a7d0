//! Scope chain walkers.
//!
//! A program point sees three structurally distinct chains:
//! - the *this-scope* chain: enclosing classes reachable as an instance
//!   receiver (`this`/`super`),
//! - the *class-scope* chain: every enclosing class, for static access,
//! - the *method scopes*: every enclosing scope carrying an executable,
//!   which is where locals live.
//!
//! Chain walks dedup classes by qualified name and preserve first-insertion
//! order; the this-scope chain is always a prefix-ordered subsequence of the
//! class-scope chain.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{ScopeId, SymbolId};

use super::Completions;

impl<'a> Completions<'a> {
    /// Enclosing classes whose instance context is reachable from `scope`.
    ///
    /// Walks outward. A static enclosing method terminates the chain before
    /// its class is recorded; a static, non-anonymous class is recorded and
    /// then terminates it.
    pub(super) fn this_scopes(&self, scope: ScopeId) -> IndexMap<SmolStr, SymbolId> {
        let mut acc = IndexMap::new();
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = self.model.scope(id);
            let Some(class) = scope.enclosing_class else { break };

            if self.is_static_method(id) {
                break;
            }

            let class_symbol = self.model.symbol(class);
            acc.entry(class_symbol.lookup_name()).or_insert(class);

            if class_symbol.is_static() && !class_symbol.is_anonymous {
                break;
            }

            current = scope.parent;
        }

        acc
    }

    /// Every distinct enclosing class of `scope`, outward, regardless of
    /// static-ness. Superset of the this-scope chain's class set.
    pub(super) fn class_scopes(&self, scope: ScopeId) -> IndexMap<SmolStr, SymbolId> {
        let mut acc = IndexMap::new();
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = self.model.scope(id);
            let Some(class) = scope.enclosing_class else { break };

            acc.entry(self.model.symbol(class).lookup_name())
                .or_insert(class);

            current = scope.parent;
        }

        acc
    }

    /// Every scope carrying an enclosing executable, walking outward while
    /// an enclosing class exists. Each nested lambda or local-class method
    /// scope contributes its own locals, not just the innermost.
    pub(super) fn method_scopes(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut acc = Vec::new();
        let mut current = Some(scope);

        while let Some(id) = current {
            let scope = self.model.scope(id);
            if scope.enclosing_class.is_none() {
                break;
            }
            if scope.enclosing_method.is_some() {
                acc.push(id);
            }
            current = scope.parent;
        }

        acc
    }

    /// Whether the innermost executable of `scope` is static.
    pub(super) fn is_static_method(&self, scope: ScopeId) -> bool {
        self.model
            .scope(scope)
            .enclosing_method
            .is_some_and(|method| self.model.symbol(method).is_static())
    }
}
