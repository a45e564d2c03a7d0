//! Scope completion: candidates for a bare identifier.

use crate::base::ScopeId;

use super::item::{CompletionItem, RANK_LOCAL, RANK_MEMBER_BASE, RANK_RECEIVER};
use super::Completions;

impl<'a> Completions<'a> {
    /// Suggest every symbol visible from `scope`, nearest sources first.
    ///
    /// Sources are concatenated in fixed priority order: receiver
    /// pseudo-locals, then locals, then instance members of the this-scope
    /// chain, then static members of the class-scope chain, then package
    /// members. Each source carries its lexical-proximity rank into the
    /// sort key.
    pub(super) fn all_symbols(&self, scope: ScopeId) -> Vec<CompletionItem> {
        let this_scopes = self.this_scopes(scope);
        let class_scopes = self.class_scopes(scope);
        let method_scopes = self.method_scopes(scope);

        let mut candidates = Vec::new();

        if !self.is_static_method(scope) {
            for receiver in self.this_and_super(scope) {
                candidates.push((receiver, RANK_RECEIVER));
            }
        }

        for &method_scope in &method_scopes {
            for local in self.locals(method_scope) {
                candidates.push((local, RANK_LOCAL));
            }
        }

        for (depth, &class) in this_scopes.values().enumerate() {
            for member in self.instance_members(class) {
                candidates.push((member, RANK_MEMBER_BASE + depth as u32));
            }
        }

        let static_base = RANK_MEMBER_BASE + this_scopes.len() as u32;
        for (depth, &class) in class_scopes.values().enumerate() {
            for member in self.static_members(class) {
                candidates.push((member, static_base + depth as u32));
            }
        }

        let package_rank = static_base + class_scopes.len() as u32;
        if let Some(class) = self.model.scope(scope).enclosing_class {
            for member in self.package_members(class) {
                candidates.push((member, package_rank));
            }
        }

        candidates
            .into_iter()
            .filter(|&(candidate, _)| self.is_accessible(candidate, scope))
            .filter_map(|(candidate, rank)| self.completion_item(candidate, rank))
            .collect()
    }
}
