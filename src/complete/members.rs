//! Member completion: candidates after `expr.` or `expr::`.

use crate::base::{NodeId, ScopeId};

use super::item::CompletionItem;
use super::Completions;

impl<'a> Completions<'a> {
    /// Suggest all accessible members of the qualifying expression.
    ///
    /// Fails closed: if the model cannot resolve the qualifier to both a
    /// symbol and a type (for instance when the qualifier itself carries an
    /// error type), the result is empty.
    pub(super) fn complete_members(&self, qualifier: NodeId, from: ScopeId) -> Vec<CompletionItem> {
        let (Some(element), Some(ty)) = (
            self.model.resolve_symbol(qualifier),
            self.model.resolve_type(qualifier),
        ) else {
            tracing::trace!(?qualifier, "qualifier did not resolve; no members offered");
            return Vec::new();
        };

        // A qualifier naming the type itself completes static members; a
        // qualifier denoting a value completes instance members.
        let is_static = self.is_type_symbol(element);

        let mut items = Vec::new();
        if is_static {
            if self.this_scopes(from).values().any(|&class| class == element) {
                items.push(CompletionItem::named_property("this"));
                items.push(CompletionItem::named_property("super"));
            }
            items.push(CompletionItem::named_property("class"));
        }

        for member in self.members(ty) {
            if !self.is_accessible(member, from) {
                continue;
            }
            if self.model.symbol(member).is_static() != is_static {
                continue;
            }
            items.extend(self.completion_item(member, 0));
        }

        items
    }
}
