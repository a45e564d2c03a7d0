//! Presentation records and the symbol → record mapping.

use smol_str::SmolStr;

use crate::base::SymbolId;
use crate::model::SymbolKind;

use super::Completions;

// Lexical-proximity ranks for scope completion, nearest first. Member and
// constructor completion always present at rank 0.
pub(super) const RANK_RECEIVER: u32 = 0;
pub(super) const RANK_LOCAL: u32 = 1;
pub(super) const RANK_MEMBER_BASE: u32 = 2;

/// Display kind of a completion candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionItemKind {
    Class,
    Reference,
    Enum,
    Property,
    Variable,
    Method,
    Constructor,
}

/// One completion candidate, formatted for presentation.
///
/// Constructed fresh per request; carries no identity beyond its position
/// in the output sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub kind: CompletionItemKind,
    /// Text shown in the candidate list.
    pub label: SmolStr,
    /// Secondary text shown after the label, e.g. a type.
    pub detail: Option<SmolStr>,
    /// Documentation shown in the detail popup.
    pub documentation: Option<SmolStr>,
    /// Text inserted on acceptance.
    pub insert_text: SmolStr,
    /// Text prefix-matched by the client when it differs from the label
    /// (signature labels still match on the plain name).
    pub filter_text: Option<SmolStr>,
    /// `"{rank}/{name}"` — rank-then-name candidate ordering.
    pub sort_text: SmolStr,
}

impl CompletionItem {
    fn new(kind: CompletionItemKind, name: SmolStr, distance: u32) -> Self {
        Self {
            kind,
            label: name.clone(),
            detail: None,
            documentation: None,
            insert_text: name.clone(),
            filter_text: None,
            sort_text: sort_text(distance, &name),
        }
    }

    /// A synthetic pseudo-member candidate: `this`, `super`, or `class`.
    pub(super) fn named_property(name: &str) -> Self {
        Self::new(CompletionItemKind::Property, SmolStr::new(name), 0)
    }
}

fn sort_text(distance: u32, name: &str) -> SmolStr {
    SmolStr::new(format!("{distance}/{name}"))
}

impl<'a> Completions<'a> {
    /// Map a resolved symbol to a presentation record.
    ///
    /// Kinds with nothing user-enterable (packages, initializers, resource
    /// variables, anything unrecognized) produce no record.
    pub(super) fn completion_item(
        &self,
        element: SymbolId,
        distance: u32,
    ) -> Option<CompletionItem> {
        let symbol = self.model.symbol(element);
        let name = if symbol.kind == SymbolKind::Constructor {
            self.model.constructor_display_name(element)
        } else {
            symbol.name.clone()
        };

        match symbol.kind {
            SymbolKind::Class | SymbolKind::Enum => {
                Some(CompletionItem::new(CompletionItemKind::Class, name, distance))
            }

            SymbolKind::Interface | SymbolKind::AnnotationType | SymbolKind::TypeParameter => {
                Some(CompletionItem::new(CompletionItemKind::Reference, name, distance))
            }

            SymbolKind::EnumConstant => {
                let mut item = CompletionItem::new(CompletionItemKind::Enum, name, distance);
                item.detail = symbol
                    .enclosing
                    .map(|enclosing| self.model.symbol(enclosing).name.clone());
                Some(item)
            }

            SymbolKind::Field => {
                let mut item = CompletionItem::new(CompletionItemKind::Property, name, distance);
                item.detail = symbol.ty.map(|ty| self.model.short_type_display(ty));
                item.documentation = self.docstring(element);
                Some(item)
            }

            SymbolKind::Parameter | SymbolKind::LocalVariable | SymbolKind::ExceptionParameter => {
                Some(CompletionItem::new(CompletionItemKind::Variable, name, distance))
            }

            SymbolKind::Method => {
                let mut item = CompletionItem::new(CompletionItemKind::Method, name.clone(), distance);
                item.label = self.model.method_signature_display(element);
                item.detail = symbol
                    .return_type
                    .map(|ty| self.model.short_type_display(ty));
                item.documentation = self.docstring(element);
                item.filter_text = Some(name);
                Some(item)
            }

            SymbolKind::Constructor => {
                let mut item =
                    CompletionItem::new(CompletionItemKind::Constructor, name.clone(), distance);
                item.label = self.model.method_signature_display(element);
                if !symbol.type_params.is_empty() {
                    item.insert_text = SmolStr::new(format!("{name}<>"));
                }
                item.documentation = self.docstring(element);
                item.filter_text = Some(name);
                Some(item)
            }

            // Nothing user-enterable
            SymbolKind::Package
            | SymbolKind::StaticInit
            | SymbolKind::InstanceInit
            | SymbolKind::ResourceVariable
            | SymbolKind::Other => None,
        }
    }

    fn docstring(&self, element: SymbolId) -> Option<SmolStr> {
        self.model
            .doc_comment(element)
            .filter(|doc| !doc.is_empty())
            .map(SmolStr::new)
    }
}
