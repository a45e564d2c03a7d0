//! Completion engine — resolving and ranking completion candidates.
//!
//! The pipeline runs in one direction:
//!
//! ```text
//! dispatcher → (scope chains + symbol sources + member resolver)
//!            → visibility & kind filter
//!            → presentation builder
//!            → ordered candidate sequence
//! ```
//!
//! The engine is a pure, synchronous, read-only computation over an
//! immutable [`SemanticModel`] snapshot. Every "cannot resolve" condition
//! degrades to an empty result at the smallest scope; no failure crosses
//! this boundary.

mod chains;
mod constructors;
mod item;
mod members;
mod scope;
mod sources;

use crate::base::{NodeId, ScopeId};
use crate::model::SemanticModel;

pub use item::{CompletionItem, CompletionItemKind};

/// The classified syntactic position of the cursor.
///
/// Classification happens in the host's syntax layer; the engine only
/// dispatches on the tag. Anything it does not recognize arrives as
/// [`CursorContext::Other`] and completes to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorContext {
    /// `expr.…` — the cursor follows a member access dot; `qualifier` is
    /// the syntax position of the qualifying expression.
    MemberAccess { qualifier: NodeId },
    /// `expr::…` — a method reference; `qualifier` as above.
    MethodReference { qualifier: NodeId },
    /// `new …` — a constructor invocation.
    ConstructorInvocation,
    /// A bare identifier.
    Identifier,
    /// Any other syntactic position.
    Other,
}

/// Resolve completion candidates for a cursor context and scope.
///
/// Convenience wrapper over [`Completions::resolve`] for one-shot requests.
pub fn completions(
    model: &dyn SemanticModel,
    context: &CursorContext,
    scope: ScopeId,
) -> Vec<CompletionItem> {
    Completions::new(model).resolve(context, scope)
}

/// One completion request over a borrowed semantic-model snapshot.
pub struct Completions<'a> {
    model: &'a dyn SemanticModel,
}

impl<'a> Completions<'a> {
    pub fn new(model: &'a dyn SemanticModel) -> Self {
        Self { model }
    }

    /// Dispatch on the cursor context and produce presentation records.
    pub fn resolve(&self, context: &CursorContext, scope: ScopeId) -> Vec<CompletionItem> {
        tracing::debug!(?context, "resolving completion candidates");

        match *context {
            CursorContext::MemberAccess { qualifier }
            | CursorContext::MethodReference { qualifier } => {
                self.complete_members(qualifier, scope)
            }
            CursorContext::ConstructorInvocation => self.constructors(scope),
            CursorContext::Identifier => self.all_symbols(scope),
            CursorContext::Other => Vec::new(),
        }
    }
}
