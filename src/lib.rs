//! # espresso-base
//!
//! Core library for Espresso completion candidate resolution.
//!
//! Given a classified cursor context inside a partially-typed program and a
//! pre-built semantic model of that program, this crate produces an ordered
//! list of completion candidates (visible symbols, accessible members, or
//! applicable constructors) formatted for presentation to a user.
//!
//! Parsing, type inference, scope construction, and the LSP transport layer
//! are external collaborators: the engine consumes a [`model::SemanticModel`]
//! and never mutates it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! complete  → candidate resolution and ranking pipeline
//!   ↓
//! store     → in-memory arena implementation of the semantic model
//!   ↓
//! model     → semantic model data types + SemanticModel trait
//!   ↓
//! base      → primitives (arena handles)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → store → complete)
// ============================================================================

/// Foundation types: arena handles for syntax nodes, symbols, types, scopes
pub mod base;

/// Semantic model: symbols, types, scopes, and the `SemanticModel` trait
pub mod model;

/// Arena-backed `SemanticModel` implementation for hosts and tests
pub mod store;

/// Completion engine: context dispatch, scope chains, candidate presentation
pub mod complete;

// Re-export foundation types
pub use base::{NodeId, PackageId, ScopeId, SymbolId, TypeId};

// Re-export the public completion surface
pub use complete::{CompletionItem, CompletionItemKind, Completions, CursorContext, completions};
pub use model::{
    Modifiers, Package, Scope, SemanticModel, Symbol, SymbolKind, Type, TypeKind, Visibility,
};
pub use store::{ModelStore, StoreError};
