//! Foundation types for the Espresso completion core.
//!
//! This module provides the opaque arena handles used throughout the crate:
//! - [`NodeId`] - A syntax position in the host's tree
//! - [`SymbolId`] - A declared program entity
//! - [`TypeId`] - A semantic type
//! - [`ScopeId`] - A lexical scope
//! - [`PackageId`] - A package
//!
//! Handles index into arenas owned by the semantic model; the completion
//! engine only ever borrows through them. This module has NO dependencies on
//! other espresso modules.

mod ids;

pub use ids::{NodeId, PackageId, ScopeId, SymbolId, TypeId};
