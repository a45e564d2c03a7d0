//! Arena-backed implementation of the semantic model interface.
//!
//! [`ModelStore`] is the reference [`SemanticModel`] used by hosts that
//! assemble a snapshot from their own analysis results, and by this crate's
//! tests. The population API is the one fallible surface in the crate: it
//! rejects duplicate qualified type names and dangling handles with
//! [`StoreError`]. The read side consumed by the engine is infallible.
//!
//! A populated store is plain immutable data; sharing `&ModelStore` across
//! concurrent completion requests needs no locking.

mod display;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{NodeId, PackageId, ScopeId, SymbolId, TypeId};
use crate::model::{Package, Scope, SemanticModel, Symbol, Type, Visibility};

/// Errors raised while populating a [`ModelStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("type `{0}` is already defined")]
    DuplicateType(SmolStr),
    #[error("type declaration `{0}` has no qualified name")]
    MissingQualifiedName(SmolStr),
    #[error("symbol `{0}` is not a type declaration")]
    NotATypeDeclaration(SmolStr),
    #[error("unknown symbol handle {0:?}")]
    UnknownSymbol(SymbolId),
}

/// In-memory semantic model snapshot.
#[derive(Debug, Default)]
pub struct ModelStore {
    symbols: Vec<Symbol>,
    types: Vec<Type>,
    scopes: Vec<Scope>,
    packages: Vec<Package>,
    /// Resolution results per syntax position, filled by the host.
    symbol_at: FxHashMap<NodeId, SymbolId>,
    type_at: FxHashMap<NodeId, TypeId>,
    /// Members per type declaration, declared + inherited, host-computed.
    members: FxHashMap<SymbolId, Vec<SymbolId>>,
    docs: FxHashMap<SymbolId, SmolStr>,
    /// Direct package of a symbol; nested declarations inherit through
    /// their enclosing chain.
    package_index: FxHashMap<SymbolId, PackageId>,
    /// Qualified name index for duplicate detection.
    types_by_qname: FxHashMap<SmolStr, SymbolId>,
    next_node: u32,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Population API (host-facing, fallible)
    // ------------------------------------------------------------------

    /// Add a non-type symbol (member, variable, executable, ...).
    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        self.symbols.push(symbol);
        id
    }

    /// Add a type declaration. Allocates the declared type and backfills the
    /// symbol's own `ty`, so the declaration can later be used as a
    /// member-completion qualifier or constructor source.
    pub fn add_type_decl(&mut self, symbol: Symbol) -> Result<(SymbolId, TypeId), StoreError> {
        if !symbol.kind.declares_nominal_type() {
            return Err(StoreError::NotATypeDeclaration(symbol.name.clone()));
        }
        let Some(qualified) = symbol.qualified_name.clone() else {
            return Err(StoreError::MissingQualifiedName(symbol.name.clone()));
        };
        if self.types_by_qname.contains_key(&qualified) {
            return Err(StoreError::DuplicateType(qualified));
        }

        let id = SymbolId::new(self.symbols.len());
        self.symbols.push(symbol);

        let ty = self.intern_type(Type::declared(id));
        self.symbols[id.index()].ty = Some(ty);
        self.types_by_qname.insert(qualified, id);

        Ok((id, ty))
    }

    /// Intern a type (primitive, array, error). Declared types are created
    /// through [`ModelStore::add_type_decl`].
    pub fn intern_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId::new(self.types.len());
        self.types.push(ty);
        id
    }

    /// Record the full member list of a type declaration.
    pub fn set_members(
        &mut self,
        decl: SymbolId,
        members: Vec<SymbolId>,
    ) -> Result<(), StoreError> {
        self.check_symbol(decl)?;
        for &member in &members {
            self.check_symbol(member)?;
        }
        self.members.insert(decl, members);
        Ok(())
    }

    pub fn add_scope(&mut self, scope: Scope) -> ScopeId {
        let id = ScopeId::new(self.scopes.len());
        self.scopes.push(scope);
        id
    }

    pub fn add_package(&mut self, name: impl Into<SmolStr>) -> PackageId {
        let id = PackageId::new(self.packages.len());
        self.packages.push(Package::new(name));
        id
    }

    /// Register a symbol as a top-level member of a package.
    pub fn add_package_member(
        &mut self,
        package: PackageId,
        member: SymbolId,
    ) -> Result<(), StoreError> {
        self.check_symbol(member)?;
        self.packages[package.index()].members.push(member);
        self.package_index.insert(member, package);
        Ok(())
    }

    pub fn set_doc(&mut self, symbol: SymbolId, doc: impl Into<SmolStr>) {
        self.docs.insert(symbol, doc.into());
    }

    /// Record what symbol a syntax position resolves to.
    pub fn bind_symbol(&mut self, node: NodeId, symbol: SymbolId) {
        self.symbol_at.insert(node, symbol);
    }

    /// Record the semantic type of a syntax position.
    pub fn bind_type(&mut self, node: NodeId, ty: TypeId) {
        self.type_at.insert(node, ty);
    }

    /// Mint a fresh syntax position handle. Hosts with a real syntax tree
    /// derive these from node offsets instead.
    pub fn fresh_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    fn check_symbol(&self, id: SymbolId) -> Result<(), StoreError> {
        if id.index() < self.symbols.len() {
            Ok(())
        } else {
            Err(StoreError::UnknownSymbol(id))
        }
    }

    /// Innermost enclosing class of a scope, walking the scope chain.
    fn innermost_class(&self, scope: ScopeId) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.index()];
            if let Some(class) = scope.enclosing_class {
                return Some(class);
            }
            current = scope.parent;
        }
        None
    }

    /// Whether a scope sits lexically inside the given declared type.
    fn scope_within(&self, scope: ScopeId, declared: SymbolId) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.index()];
            if let Some(class) = scope.enclosing_class {
                if class == declared {
                    return true;
                }
            }
            current = scope.parent;
        }
        false
    }
}

impl SemanticModel for ModelStore {
    fn resolve_symbol(&self, node: NodeId) -> Option<SymbolId> {
        self.symbol_at.get(&node).copied()
    }

    fn resolve_type(&self, node: NodeId) -> Option<TypeId> {
        self.type_at.get(&node).copied()
    }

    fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    fn type_of(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    fn all_members(&self, ty: TypeId) -> Vec<SymbolId> {
        self.type_of(ty)
            .declared_symbol()
            .and_then(|decl| self.members.get(&decl))
            .cloned()
            .unwrap_or_default()
    }

    /// Accessibility judgment of the host language:
    /// - `public` is visible everywhere,
    /// - `private` only from scopes lexically inside the declaring type,
    /// - `protected` and package-private from the same package, or from
    ///   scopes lexically inside the declaring type.
    fn is_accessible(&self, from: ScopeId, symbol: SymbolId, through: TypeId) -> bool {
        let declaring = self.type_of(through).declared_symbol();
        match self.symbol(symbol).modifiers.visibility {
            Visibility::Public => true,
            Visibility::Private => declaring.is_some_and(|decl| self.scope_within(from, decl)),
            Visibility::Protected | Visibility::PackagePrivate => {
                let Some(decl) = declaring else { return true };
                if self.scope_within(from, decl) {
                    return true;
                }
                match (
                    self.innermost_class(from).and_then(|c| self.package_of(c)),
                    self.package_of(decl),
                ) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
        }
    }

    fn package_of(&self, symbol: SymbolId) -> Option<PackageId> {
        let mut current = Some(symbol);
        while let Some(id) = current {
            if let Some(&package) = self.package_index.get(&id) {
                return Some(package);
            }
            current = self.symbols[id.index()].enclosing;
        }
        None
    }

    fn package_members(&self, package: PackageId) -> Vec<SymbolId> {
        self.packages[package.index()].members.clone()
    }

    fn doc_comment(&self, symbol: SymbolId) -> Option<&str> {
        self.docs.get(&symbol).map(SmolStr::as_str)
    }

    fn short_type_display(&self, ty: TypeId) -> SmolStr {
        display::short_type(self, ty)
    }

    fn method_signature_display(&self, symbol: SymbolId) -> SmolStr {
        display::signature(self, symbol)
    }

    fn constructor_display_name(&self, symbol: SymbolId) -> SmolStr {
        let ctor = self.symbol(symbol);
        match ctor.enclosing {
            Some(enclosing) => self.symbol(enclosing).name.clone(),
            None => ctor.name.clone(),
        }
    }
}
