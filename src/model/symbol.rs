//! Symbol records: declared program entities and their attributes.

use smol_str::SmolStr;

use crate::base::{SymbolId, TypeId};

/// Visibility level of a declared entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

/// The modifier set consumed by completion: static-ness and visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modifiers {
    pub is_static: bool,
    pub visibility: Visibility,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            is_static: false,
            visibility: Visibility::PackagePrivate,
        }
    }
}

impl Modifiers {
    pub fn public() -> Self {
        Self {
            is_static: false,
            visibility: Visibility::Public,
        }
    }

    pub fn public_static() -> Self {
        Self {
            is_static: true,
            visibility: Visibility::Public,
        }
    }

    pub fn private() -> Self {
        Self {
            is_static: false,
            visibility: Visibility::Private,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Kind tag of a declared program entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Package,
    // Type declarations
    Class,
    Interface,
    Enum,
    AnnotationType,
    TypeParameter,
    // Members
    EnumConstant,
    Field,
    Method,
    Constructor,
    StaticInit,
    InstanceInit,
    // Variables
    Parameter,
    LocalVariable,
    ExceptionParameter,
    ResourceVariable,
    // Anything the host model produces that completion has no use for
    Other,
}

impl SymbolKind {
    /// True for declarations that denote a type by themselves when named
    /// in an expression: classes, interfaces, and enums.
    pub fn is_type_declaration(self) -> bool {
        matches!(self, SymbolKind::Class | SymbolKind::Interface | SymbolKind::Enum)
    }

    /// True for declarations whose own type is a nominal declared type.
    /// Members enclosed by one of these are subject to the accessibility
    /// judgment; members of anything else (arrays, executables) are not.
    pub fn declares_nominal_type(self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Interface | SymbolKind::Enum | SymbolKind::AnnotationType
        )
    }
}

/// A declared program entity in the semantic model.
///
/// Flat record in the style of the host's element table; fields that do not
/// apply to a kind stay `None`/empty.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: SmolStr,
    /// Qualified name; populated for type declarations and packages.
    pub qualified_name: Option<SmolStr>,
    pub kind: SymbolKind,
    pub modifiers: Modifiers,
    /// The element this symbol is declared in: a type, an executable, or a
    /// package symbol.
    pub enclosing: Option<SymbolId>,
    /// The symbol's own type: for type declarations, the type they denote;
    /// for fields, variables and parameters, the declared type.
    pub ty: Option<TypeId>,
    /// Parameter types of executables, in declaration order.
    pub param_types: Vec<TypeId>,
    /// Type parameter names of generic executables and type declarations.
    pub type_params: Vec<SmolStr>,
    /// Return type of methods.
    pub return_type: Option<TypeId>,
    /// True for anonymous class declarations.
    pub is_anonymous: bool,
}

impl Symbol {
    pub fn new(name: impl Into<SmolStr>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            qualified_name: None,
            kind,
            modifiers: Modifiers::default(),
            enclosing: None,
            ty: None,
            param_types: Vec::new(),
            type_params: Vec::new(),
            return_type: None,
            is_anonymous: false,
        }
    }

    pub fn with_qualified_name(mut self, qualified: impl Into<SmolStr>) -> Self {
        self.qualified_name = Some(qualified.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_enclosing(mut self, enclosing: SymbolId) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_param_types(mut self, params: impl IntoIterator<Item = TypeId>) -> Self {
        self.param_types = params.into_iter().collect();
        self
    }

    pub fn with_type_params<S: Into<SmolStr>>(mut self, params: impl IntoIterator<Item = S>) -> Self {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_return_type(mut self, ty: TypeId) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    /// Qualified name when present, simple name otherwise. Chain walks key
    /// their dedup maps on this.
    pub fn lookup_name(&self) -> SmolStr {
        self.qualified_name.clone().unwrap_or_else(|| self.name.clone())
    }
}
