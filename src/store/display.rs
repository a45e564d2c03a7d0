//! Display rendering for completion details and signature labels.

use smol_str::SmolStr;

use crate::base::{SymbolId, TypeId};
use crate::model::{SemanticModel, SymbolKind, TypeKind};

use super::ModelStore;

/// Short display form of a type: simple names only, `[]` suffix for arrays.
pub(super) fn short_type(store: &ModelStore, ty: TypeId) -> SmolStr {
    match &store.type_of(ty).kind {
        TypeKind::Declared(symbol) => store.symbol(*symbol).name.clone(),
        TypeKind::Primitive(name) => name.clone(),
        TypeKind::Array(element) => {
            let element = short_type(store, *element);
            SmolStr::new(format!("{element}[]"))
        }
        TypeKind::Error => SmolStr::new_static("<error>"),
    }
}

/// Signature label for an executable: display name plus parameter types,
/// e.g. `render(int, Color)`. Constructors display under the constructed
/// type's simple name.
pub(super) fn signature(store: &ModelStore, symbol: SymbolId) -> SmolStr {
    let sym = store.symbol(symbol);
    let name = if sym.kind == SymbolKind::Constructor {
        store.constructor_display_name(symbol)
    } else {
        sym.name.clone()
    };

    let params = sym
        .param_types
        .iter()
        .map(|&ty| short_type(store, ty))
        .collect::<Vec<_>>()
        .join(", ");

    SmolStr::new(format!("{name}({params})"))
}
