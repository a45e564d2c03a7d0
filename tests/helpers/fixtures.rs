//! A small program modelled by hand, shared across the integration tests.
//!
//! ```java
//! package com.example;
//!
//! class Point { int x; int y; }
//!
//! enum Color { RED, GREEN }
//!
//! class Foo {
//!     Foo() {}
//!     Foo(int capacity) {}
//! }
//!
//! class Gadget {
//!     private int hidden;
//!     int visible;
//! }
//!
//! class Widget {
//!     static int counter;
//!     int id;
//!     private int secret;
//!     static class Factory { Factory() {} }
//!     void render(int depth) { int local; /* cursor */ }
//!     static void reset() { int tmp; /* cursor */ }
//! }
//!
//! // elsewhere:
//! package ui;
//! public class Panel { public Panel() {} }
//! ```

use once_cell::sync::Lazy;

use espresso::{
    Modifiers, ModelStore, NodeId, Scope, ScopeId, Symbol, SymbolId, SymbolKind, Type, Visibility,
};

// Not every test binary touches every handle.
#[allow(dead_code)]
pub struct Fixture {
    pub store: ModelStore,
    /// Cursor scope inside `Widget.render` (instance method).
    pub render_body: ScopeId,
    /// Cursor scope inside `Widget.reset` (static method).
    pub reset_body: ScopeId,
    pub widget: SymbolId,
    /// `p.` where `p` is a local of type `Point`.
    pub node_point_value: NodeId,
    /// `Point.` — the type itself.
    pub node_point_type: NodeId,
    /// `Color.` — the enum type.
    pub node_color_type: NodeId,
    /// `Widget.` — the type enclosing the cursor.
    pub node_widget_type: NodeId,
    /// `w.` where `w` is a local of type `Widget`.
    pub node_widget_value: NodeId,
    /// `g.` where `g` is a local of type `Gadget`.
    pub node_gadget_value: NodeId,
    /// A qualifier the model resolved to a symbol but no type.
    pub node_untyped_value: NodeId,
    /// A qualifier whose type is an error type.
    pub node_error_value: NodeId,
}

pub fn fixture() -> &'static Fixture {
    static FIXTURE: Lazy<Fixture> = Lazy::new(build);
    &FIXTURE
}

fn package_private() -> Modifiers {
    Modifiers {
        is_static: false,
        visibility: Visibility::PackagePrivate,
    }
}

fn build() -> Fixture {
    let mut store = ModelStore::new();

    let com_example = store.add_package("com.example");
    let ui = store.add_package("ui");

    let int = store.intern_type(Type::primitive("int"));
    let void = store.intern_type(Type::primitive("void"));
    let error = store.intern_type(Type::error());

    // --- Point ------------------------------------------------------------
    let (point, point_ty) = store
        .add_type_decl(
            Symbol::new("Point", SymbolKind::Class).with_qualified_name("com.example.Point"),
        )
        .unwrap();
    let x = store.add_symbol(
        Symbol::new("x", SymbolKind::Field)
            .with_modifiers(Modifiers::public())
            .with_enclosing(point)
            .with_type(int),
    );
    let y = store.add_symbol(
        Symbol::new("y", SymbolKind::Field)
            .with_modifiers(Modifiers::public())
            .with_enclosing(point)
            .with_type(int),
    );
    store.set_members(point, vec![x, y]).unwrap();

    // --- Color ------------------------------------------------------------
    let (color, color_ty) = store
        .add_type_decl(
            Symbol::new("Color", SymbolKind::Enum).with_qualified_name("com.example.Color"),
        )
        .unwrap();
    let red = store.add_symbol(
        Symbol::new("RED", SymbolKind::EnumConstant)
            .with_modifiers(Modifiers::public_static())
            .with_enclosing(color)
            .with_type(color_ty),
    );
    let green = store.add_symbol(
        Symbol::new("GREEN", SymbolKind::EnumConstant)
            .with_modifiers(Modifiers::public_static())
            .with_enclosing(color)
            .with_type(color_ty),
    );
    store.set_members(color, vec![red, green]).unwrap();

    // --- Foo --------------------------------------------------------------
    let (foo, _) = store
        .add_type_decl(Symbol::new("Foo", SymbolKind::Class).with_qualified_name("com.example.Foo"))
        .unwrap();
    let foo_ctor_nullary = store.add_symbol(
        Symbol::new("<init>", SymbolKind::Constructor)
            .with_modifiers(package_private())
            .with_enclosing(foo),
    );
    let foo_ctor_int = store.add_symbol(
        Symbol::new("<init>", SymbolKind::Constructor)
            .with_modifiers(package_private())
            .with_enclosing(foo)
            .with_param_types([int]),
    );
    store
        .set_members(foo, vec![foo_ctor_nullary, foo_ctor_int])
        .unwrap();

    // --- Gadget -----------------------------------------------------------
    let (gadget, gadget_ty) = store
        .add_type_decl(
            Symbol::new("Gadget", SymbolKind::Class).with_qualified_name("com.example.Gadget"),
        )
        .unwrap();
    let hidden = store.add_symbol(
        Symbol::new("hidden", SymbolKind::Field)
            .with_modifiers(Modifiers::private())
            .with_enclosing(gadget)
            .with_type(int),
    );
    let visible = store.add_symbol(
        Symbol::new("visible", SymbolKind::Field)
            .with_modifiers(package_private())
            .with_enclosing(gadget)
            .with_type(int),
    );
    store.set_members(gadget, vec![hidden, visible]).unwrap();

    // --- Widget -----------------------------------------------------------
    let (widget, widget_ty) = store
        .add_type_decl(
            Symbol::new("Widget", SymbolKind::Class).with_qualified_name("com.example.Widget"),
        )
        .unwrap();
    let counter = store.add_symbol(
        Symbol::new("counter", SymbolKind::Field)
            .with_modifiers(Modifiers::public_static())
            .with_enclosing(widget)
            .with_type(int),
    );
    let id = store.add_symbol(
        Symbol::new("id", SymbolKind::Field)
            .with_modifiers(Modifiers::public())
            .with_enclosing(widget)
            .with_type(int),
    );
    let secret = store.add_symbol(
        Symbol::new("secret", SymbolKind::Field)
            .with_modifiers(Modifiers::private())
            .with_enclosing(widget)
            .with_type(int),
    );
    let render = store.add_symbol(
        Symbol::new("render", SymbolKind::Method)
            .with_modifiers(Modifiers::public())
            .with_enclosing(widget)
            .with_param_types([int])
            .with_return_type(void),
    );
    let reset = store.add_symbol(
        Symbol::new("reset", SymbolKind::Method)
            .with_modifiers(Modifiers::public_static())
            .with_enclosing(widget)
            .with_return_type(void),
    );

    let (factory, _) = store
        .add_type_decl(
            Symbol::new("Factory", SymbolKind::Class)
                .with_qualified_name("com.example.Widget.Factory")
                .with_modifiers(Modifiers::public_static())
                .with_enclosing(widget),
        )
        .unwrap();
    let factory_ctor = store.add_symbol(
        Symbol::new("<init>", SymbolKind::Constructor)
            .with_modifiers(Modifiers::public())
            .with_enclosing(factory),
    );
    store.set_members(factory, vec![factory_ctor]).unwrap();

    store
        .set_members(widget, vec![counter, id, secret, render, reset, factory])
        .unwrap();

    store.add_package_member(com_example, point).unwrap();
    store.add_package_member(com_example, color).unwrap();
    store.add_package_member(com_example, foo).unwrap();
    store.add_package_member(com_example, gadget).unwrap();
    store.add_package_member(com_example, widget).unwrap();

    // --- ui.Panel: reachable only through an import, never offered --------
    let (panel, _) = store
        .add_type_decl(
            Symbol::new("Panel", SymbolKind::Class)
                .with_qualified_name("ui.Panel")
                .with_modifiers(Modifiers::public()),
        )
        .unwrap();
    let panel_ctor = store.add_symbol(
        Symbol::new("<init>", SymbolKind::Constructor)
            .with_modifiers(Modifiers::public())
            .with_enclosing(panel),
    );
    store.set_members(panel, vec![panel_ctor]).unwrap();
    store.add_package_member(ui, panel).unwrap();

    // --- Scopes -----------------------------------------------------------
    let file_scope = store.add_scope(Scope::new(None));
    let widget_scope = store.add_scope(Scope::new(Some(file_scope)).with_class(widget));

    let this_local = store.add_symbol(
        Symbol::new("this", SymbolKind::LocalVariable).with_type(widget_ty),
    );
    let super_local = store.add_symbol(
        Symbol::new("super", SymbolKind::LocalVariable).with_type(widget_ty),
    );
    let depth = store.add_symbol(Symbol::new("depth", SymbolKind::Parameter).with_type(int));
    let local = store.add_symbol(Symbol::new("local", SymbolKind::LocalVariable).with_type(int));
    let render_body = store.add_scope(
        Scope::new(Some(widget_scope))
            .with_class(widget)
            .with_method(render)
            .with_locals([this_local, super_local, depth, local]),
    );

    let tmp = store.add_symbol(Symbol::new("tmp", SymbolKind::LocalVariable).with_type(int));
    let reset_body = store.add_scope(
        Scope::new(Some(widget_scope))
            .with_class(widget)
            .with_method(reset)
            .with_locals([tmp]),
    );

    // --- Cursor qualifiers ------------------------------------------------
    let p = store.add_symbol(Symbol::new("p", SymbolKind::LocalVariable).with_type(point_ty));
    let node_point_value = store.fresh_node();
    store.bind_symbol(node_point_value, p);
    store.bind_type(node_point_value, point_ty);

    let node_point_type = store.fresh_node();
    store.bind_symbol(node_point_type, point);
    store.bind_type(node_point_type, point_ty);

    let node_color_type = store.fresh_node();
    store.bind_symbol(node_color_type, color);
    store.bind_type(node_color_type, color_ty);

    let node_widget_type = store.fresh_node();
    store.bind_symbol(node_widget_type, widget);
    store.bind_type(node_widget_type, widget_ty);

    let w = store.add_symbol(Symbol::new("w", SymbolKind::LocalVariable).with_type(widget_ty));
    let node_widget_value = store.fresh_node();
    store.bind_symbol(node_widget_value, w);
    store.bind_type(node_widget_value, widget_ty);

    let g = store.add_symbol(Symbol::new("g", SymbolKind::LocalVariable).with_type(gadget_ty));
    let node_gadget_value = store.fresh_node();
    store.bind_symbol(node_gadget_value, g);
    store.bind_type(node_gadget_value, gadget_ty);

    let untyped = store.add_symbol(Symbol::new("u", SymbolKind::LocalVariable));
    let node_untyped_value = store.fresh_node();
    store.bind_symbol(node_untyped_value, untyped);

    let broken = store.add_symbol(Symbol::new("b", SymbolKind::LocalVariable).with_type(error));
    let node_error_value = store.fresh_node();
    store.bind_symbol(node_error_value, broken);
    store.bind_type(node_error_value, error);

    Fixture {
        store,
        render_body,
        reset_body,
        widget,
        node_point_value,
        node_point_type,
        node_color_type,
        node_widget_type,
        node_widget_value,
        node_gadget_value,
        node_untyped_value,
        node_error_value,
    }
}
