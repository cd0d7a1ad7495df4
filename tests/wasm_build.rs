//! Browser bridge tests
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use mtrl_layout::web::{mount, mount_into};
use mtrl_layout::{create_layout, layout_array, Factory, LayoutOptions, Options, Schema};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn test_mount_mirrors_tree() {
    let schema: Schema = layout_array![
        Factory::tag("nav"), "nav", Options::new().with("id", "rail"),
        layout_array![Factory::tag("a"), "home", Options::new().with("text", "Home")],
    ]
    .into();
    let layout = create_layout(&schema, None, &LayoutOptions::default()).unwrap();

    let mounted = mount(layout.root_element().unwrap(), &document()).unwrap();

    assert_eq!(mounted.tag_name(), "NAV");
    assert_eq!(mounted.id(), "rail");
    assert_eq!(mounted.text_content().as_deref(), Some("Home"));
}

#[wasm_bindgen_test]
fn test_mount_svg_namespace() {
    let layout = create_layout(
        &Schema::html(r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#),
        None,
        &LayoutOptions::default(),
    )
    .unwrap();

    let mounted = mount(layout.root_element().unwrap(), &document()).unwrap();

    assert_eq!(mounted.namespace_uri().as_deref(), Some("http://www.w3.org/2000/svg"));
}

#[wasm_bindgen_test]
fn test_mount_into_container() {
    let container = document().create_element("div").unwrap();
    let layout =
        create_layout(&Schema::html("<p>hello</p>"), None, &LayoutOptions::default()).unwrap();

    let mounted = mount_into(&layout, &container).unwrap();

    assert!(mounted.is_some());
    assert_eq!(container.child_element_count(), 1);
}
