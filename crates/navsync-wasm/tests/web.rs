//! Browser tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use navsync_core::{
    synchronize, GeometrySource, Measurement, OuterSize, SyncOptions, SyncOutcome,
};
use navsync_wasm::{install, DomGeometry, NavbarSync, RootStyle, SyncOptionsJs};
use wasm_bindgen::{JsCast, JsError, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn add_bar(id: &str, width: i32, height: i32) -> HtmlElement {
    let doc = document();
    let bar = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    bar.set_id(id);
    resize_bar(&bar, width, height);
    doc.body().unwrap().append_child(&bar).unwrap();
    bar
}

fn resize_bar(bar: &HtmlElement, width: i32, height: i32) {
    let style = bar.style();
    style.set_property("display", "block").unwrap();
    style.set_property("box-sizing", "border-box").unwrap();
    style.set_property("width", &format!("{}px", width)).unwrap();
    style.set_property("height", &format!("{}px", height)).unwrap();
}

fn root_property(name: &str) -> String {
    RootStyle::new(document()).get_property(name).unwrap()
}

fn dispatch(kind: &str) {
    let event = Event::new(kind).unwrap();
    window().dispatch_event(&event).unwrap();
}

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

fn options(prefix: &str) -> SyncOptions {
    SyncOptions::default()
        .with_element_id(prefix)
        .with_width_property(format!("--{}-width", prefix))
        .with_height_property(format!("--{}-height", prefix))
}

#[wasm_bindgen_test]
fn dom_geometry_reads_offset_size() {
    let bar = add_bar("geom-bar", 201, 50);
    let geometry = DomGeometry::new(document());

    assert_eq!(geometry.outer_size("geom-bar"), Some(OuterSize::new(201, 50)));
    bar.remove();
    assert_eq!(geometry.outer_size("geom-bar"), None);
}

#[wasm_bindgen_test]
fn synchronize_writes_root_style() {
    let bar = add_bar("navbar", 201, 50);
    let doc = document();
    let mut sink = RootStyle::new(doc.clone());

    let outcome = synchronize(&DomGeometry::new(doc), &mut sink, &SyncOptions::default()).unwrap();
    assert!(outcome.is_updated());
    assert_eq!(root_property("--navbar-width"), "200px");
    assert_eq!(root_property("--navbar-height"), "50px");
    bar.remove();
}

#[wasm_bindgen_test]
fn missing_element_leaves_properties() {
    let doc = document();
    let mut sink = RootStyle::new(doc.clone());
    let opts = options("absent-bar");

    let outcome = synchronize(&DomGeometry::new(doc), &mut sink, &opts).unwrap();
    assert_eq!(outcome, SyncOutcome::TargetMissing);
    assert_eq!(root_property("--absent-bar-width"), "");
}

#[wasm_bindgen_test]
fn listeners_follow_load_and_resize() {
    let bar = add_bar("events-bar", 201, 50);
    let mut sync = ok(NavbarSync::with_options(options("events-bar")));
    ok(sync.attach());
    assert!(sync.is_attached());

    dispatch("load");
    assert_eq!(root_property("--events-bar-width"), "200px");
    assert_eq!(root_property("--events-bar-height"), "50px");

    resize_bar(&bar, 301, 50);
    dispatch("resize");
    assert_eq!(root_property("--events-bar-width"), "300px");
    assert_eq!(sync.last_width(), Some(300));

    bar.remove();
    dispatch("resize");
    assert_eq!(root_property("--events-bar-width"), "300px");
    assert_eq!(root_property("--events-bar-height"), "50px");

    ok(sync.detach());
    assert!(!sync.is_attached());
}

#[wasm_bindgen_test]
fn attach_on_loaded_page_syncs_immediately() {
    assert_eq!(document().ready_state(), "complete");
    let bar = add_bar("late-bar", 201, 50);
    let mut sync = ok(NavbarSync::with_options(options("late-bar")));

    ok(sync.attach());
    assert_eq!(root_property("--late-bar-width"), "200px");
    assert_eq!(root_property("--late-bar-height"), "50px");
    assert_eq!(sync.last_width(), Some(200));

    ok(sync.detach());
    bar.remove();
}

#[wasm_bindgen_test]
fn detached_sync_ignores_events() {
    let bar = add_bar("detach-bar", 101, 20);
    let mut sync = ok(NavbarSync::with_options(options("detach-bar")));
    ok(sync.attach());
    ok(sync.detach());
    assert_eq!(root_property("--detach-bar-width"), "100px");

    resize_bar(&bar, 201, 20);
    dispatch("resize");
    assert_eq!(root_property("--detach-bar-width"), "100px");
    assert_eq!(sync.last_width(), Some(100));

    assert!(ok(sync.sync_now()));
    assert_eq!(root_property("--detach-bar-width"), "200px");
    bar.remove();
}

#[wasm_bindgen_test]
fn install_tracks_default_navbar() {
    let bar = add_bar("navbar", 401, 60);
    ok(install());
    assert_eq!(root_property("--navbar-width"), "400px");
    assert_eq!(root_property("--navbar-height"), "60px");

    resize_bar(&bar, 501, 64);
    dispatch("resize");
    assert_eq!(root_property("--navbar-width"), "500px");
    assert_eq!(root_property("--navbar-height"), "64px");

    bar.remove();
    dispatch("resize");
    assert_eq!(root_property("--navbar-width"), "500px");
}

#[wasm_bindgen_test]
fn options_from_js_object() {
    let js = SyncOptionsJs {
        element_id: Some("object-bar".to_string()),
        width_property: Some("--object-bar-w".to_string()),
        height_property: Some("--object-bar-h".to_string()),
        ..SyncOptionsJs::default()
    };
    let value = serde_wasm_bindgen::to_value(&js).unwrap();
    let bar = add_bar("object-bar", 81, 30);

    let sync = ok(NavbarSync::new(value));
    assert_eq!(sync.element_id(), "object-bar");
    assert!(ok(sync.sync_now()));
    assert_eq!(root_property("--object-bar-w"), "80px");
    assert_eq!(root_property("--object-bar-h"), "30px");
    bar.remove();

    let defaults = ok(NavbarSync::new(JsValue::UNDEFINED));
    assert_eq!(defaults.element_id(), "navbar");
}

#[wasm_bindgen_test]
fn invalid_js_options_rejected() {
    let js = SyncOptionsJs {
        width_property: Some("width".to_string()),
        ..SyncOptionsJs::default()
    };
    let value = serde_wasm_bindgen::to_value(&js).unwrap();
    assert!(NavbarSync::new(value).is_err());
    assert!(NavbarSync::new(JsValue::from_str("navbar")).is_err());
}

#[wasm_bindgen_test]
fn last_measurement_null_until_synced() {
    let bar = add_bar("measure-bar", 121, 40);
    let sync = ok(NavbarSync::with_options(options("measure-bar")));
    assert!(ok(sync.last_measurement()).is_null());

    assert!(ok(sync.sync_now()));
    let m: Measurement = serde_wasm_bindgen::from_value(ok(sync.last_measurement())).unwrap();
    assert_eq!(m, Measurement { width: 120, height: 40 });
    bar.remove();
}

#[wasm_bindgen_test]
fn minimum_width_publishes_zero() {
    let bar = add_bar("thin-bar", 1, 10);
    let sync = ok(NavbarSync::with_options(options("thin-bar")));

    assert!(ok(sync.sync_now()));
    assert_eq!(root_property("--thin-bar-width"), "0px");
    assert_eq!(sync.last_height(), Some(10));
    bar.remove();
}

#[wasm_bindgen_test]
fn invalid_options_rejected() {
    assert!(NavbarSync::from_json(r#"{"widthProperty": "width"}"#).is_err());
    assert!(NavbarSync::from_json("not json").is_err());

    let sync = ok(NavbarSync::from_json(r#"{"elementId": "json-bar"}"#));
    assert_eq!(sync.element_id(), "json-bar");
    assert!(!ok(sync.sync_now()));
}
