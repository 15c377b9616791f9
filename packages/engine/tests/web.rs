//! Browser tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use tumble_engine::api::dom::DomHost;
use tumble_engine::api::ticker::Ticker;
use tumble_engine::{init_physics_bridge, ElementHost};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn spacer(height_px: u32) {
    let doc = document();
    let gap: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    gap.style().set_property("height", &format!("{}px", height_px)).unwrap();
    doc.body().unwrap().append_child(&gap).unwrap();
}

fn stage(id: &str, cards: usize) -> HtmlElement {
    let doc = document();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    container.set_id(id);
    container.style().set_property("width", "400px").unwrap();
    container.style().set_property("height", "300px").unwrap();
    for _ in 0..cards {
        let card: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
        card.set_class_name("matter-box");
        card.style().set_property("width", "40px").unwrap();
        card.style().set_property("height", "20px").unwrap();
        container.append_child(&card).unwrap();
    }
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn discovers_marked_children() {
    stage("web-discover", 3);
    let host = DomHost::from_window().unwrap();
    let (container, info) = host.find_container("web-discover").unwrap();
    assert_eq!(info.size.width, 400.0);
    assert_eq!(host.find_marked(&container, ".matter-box").len(), 3);
}

#[wasm_bindgen_test]
fn init_detaches_and_positions_cards() {
    let container = stage("web-init", 2);
    let mut bridge = init_physics_bridge("web-init", None).unwrap();
    assert_eq!(bridge.tracked_count(), 2);

    let cards = container.query_selector_all(".matter-box").unwrap();
    for i in 0..cards.length() {
        let card: HtmlElement = cards.get(i).unwrap().dyn_into().unwrap();
        let style = card.style();
        assert_eq!(style.get_property_value("position").unwrap(), "absolute");
        assert!(style.get_property_value("transform").unwrap().starts_with("translate("));
    }
    bridge.destroy();
    bridge.destroy();
}

#[wasm_bindgen_test]
fn init_without_container_returns_none() {
    assert!(init_physics_bridge("web-missing", None).is_none());
}

#[wasm_bindgen_test]
fn bad_config_falls_back_to_defaults() {
    stage("web-config", 1);
    let bridge = init_physics_bridge("web-config", Some("{ not json".to_string()));
    assert!(bridge.is_some());
}

#[wasm_bindgen_test]
fn stylesheet_positioned_container_keeps_its_position() {
    let doc = document();
    let sheet = doc.create_element("style").unwrap();
    sheet.set_text_content(Some("#web-absolute { position: absolute; top: 0; left: 0; }"));
    doc.body().unwrap().append_child(&sheet).unwrap();

    let container = stage("web-absolute", 1);
    let _bridge = init_physics_bridge("web-absolute", None).unwrap();

    let window = web_sys::window().unwrap();
    let computed = window.get_computed_style(&container).unwrap().unwrap();
    assert_eq!(computed.get_property_value("position").unwrap(), "absolute");
    assert_eq!(container.style().get_property_value("position").unwrap(), "");
}

#[wasm_bindgen_test]
fn static_container_is_anchored() {
    let container = stage("web-static", 1);
    let _bridge = init_physics_bridge("web-static", None).unwrap();
    assert_eq!(container.style().get_property_value("position").unwrap(), "relative");
}

#[wasm_bindgen_test]
fn stopped_ticker_releases_its_callback() {
    let window = web_sys::window().unwrap();
    let frames = Rc::new(Cell::new(0u32));
    let counted = frames.clone();
    let ticker = Ticker::start(&window, move |_| counted.set(counted.get() + 1)).unwrap();
    assert_eq!(Rc::strong_count(&frames), 2);

    ticker.stop();
    assert!(!ticker.is_running());
    assert_eq!(Rc::strong_count(&frames), 1);
}

#[wasm_bindgen_test]
async fn destroy_releases_the_frame_loop() {
    stage("web-teardown", 1);
    let mut bridge = init_physics_bridge("web-teardown", None).unwrap();
    sleep(50).await;
    bridge.destroy();
    let ticks = bridge.ticks();
    sleep(100).await;
    assert_eq!(bridge.ticks(), ticks);
}

#[wasm_bindgen_test]
async fn scrolling_the_trigger_into_view_fires_once() {
    stage("web-scroll", 2);
    spacer(5000);
    let target = document().create_element("div").unwrap();
    target.set_id("web-scroll-target");
    target.set_text_content(Some("drop"));
    document().body().unwrap().append_child(&target).unwrap();

    let config = r#"{"trigger_id": "web-scroll-target", "visibility_threshold": 0.0}"#;
    let bridge = init_physics_bridge("web-scroll", Some(config.to_string())).unwrap();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    sleep(100).await;
    assert_eq!(bridge.trigger_state(), "observing");
    assert!(!bridge.is_active());

    target.scroll_into_view();
    sleep(200).await;
    assert_eq!(bridge.trigger_state(), "fired");
    assert!(bridge.is_active());
    let ticks = bridge.ticks();

    // Leave and come back: the observer is gone, nothing re-fires.
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    sleep(100).await;
    target.scroll_into_view();
    sleep(200).await;
    assert_eq!(bridge.trigger_state(), "fired");
    assert!(bridge.is_active());
    assert!(bridge.ticks() > ticks);
}
