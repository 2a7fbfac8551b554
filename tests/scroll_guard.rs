#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use rst_site::navigation::{navigate_to_section, NavError, NavState, Section, Viewport};
use rst_site::utils::scroll::{element_exists, DomViewport, ScrollListener};
use wasm_bindgen_test::*;
use web_sys::Event;

wasm_bindgen_test_configure!(run_in_browser);

fn fire_scroll() {
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

fn add_section(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn listener_stops_after_drop() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        ScrollListener::attach(move |_| hits.set(hits.get() + 1)).unwrap()
    };

    fire_scroll();
    fire_scroll();
    assert_eq!(hits.get(), 2);

    drop(listener);
    fire_scroll();
    assert_eq!(hits.get(), 2);
}

#[wasm_bindgen_test]
fn listener_reports_window_offset() {
    let seen = Rc::new(Cell::new(-1.0));
    let _listener = {
        let seen = seen.clone();
        ScrollListener::attach(move |offset| seen.set(offset)).unwrap()
    };

    fire_scroll();
    let expected = web_sys::window().unwrap().scroll_y().unwrap();
    assert_eq!(seen.get(), expected);
}

#[wasm_bindgen_test]
fn missing_anchor_is_reported_not_raised() {
    assert!(!element_exists("about").unwrap());

    let mut state = NavState { scrolled: false, menu_open: true };
    let result = state.navigate(&DomViewport, "about");

    assert_eq!(result, Err(NavError::TargetNotFound("about")));
    assert!(state.menu_open);
}

#[wasm_bindgen_test]
fn present_anchor_is_revealed() {
    add_section("services");

    assert_eq!(navigate_to_section(&DomViewport, "services"), Ok(Section::Services));
    assert_eq!(DomViewport.reveal(Section::Services), Ok(()));
}
