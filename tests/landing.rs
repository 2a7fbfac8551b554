#![cfg(target_arch = "wasm32")]

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use rst_site::components::navbar::{use_section_navigator, NavigationShell};
use rst_site::navigation::{Section, SCROLL_THRESHOLD};
use rst_site::pages::landing::Landing;
use rst_site::utils::scroll::element_exists;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn query(within: &Element, selector: &str) -> Element {
    within
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
}

fn button(within: &Element, selector: &str) -> HtmlElement {
    query(within, selector).dyn_into().unwrap()
}

fn mount() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

fn expanded(menu_button: &HtmlElement) -> Option<String> {
    menu_button.get_attribute("aria-expanded")
}

#[wasm_bindgen_test]
async fn landing_page_drives_navigation_shell() {
    let root = mount();
    yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;

    for section in Section::ALL {
        assert!(element_exists(section.id()).unwrap(), "missing #{}", section);
    }

    let nav = query(&root, "nav");
    assert!(nav.class_list().contains("bg-transparent"));

    // Menu button toggles the dropdown
    let menu_button = button(&root, "nav button[aria-expanded]");
    assert_eq!(expanded(&menu_button).as_deref(), Some("false"));
    menu_button.click();
    settle().await;
    assert_eq!(expanded(&menu_button).as_deref(), Some("true"));
    menu_button.click();
    settle().await;
    assert_eq!(expanded(&menu_button).as_deref(), Some("false"));

    // Picking a dropdown entry closes the menu
    menu_button.click();
    settle().await;
    button(&root, "nav div.absolute button:nth-child(1)").click();
    settle().await;
    assert_eq!(expanded(&menu_button).as_deref(), Some("false"));

    // Form labels point at their controls
    for id in ["contact-name", "contact-phone", "contact-topic", "contact-message"] {
        query(&root, &format!("label[for='{}']", id));
        assert!(element_exists(id).unwrap(), "missing #{}", id);
    }

    // Header style follows the window offset
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 400.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    settle().await;
    let offset = window.scroll_y().unwrap();
    let nav = query(&root, "nav");
    assert_eq!(nav.class_list().contains("shadow-md"), offset > SCROLL_THRESHOLD);

    // A dropdown entry whose section is gone leaves the menu open
    query(&root, "#about").remove();
    menu_button.click();
    settle().await;
    assert_eq!(expanded(&menu_button).as_deref(), Some("true"));
    button(&root, "nav div.absolute button:nth-child(3)").click();
    settle().await;
    assert_eq!(expanded(&menu_button).as_deref(), Some("true"));
}

thread_local! {
    static CONSUMER_RENDERS: Cell<u32> = Cell::new(0);
}

#[function_component(NavigatorConsumer)]
fn navigator_consumer() -> Html {
    let _navigator = use_section_navigator();
    CONSUMER_RENDERS.with(|renders| renders.set(renders.get() + 1));
    html! { <div style="height: 4000px"></div> }
}

#[function_component(ShellWithConsumer)]
fn shell_with_consumer() -> Html {
    html! {
        <NavigationShell>
            <NavigatorConsumer />
        </NavigationShell>
    }
}

#[wasm_bindgen_test]
async fn shell_state_changes_leave_navigator_consumers_alone() {
    let root = mount();
    yew::Renderer::<ShellWithConsumer>::with_root(root.clone()).render();
    settle().await;
    assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);

    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 400.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    let menu_button = button(&root, "nav button[aria-expanded]");
    menu_button.click();
    settle().await;

    assert_eq!(expanded(&menu_button).as_deref(), Some("true"));
    assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);
}
