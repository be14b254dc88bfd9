// Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use js_sys::{Object, Reflect};
use simple_particles::config::{ParticleOptions, MAX_PARTICLES};
use simple_particles::loading::LoadingScreen;
use simple_particles::sections::{SectionNavigator, Transition};
use simple_particles::SimpleParticles;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_div(id: &str) -> HtmlElement {
    let document = document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let div = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    div.set_id(id);
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn fire(target: &web_sys::EventTarget, name: &str) {
    target.dispatch_event(&Event::new(name).unwrap()).unwrap();
}

fn window_size() -> (u32, u32) {
    let window = web_sys::window().unwrap();
    (
        window.inner_width().unwrap().as_f64().unwrap() as u32,
        window.inner_height().unwrap().as_f64().unwrap() as u32,
    )
}

fn options(pairs: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in pairs {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn mount_without_container_is_a_no_op() {
    assert!(SimpleParticles::mount("no-such-mount", JsValue::UNDEFINED).is_none());
}

#[wasm_bindgen_test]
fn mount_appends_a_canvas_and_spawns_particles() {
    let container = add_div("particles-host");
    let particles = SimpleParticles::mount(
        "particles-host",
        options(&[("particleCount", JsValue::from_f64(12.0))]),
    )
    .expect("mounted");

    assert_eq!(particles.particle_count(), 12);
    let canvas = container.first_element_child().expect("canvas appended");
    assert_eq!(canvas.tag_name().to_lowercase(), "canvas");
    let style = canvas.dyn_into::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
}

#[wasm_bindgen_test]
fn canvas_follows_window_resizes() {
    let container = add_div("resize-host");
    let particles = SimpleParticles::mount(
        "resize-host",
        options(&[("particleCount", JsValue::from_f64(7.0))]),
    )
    .expect("mounted");
    let canvas = container
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();

    let (width, height) = window_size();
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);

    canvas.set_width(1);
    fire(&web_sys::window().unwrap(), "resize");
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);
    assert_eq!(particles.particle_count(), 7);
}

#[wasm_bindgen_test]
fn huge_particle_counts_are_capped_not_fatal() {
    let parsed =
        ParticleOptions::from_js(&options(&[("particleCount", JsValue::from_f64(1e300))])).unwrap();
    assert_eq!(parsed.particle_count, MAX_PARTICLES);

    add_div("crowded-host");
    let particles = SimpleParticles::mount(
        "crowded-host",
        options(&[("particleCount", JsValue::from_f64(1e300))]),
    )
    .expect("mounted");
    assert_eq!(particles.particle_count(), MAX_PARTICLES);
}

#[wasm_bindgen_test]
fn zero_particles_are_allowed() {
    add_div("empty-host");
    let particles = SimpleParticles::mount(
        "empty-host",
        options(&[("particleCount", JsValue::from_f64(0.0))]),
    )
    .expect("mounted");
    assert_eq!(particles.particle_count(), 0);
}

#[wasm_bindgen_test]
fn options_are_read_from_a_js_object() {
    let parsed = ParticleOptions::from_js(&options(&[
        ("color", JsValue::from_str("#00ff00")),
        ("baseSpeed", JsValue::from_f64(0.8)),
        ("minSize", JsValue::from_str("not a number")),
    ]))
    .unwrap();
    assert_eq!(parsed.color.to_css(), "#00ff00");
    assert_eq!(parsed.base_speed, 0.8);
    assert_eq!(parsed.min_size, 2.0);
    assert_eq!(parsed.particle_count, 60);

    assert!(ParticleOptions::from_js(&options(&[("color", JsValue::from_str("red"))])).is_err());
    assert_eq!(
        ParticleOptions::from_js(&JsValue::UNDEFINED).unwrap(),
        ParticleOptions::default()
    );
}

#[wasm_bindgen_test]
fn showing_a_section_starts_its_animation_once() {
    let container = add_div("about_container");
    container.style().set_property("display", "none").unwrap();
    let navigator = SectionNavigator::new().unwrap();

    assert_eq!(navigator.transition("left", Transition::Show), Ok(true));
    assert_eq!(
        container.style().get_property_value("display").unwrap(),
        "inherit"
    );
    assert!(container.class_list().contains("animated"));
    assert!(container.class_list().contains("slideInLeft"));
    assert!(navigator.is_animating("left"));

    // Still animating, so a close request is dropped
    assert_eq!(navigator.transition("left", Transition::Hide), Ok(false));
    assert!(!container.class_list().contains("slideOutLeft"));
}

#[wasm_bindgen_test]
fn finished_animations_clean_up_and_unlock_the_section() {
    let container = add_div("work_container");
    let navigator = SectionNavigator::new().unwrap();

    assert_eq!(navigator.transition("right", Transition::Show), Ok(true));
    fire(&container, "animationend");
    assert!(!container.class_list().contains("animated"));
    assert!(!container.class_list().contains("slideInRight"));
    assert!(!navigator.is_animating("right"));

    assert_eq!(navigator.transition("right", Transition::Hide), Ok(true));
    assert!(container.class_list().contains("slideOutRight"));
    fire(&container, "animationend");
    assert!(!container.class_list().contains("slideOutRight"));
    assert_eq!(
        container.style().get_property_value("display").unwrap(),
        "none"
    );
    assert!(!navigator.is_animating("right"));
}

#[wasm_bindgen_test]
fn unknown_sections_and_missing_containers_are_errors() {
    let navigator = SectionNavigator::new().unwrap();
    assert!(navigator.transition("middle", Transition::Show).is_err());
    if let Some(old) = document().get_element_by_id("top_container") {
        old.remove();
    }
    assert!(navigator.transition("top", Transition::Show).is_err());
    assert!(!navigator.is_animating("top"));
}

#[wasm_bindgen_test]
fn loading_screen_fades_out_when_present() {
    let screen = LoadingScreen::default();
    if let Some(old) = document().get_element_by_id("loading") {
        old.remove();
    }
    assert_eq!(screen.dismiss(&document()), Ok(false));

    let loading = add_div("loading");
    assert_eq!(screen.dismiss(&document()), Ok(true));
    assert!(loading.class_list().contains("animated"));
    assert!(loading.class_list().contains("fadeOut"));
}

#[wasm_bindgen_test]
fn faded_loading_screen_hides_itself_and_the_box() {
    let loading = add_div("loading");
    let boxed = add_div("box");
    let about = add_div("about");
    about.class_list().add_2("animated", "fadeIn").unwrap();

    assert_eq!(LoadingScreen::default().dismiss(&document()), Ok(true));
    fire(&loading, "animationend");

    assert!(!loading.class_list().contains("fadeOut"));
    assert_eq!(loading.style().get_property_value("display").unwrap(), "none");
    assert_eq!(boxed.style().get_property_value("display").unwrap(), "none");
    assert!(!about.class_list().contains("fadeIn"));
    assert!(!about.class_list().contains("animated"));
}
