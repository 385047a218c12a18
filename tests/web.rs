//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field_background::frame_loop::FrameLoop;
use particle_field_background::ParticleBackground;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn mounts_on_existing_canvas() {
    let canvas = add_canvas("particles-existing");
    let mut background = ParticleBackground::mount("particles-existing");
    assert!(background.is_running());
    assert_eq!(background.particle_count(), 50);

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.style().get_property_value("pointer-events").unwrap(), "none");

    background.stop();
    assert!(!background.is_running());
    assert_eq!(background.particle_count(), 0);
    // a second stop is harmless
    background.stop();
}

#[wasm_bindgen_test]
fn missing_canvas_stays_stopped() {
    let background = ParticleBackground::mount("no-such-canvas");
    assert!(!background.is_running());
    assert_eq!(background.particle_count(), 0);
}

#[wasm_bindgen_test]
fn webgl_canvas_has_no_2d_context() {
    let canvas = add_canvas("particles-webgl");
    let _ = canvas.get_context("webgl");
    let background = ParticleBackground::mount("particles-webgl");
    // only fails to start when the browser actually handed out a webgl context
    if canvas.get_context("webgl").ok().flatten().is_some() {
        assert!(!background.is_running());
    }
}

#[wasm_bindgen_test]
fn overlay_canvas_is_removed_on_stop() {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let before = body.child_element_count();
    let mut background = ParticleBackground::mount_overlay();
    assert!(background.is_running());
    assert_eq!(body.child_element_count(), before + 1);
    assert_eq!(body.first_element_child().unwrap().tag_name(), "CANVAS");
    background.stop();
    assert_eq!(body.child_element_count(), before);
}

// Resolves on the next display refresh.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn frame_loop_runs_until_stopped() {
    let window = web_sys::window().unwrap();
    let calls = Rc::new(Cell::new(0u32));
    let step_calls = calls.clone();
    let mut frame_loop = FrameLoop::start(&window, move || {
        step_calls.set(step_calls.get() + 1);
        true
    })
    .unwrap();

    for _ in 0..3 {
        next_frame().await;
    }
    assert!(calls.get() > 0);
    assert!(frame_loop.is_running());

    frame_loop.stop();
    assert!(!frame_loop.is_running());
    let at_stop = calls.get();
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(calls.get(), at_stop);
}

#[wasm_bindgen_test]
async fn frame_loop_ends_when_step_declines() {
    let window = web_sys::window().unwrap();
    let calls = Rc::new(Cell::new(0u32));
    let step_calls = calls.clone();
    let frame_loop = FrameLoop::start(&window, move || {
        step_calls.set(step_calls.get() + 1);
        false
    })
    .unwrap();

    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(calls.get(), 1);
    assert!(!frame_loop.is_running());
}
