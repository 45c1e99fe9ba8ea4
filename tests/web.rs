#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlAudioElement, HtmlCanvasElement, WebGl2RenderingContext as GL};

use crt_homepage::frame::FrameTarget;
use crt_homepage::player::Player;
use crt_homepage::playlist::Playlist;
use crt_homepage::shader::ShaderVariant;
use crt_homepage::viewport::SurfaceSize;
use crt_homepage::wasm::player::HtmlMedia;
use crt_homepage::wasm::render::{compile_shader, GlSurface};
use crt_homepage::PageError;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn gl_of(canvas: &HtmlCanvasElement) -> Option<GL> {
    canvas.get_context("webgl2").ok()??.dyn_into().ok()
}

#[wasm_bindgen_test]
fn both_variants_compile_and_link() {
    for variant in [ShaderVariant::Crt, ShaderVariant::Wave] {
        match GlSurface::new(canvas(), variant) {
            // Headless runners without a GPU backend.
            Err(PageError::UnsupportedContext) => return,
            Err(err) => panic!("{} failed: {}", variant, err),
            Ok(_) => {}
        }
    }
}

#[wasm_bindgen_test]
fn broken_fragment_reports_compile_error() {
    let canvas = canvas();
    let Some(gl) = gl_of(&canvas) else { return };
    let err = compile_shader(&gl, GL::FRAGMENT_SHADER, "#version 300 es\nvoid main() { nope; }")
        .unwrap_err();
    assert!(matches!(err, PageError::ShaderCompile(_)), "{:?}", err);
}

#[wasm_bindgen_test]
fn surface_resizes_to_display() {
    let canvas = canvas();
    canvas.style().set_property("display", "block").unwrap();
    canvas.style().set_property("width", "123px").unwrap();
    canvas.style().set_property("height", "45px").unwrap();
    let mut surface = match GlSurface::new(canvas, ShaderVariant::Crt) {
        Ok(s) => s,
        Err(_) => return,
    };
    let display = surface.display_size();
    assert_eq!(display, SurfaceSize::new(123, 45));
    surface.resize_surface(display);
    assert_eq!(surface.surface_size(), display);
}

#[wasm_bindgen_test]
fn player_drives_audio_element() {
    let audio = HtmlAudioElement::new().unwrap();
    let mut player = Player::new(Playlist::default(), HtmlMedia::new(audio.clone()));

    assert!(audio.src().ends_with(&player.current_track().src));

    player.set_volume(0.3);
    assert_eq!(audio.volume(), 0.3);

    player.load(1);
    assert!(audio.src().ends_with(&Playlist::default().tracks()[1].src));
    assert!(!player.is_playing());
}
