//! CPU mirror of the background fragment program, checked against the GLSL
//! constants it is written from.

use crt_homepage::shader::{
    ShaderVariant, ATTR_POSITION, QUAD_VERTEX_COUNT, QUAD_VERTICES, UNIFORM_RESOLUTION, UNIFORM_TIME,
    VERTEX_SOURCE,
};

fn to_uv(frag: (f64, f64), res: (f64, f64)) -> (f64, f64) {
    ((frag.0 * 2.0 - res.0) / res.1, (frag.1 * 2.0 - res.1) / res.1)
}

fn vignette(uv: (f64, f64)) -> f64 {
    ((uv.0 * 0.9).powi(2) + (uv.1 * 0.9).powi(2)).sqrt()
}

fn shade(frag: (f64, f64), res: (f64, f64)) -> [f64; 3] {
    let (x, y) = to_uv(frag, res);
    let check = ((x * 15.0).floor() + (y * 15.0).floor()).rem_euclid(2.0);
    let mut c = [0.0, 0.2 * check, 0.0];

    let scan = (y * 200.0).sin() * 0.5 + 0.5;
    let bright = 0.8 + (1.2 - 0.8) * scan;
    let v = vignette((x, y));
    let fade = 1.0 - v.powi(4);
    for ch in c.iter_mut() {
        *ch *= bright * fade;
    }
    c[0] += 0.02 * (1.0 - v);
    c[2] += 0.01 * (1.0 - v);
    c
}

#[test]
fn centre_is_aspect_independent() {
    for res in [(1920.0, 1080.0), (1080.0, 1920.0), (500.0, 500.0)] {
        let centre = (res.0 / 2.0, res.1 / 2.0);
        assert_eq!(to_uv(centre, res), (0.0, 0.0));
        let c = shade(centre, res);
        assert!((c[0] - 0.02).abs() < 1e-12);
        assert!((c[2] - 0.01).abs() < 1e-12);
    }
}

#[test]
fn vertical_extent_is_unit() {
    let res = (1280.0, 720.0);
    assert_eq!(to_uv((640.0, 720.0), res).1, 1.0);
    assert_eq!(to_uv((640.0, 0.0), res).1, -1.0);
}

#[test]
fn vignette_fades_outward() {
    assert_eq!(1.0 - vignette((0.0, 0.0)).powi(4), 1.0);
    let mut prev = f64::MAX;
    for i in 0..=10 {
        let r = i as f64 / 10.0;
        let fade = 1.0 - vignette((r, r)).powi(4);
        assert!(fade <= prev);
        prev = fade;
    }
}

#[test]
fn quad_covers_clip_space_with_two_triangles() {
    assert_eq!(QUAD_VERTEX_COUNT, 6);
    let xs: Vec<f32> = QUAD_VERTICES.iter().step_by(2).copied().collect();
    let ys: Vec<f32> = QUAD_VERTICES.iter().skip(1).step_by(2).copied().collect();
    for v in xs.iter().chain(ys.iter()) {
        assert!(*v == -1.0 || *v == 1.0);
    }
    // Signed area of both triangles adds up to the full 2x2 square.
    let area: f32 = QUAD_VERTICES
        .chunks(6)
        .map(|t| ((t[2] - t[0]) * (t[5] - t[1]) - (t[4] - t[0]) * (t[3] - t[1])).abs() / 2.0)
        .sum();
    assert_eq!(area, 4.0);
}

#[test]
fn sources_declare_program_inputs() {
    assert!(VERTEX_SOURCE.contains(&format!("in vec2 {};", ATTR_POSITION)));
    for variant in [ShaderVariant::Crt, ShaderVariant::Wave] {
        let src = variant.fragment_source();
        assert!(src.starts_with("#version 300 es"));
        assert!(src.contains(&format!("uniform vec2 {};", UNIFORM_RESOLUTION)));
        assert!(src.contains(&format!("uniform float {};", UNIFORM_TIME)));
    }
}

#[test]
fn only_wave_warps_with_time() {
    let crt = ShaderVariant::Crt.fragment_source();
    let wave = ShaderVariant::Wave.fragment_source();
    assert!(!crt.contains("iTime *"));
    assert!(wave.contains("sin(uv.y * 10.0 + iTime * 2.0)"));
    assert_eq!("wave".parse::<ShaderVariant>(), Ok(ShaderVariant::Wave));
    assert!("plasma".parse::<ShaderVariant>().is_err());
}
