//! GLSL sources and the fixed geometry of the background pass.

use std::fmt;
use std::str::FromStr;

pub const ATTR_POSITION: &str = "a_position";
pub const UNIFORM_RESOLUTION: &str = "iResolution";
pub const UNIFORM_TIME: &str = "iTime";

/// Two triangles spanning clip space, as (x, y) pairs.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const QUAD_VERTEX_COUNT: i32 = (QUAD_VERTICES.len() / 2) as i32;

pub const VERTEX_SOURCE: &str = r#"#version 300 es
in vec2 a_position;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

const FRAGMENT_HEAD: &str = r#"#version 300 es
precision highp float;

uniform vec2 iResolution;
uniform float iTime;

out vec4 fragColor;

const vec3 CHECK_DARK = vec3(0.0, 0.0, 0.0);
const vec3 CHECK_LIGHT = vec3(0.0, 0.2, 0.0);

void main() {
    vec2 uv = (gl_FragCoord.xy * 2.0 - iResolution.xy) / iResolution.y;
"#;

const FRAGMENT_WAVE: &str = r#"
    uv.x += sin(uv.y * 10.0 + iTime * 2.0) * 0.02;
    uv.y += cos(uv.x * 10.0 + iTime * 1.5) * 0.02;
"#;

const FRAGMENT_TAIL: &str = r#"
    vec2 cell = floor(uv * 15.0);
    float check = mod(cell.x + cell.y, 2.0);
    vec3 color = mix(CHECK_DARK, CHECK_LIGHT, check);

    float scan = sin(uv.y * 200.0) * 0.5 + 0.5;
    color *= mix(0.8, 1.2, scan);

    float vignette = length(uv * 0.9);
    color *= 1.0 - pow(vignette, 4.0);

    color.r += 0.02 * (1.0 - vignette);
    color.b += 0.01 * (1.0 - vignette);

    fragColor = vec4(color, 1.0);
}
"#;

/// Which fragment program paints the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderVariant {
    /// Checkerboard, scanlines, vignette and channel offset.
    #[default]
    Crt,
    /// Same as `Crt`, with a time-driven sinusoidal warp of the coordinates.
    Wave,
}

impl ShaderVariant {
    pub fn fragment_source(self) -> String {
        let warp = match self {
            ShaderVariant::Crt => "",
            ShaderVariant::Wave => FRAGMENT_WAVE,
        };
        [FRAGMENT_HEAD, warp, FRAGMENT_TAIL].concat()
    }
}

impl FromStr for ShaderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crt" => Ok(ShaderVariant::Crt),
            "wave" => Ok(ShaderVariant::Wave),
            other => Err(format!("unknown shader variant: {}", other)),
        }
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ShaderVariant::Crt => "crt",
            ShaderVariant::Wave => "wave",
        })
    }
}
