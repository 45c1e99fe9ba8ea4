use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::PageError;
use crate::frame::{FrameScheduler, FrameTarget, FrameUniforms, RenderLoop};
use crate::shader::{
    ShaderVariant, ATTR_POSITION, QUAD_VERTICES, UNIFORM_RESOLUTION, UNIFORM_TIME, VERTEX_SOURCE,
};
use crate::viewport::SurfaceSize;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// The background canvas with its program and quad ready to draw.
pub struct GlSurface {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    resolution: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
}

impl GlSurface {
    pub fn new(canvas: HtmlCanvasElement, variant: ShaderVariant) -> Result<Self, PageError> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or(PageError::UnsupportedContext)?
            .dyn_into()
            .map_err(|_| PageError::UnsupportedContext)?;

        let vertex = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SOURCE)?;
        let fragment = compile_shader(&gl, GL::FRAGMENT_SHADER, &variant.fragment_source())?;
        let program = link_program(&gl, &vertex, &fragment)?;

        let position = gl.get_attrib_location(&program, ATTR_POSITION);
        if position < 0 {
            return Err(PageError::ProgramLink(format!("attribute {} not found", ATTR_POSITION)));
        }
        let position = position as u32;

        let buffer = gl
            .create_buffer()
            .ok_or_else(|| PageError::Js("failed to create buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| PageError::Js("failed to create vertex array".into()))?;
        gl.bind_vertex_array(Some(&vao));
        gl.enable_vertex_attrib_array(position);
        gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 0, 0);

        let resolution = gl.get_uniform_location(&program, UNIFORM_RESOLUTION);
        let time = gl.get_uniform_location(&program, UNIFORM_TIME);

        Ok(Self {
            gl,
            canvas,
            program,
            vao,
            resolution,
            time,
        })
    }
}

impl FrameTarget for GlSurface {
    fn display_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resize_surface(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
    }

    fn bind_program(&mut self) {
        self.gl.use_program(Some(&self.program));
        self.gl.bind_vertex_array(Some(&self.vao));
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        let [w, h] = uniforms.resolution;
        self.gl.uniform2f(self.resolution.as_ref(), w, h);
        self.gl.uniform1f(self.time.as_ref(), uniforms.time);
    }

    fn draw_quad(&mut self, vertex_count: i32) {
        self.gl.draw_arrays(GL::TRIANGLES, 0, vertex_count);
    }
}

pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, PageError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| PageError::ShaderCompile("unable to create shader object".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Ok(shader);
    }
    let info = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(PageError::ShaderCompile(info))
}

pub fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, PageError> {
    let program = gl
        .create_program()
        .ok_or_else(|| PageError::ProgramLink("unable to create program object".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Ok(program);
    }
    let info = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(PageError::ProgramLink(info))
}

/// Re-arms the frame callback through `requestAnimationFrame`.
struct AnimationFrame<'a>(&'a RefCell<Option<FrameCallback>>);

impl FrameScheduler for AnimationFrame<'_> {
    fn schedule_next(&mut self) {
        if let Some(callback) = self.0.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Compile the background program and start repainting every display frame.
/// On error nothing is drawn and no frame is scheduled.
pub fn start(canvas: HtmlCanvasElement, variant: ShaderVariant) -> Result<(), PageError> {
    let surface = GlSurface::new(canvas, variant)?;
    let mut render_loop = RenderLoop::new(surface);

    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. The `Option` lets us create the
    // `Closure` first and store it afterwards.
    let f: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        render_loop.frame(timestamp, &mut AnimationFrame(&f));
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    log::info!("background running ({})", variant);
    Ok(())
}
