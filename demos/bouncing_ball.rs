//! demos/bouncing_ball.rs – circle dropping under gravity, bouncing off the
//! bottom edge; escape quits

use glfw::{Action, Key, Modifiers, Scancode};
use glfw_app::{gl, launch, Application, Host, WindowConfig};
use log::trace;

const VERTEX_SHADER: &str = r"#version 330 core
layout(location = 0) in vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0);
}
";

// per-frame units; the loop is vsync-paced
const GRAVITY: f32 = 0.0001;
const RADIUS: f32 = 0.1;
const SEGMENTS: usize = 20;

struct Pipeline {
    program: u32,
    vao: u32,
    vbo: u32,
}

impl Pipeline {
    fn new() -> Self {
        let program = link_program(VERTEX_SHADER, FRAGMENT_SHADER);

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * std::mem::size_of::<f32>()) as gl::types::GLsizei,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);
        }

        Self { program, vao, vbo }
    }
}

struct BouncingBall {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    // GL objects need a current context, so this waits for the first frame
    pipeline: Option<Pipeline>,
}

impl BouncingBall {
    fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.8,
            vx: 0.0,
            vy: 0.0,
            pipeline: None,
        }
    }

    fn step(&mut self) {
        if self.y - RADIUS <= -1.0 {
            self.vy = self.vy.abs(); // bounce off the bottom edge
        } else {
            self.vy -= GRAVITY;
        }
        self.x += self.vx;
        self.y += self.vy;
    }
}

impl Application for BouncingBall {
    fn frame(&mut self, host: &mut Host) {
        let (width, height) = host.framebuffer_size();
        if height == 0 {
            return; // minimized
        }
        let ratio = width as f32 / height as f32;

        self.step();
        trace!("ball at y={:.3}", self.y);

        // Triangle fan: center first, then the rim, wrapping back around.
        // x coordinates are squeezed by the aspect ratio.
        let mut vertices = [0.0f32; 2 * (SEGMENTS + 2)];
        vertices[0] = self.x / ratio;
        vertices[1] = self.y;
        for i in 0..=SEGMENTS {
            let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            vertices[2 + 2 * i] = (self.x + RADIUS * angle.cos()) / ratio;
            vertices[3 + 2 * i] = self.y + RADIUS * angle.sin();
        }

        let pipeline = self.pipeline.get_or_insert_with(Pipeline::new);
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            gl::UseProgram(pipeline.program);
            gl::BindVertexArray(pipeline.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, pipeline.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(&vertices) as gl::types::GLsizeiptr,
                vertices.as_ptr().cast(),
                gl::DYNAMIC_DRAW,
            );
            gl::DrawArrays(gl::TRIANGLE_FAN, 0, (SEGMENTS + 2) as gl::types::GLsizei);
        }
    }

    fn on_key(
        &mut self,
        host: &mut Host,
        key: Key,
        _scancode: Scancode,
        action: Action,
        _mods: Modifiers,
    ) {
        if key == Key::Escape && action == Action::Press {
            host.request_close();
        }
    }
}

fn compile_shader(kind: gl::types::GLenum, source: &str) -> u32 {
    unsafe {
        let shader = gl::CreateShader(kind);
        let ptr = source.as_ptr().cast();
        let len = source.len() as gl::types::GLint;
        gl::ShaderSource(shader, 1, &ptr, &len);
        gl::CompileShader(shader);

        let mut status = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == 0 {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut log = vec![0u8; len as usize];
            gl::GetShaderInfoLog(shader, len, std::ptr::null_mut(), log.as_mut_ptr().cast());
            panic!("shader compile failed: {}", String::from_utf8_lossy(&log));
        }
        shader
    }
}

fn link_program(vertex: &str, fragment: &str) -> u32 {
    let vs = compile_shader(gl::VERTEX_SHADER, vertex);
    let fs = compile_shader(gl::FRAGMENT_SHADER, fragment);
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);
        gl::DeleteShader(vs);
        gl::DeleteShader(fs);

        let mut status = 0;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        assert!(status != 0, "program link failed");
        program
    }
}

fn main() -> glfw_app::Result<()> {
    env_logger::init();

    launch(
        &WindowConfig::new("Bouncing ball", 640, 480),
        &mut BouncingBall::new(),
    )
}
