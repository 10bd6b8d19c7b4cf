//! demos/spinning_triangle.rs – RGB triangle spinning at 50°/s, escape quits

use glfw::{Action, Key, Modifiers, Scancode};
use glfw_app::{gl, Application, Host, WindowConfig};

const VERTEX_SHADER: &str = r"#version 330 core
layout(location = 0) in vec2 position;
layout(location = 1) in vec3 color;
out vec3 v_color;
void main() {
    v_color = color;
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core
in vec3 v_color;
out vec4 frag_color;
void main() {
    frag_color = vec4(v_color, 1.0);
}
";

// x, y, r, g, b per corner, before rotation and aspect correction
const CORNERS: [[f32; 5]; 3] = [
    [-0.6, -0.4, 1.0, 0.0, 0.0],
    [0.6, -0.4, 0.0, 1.0, 0.0],
    [0.0, 0.6, 0.0, 0.0, 1.0],
];

const DEGREES_PER_SECOND: f32 = 50.0;

struct SpinningTriangle {
    program: u32,
    vao: u32,
    vbo: u32,
}

impl SpinningTriangle {
    /// Needs the host's context to be current (it is, after `Host::new`).
    fn new() -> Self {
        let program = link_program(VERTEX_SHADER, FRAGMENT_SHADER);

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            let stride = (5 * std::mem::size_of::<f32>()) as gl::types::GLsizei;
            gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, std::ptr::null());
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                (2 * std::mem::size_of::<f32>()) as *const std::ffi::c_void,
            );
            gl::EnableVertexAttribArray(1);
        }

        Self { program, vao, vbo }
    }
}

impl Application for SpinningTriangle {
    fn frame(&mut self, host: &mut Host) {
        let (width, height) = host.framebuffer_size();
        if height == 0 {
            return; // minimized
        }
        let ratio = width as f32 / height as f32;

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        let angle = host.time() as f32 * DEGREES_PER_SECOND.to_radians();
        let (sin, cos) = angle.sin_cos();

        // Rotate around the origin on the CPU, then squeeze x by the aspect
        // ratio so the triangle keeps its shape when the window doesn't.
        let mut vertices = [0.0f32; 15];
        for (slot, corner) in vertices.chunks_exact_mut(5).zip(&CORNERS) {
            let [x, y, r, g, b] = *corner;
            slot[0] = (x * cos - y * sin) / ratio;
            slot[1] = x * sin + y * cos;
            slot[2] = r;
            slot[3] = g;
            slot[4] = b;
        }

        unsafe {
            gl::UseProgram(self.program);
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(&vertices) as gl::types::GLsizeiptr,
                vertices.as_ptr().cast(),
                gl::DYNAMIC_DRAW,
            );
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
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

    let mut host = Host::new(&WindowConfig::new("Spinning triangle", 640, 480))?;
    // GL objects need the context Host::new made current
    let mut app = SpinningTriangle::new();
    host.run(&mut app);
    Ok(())
}
