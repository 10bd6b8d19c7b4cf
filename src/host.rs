// src/host.rs

use std::sync::{Arc, Mutex};

use glfw::{Context, Glfw, GlfwReceiver, PWindow, SwapInterval, WindowEvent, WindowMode};
use log::{debug, info};
use smallvec::SmallVec;

use crate::app::Application;
use crate::config::WindowConfig;
use crate::error::{HostError, Result};

/// Errors glfw reports through its global slot land here and are drained to
/// the running application's `on_error` hook once per loop iteration.
type ErrorSink = Arc<Mutex<Vec<(glfw::Error, String)>>>;

/// Owns one window + rendering context and drives the blocking frame loop.
///
/// Exactly one window per host; the host holds it for its whole lifetime.
/// Dropping the host destroys the window first, then the runtime token
/// (field order below).
pub struct Host {
    window: PWindow,
    events: GlfwReceiver<(f64, WindowEvent)>,
    errors: ErrorSink,
    glfw: Glfw,
}

impl Host {
    /// Brings up the glfw runtime and creates a window + context of the
    /// configured size and title, made current with vsync enabled and GL
    /// symbols loaded.
    ///
    /// Fails with [`HostError::Initialization`] when the runtime is
    /// unavailable and [`HostError::WindowCreation`] when glfw returns no
    /// handle; on the latter path the runtime token is released before the
    /// error propagates.
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let errors = ErrorSink::default();

        // The global error slot forwards into host-owned state instead of a
        // process-wide "active instance" pointer, so the adapter stays valid
        // while no application is running.
        let mut glfw = glfw::init({
            let sink = Arc::clone(&errors);
            move |error, description| {
                if let Ok(mut sink) = sink.lock() {
                    sink.push((error, description));
                }
            }
        })?;

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or_else(|| HostError::WindowCreation {
                title: config.title.clone(),
                width: config.width,
                height: config.height,
            })?;

        window.make_current();
        glfw.set_swap_interval(SwapInterval::Sync(1));
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        // Hooks and applications issue GL calls against this context.
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        info!(
            "created {}x{} window \"{}\"",
            config.width, config.height, config.title
        );

        Ok(Self {
            window,
            events,
            errors,
            glfw,
        })
    }

    /// Blocking frame loop. Returns once the window's close flag is set,
    /// either by a hook (see [`request_close`](Host::request_close)) or by
    /// the window system.
    ///
    /// Each iteration renders via [`Application::frame`], presents the frame
    /// and dispatches pending events into the hooks. Pacing comes from the
    /// swap interval alone.
    pub fn run<A: Application>(&mut self, app: &mut A) {
        info!("entering frame loop");

        while !self.window.should_close() {
            app.frame(self);

            self.window.swap_buffers();
            self.glfw.poll_events();

            // Drain the receiver before dispatching so hooks can borrow the
            // host mutably.
            let events: SmallVec<[(f64, WindowEvent); 8]> =
                glfw::flush_messages(&self.events).collect();
            for (_, event) in events {
                match event {
                    WindowEvent::Key(key, scancode, action, mods) => {
                        app.on_key(self, key, scancode, action, mods);
                    }
                    WindowEvent::FramebufferSize(width, height) => {
                        app.on_resize(self, width, height);
                    }
                    _ => {}
                }
            }

            let pending = self
                .errors
                .lock()
                .map(|mut sink| std::mem::take(&mut *sink))
                .unwrap_or_default();
            for (error, description) in pending {
                debug!("glfw error {:?}: {}", error, description);
                app.on_error(error, &description);
            }
        }

        info!("frame loop finished");
    }

    /// Current framebuffer size, queried live from glfw (never cached).
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    pub fn framebuffer_width(&self) -> i32 {
        self.framebuffer_size().0
    }

    pub fn framebuffer_height(&self) -> i32 {
        self.framebuffer_size().1
    }

    /// Seconds since the runtime came up, from glfw's monotonic clock.
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Signals the frame loop to stop after the current iteration.
    pub fn request_close(&mut self) {
        self.window.set_should_close(true);
    }

    /// Raw window handle, for direct glfw calls the host does not wrap.
    pub fn window(&self) -> &glfw::Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut glfw::Window {
        &mut self.window
    }
}

/// Builds a host for `config` and runs `app` on it, returning when the
/// window closes.
pub fn launch<A: Application>(config: &WindowConfig, app: &mut A) -> Result<()> {
    let mut host = Host::new(config)?;
    host.run(app);
    Ok(())
}
