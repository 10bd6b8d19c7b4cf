//! Reusable windowed-application host over glfw.
//!
//! [`Host`] owns a single window + rendering context and drives a blocking,
//! vsync-paced frame loop. Applications plug in through the [`Application`]
//! trait: one required per-frame render hook and three optional hooks for
//! key input, runtime errors and framebuffer resizes.
//!
//! ```no_run
//! use glfw_app::{gl, launch, Application, Host, WindowConfig};
//!
//! struct Clear;
//!
//! impl Application for Clear {
//!     fn frame(&mut self, _host: &mut Host) {
//!         unsafe {
//!             gl::ClearColor(0.1, 0.1, 0.1, 1.0);
//!             gl::Clear(gl::COLOR_BUFFER_BIT);
//!         }
//!     }
//! }
//!
//! fn main() -> glfw_app::Result<()> {
//!     launch(&WindowConfig::new("clear", 640, 480), &mut Clear)
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod host;

pub use app::Application;
pub use config::WindowConfig;
pub use error::{HostError, Result};
pub use host::{launch, Host};

// The underlying libraries, re-exported so applications and the host agree
// on one version of both.
pub use gl;
pub use glfw;
