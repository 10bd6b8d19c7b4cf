// src/app.rs

use glfw::{Action, Error, Key, Modifiers, Scancode};

use crate::host::Host;

/// Capability contract a hosted application satisfies.
///
/// One required hook ([`frame`](Application::frame)) and three optional ones
/// with default bodies. The host calls every hook synchronously from the
/// thread driving the frame loop.
pub trait Application {
    /// Render one complete frame against the current context.
    ///
    /// The host does not clear, set up a projection, or touch any draw state
    /// itself; everything the frame needs happens here. The buffer swap runs
    /// right after this returns.
    fn frame(&mut self, host: &mut Host);

    /// Key event. Does nothing by default; override to e.g. request close on
    /// an escape gesture.
    fn on_key(
        &mut self,
        host: &mut Host,
        key: Key,
        scancode: Scancode,
        action: Action,
        mods: Modifiers,
    ) {
        let _ = (host, key, scancode, action, mods);
    }

    /// Runtime error reported by glfw. Advisory only; the loop keeps going.
    /// Does nothing by default. Must not panic.
    fn on_error(&mut self, error: Error, description: &str) {
        let _ = (error, description);
    }

    /// Framebuffer resize. Rearranges the GL viewport to the new size by
    /// default; overriding replaces that entirely, so an override that wants
    /// a viewport has to set one itself.
    fn on_resize(&mut self, host: &mut Host, width: i32, height: i32) {
        let _ = host;
        unsafe { gl::Viewport(0, 0, width, height) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl Application for Quiet {
        fn frame(&mut self, _host: &mut Host) {}
    }

    #[test]
    fn default_error_hook_is_a_silent_no_op() {
        let mut app = Quiet;
        app.on_error(Error::ApiUnavailable, "synthetic");
        app.on_error(Error::PlatformError, "");
    }
}
