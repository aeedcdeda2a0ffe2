//! GLFW-based window and OpenGL context management
//!
//! This module wraps window creation, context binding, and event plumbing for
//! an OpenGL 3.3 core-profile context. The window owns the GLFW library
//! handle, the platform window, and the event receiver; dropping it releases
//! all three.
//!
//! Event delivery is single-threaded: GLFW invokes callbacks synchronously
//! inside [`Window::poll_events`], and the `glfw` crate routes them into a
//! per-window receiver drained by the caller. Nothing here is touched from
//! more than one thread.

use thiserror::Error;

/// OpenGL context version requested at window creation (major, minor).
pub const GL_CONTEXT_VERSION: (u32, u32) = (3, 3);

/// Window management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The platform could not create a window/context matching the hints
    #[error("failed to create GLFW window (OpenGL {}.{} core profile)", GL_CONTEXT_VERSION.0, GL_CONTEXT_VERSION.1)]
    CreationFailed,

    /// OpenGL function pointers could not be resolved after context binding
    #[error("failed to load OpenGL function pointers")]
    LoaderFailed,
}

/// Convenience result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with an OpenGL 3.3 core-profile context.
    ///
    /// The context is created but not yet current; call
    /// [`Window::bind_context`] before issuing any GL call.
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        // Request a core-profile context, no deprecated features
        let (major, minor) = GL_CONTEXT_VERSION;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        // Create window
        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // Set up event polling
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        log::debug!("created {}x{} window \"{}\"", width, height, title);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Make the context current on the calling thread and resolve the OpenGL
    /// function pointers through GLFW's loader.
    ///
    /// Fails with [`WindowError::LoaderFailed`] when the entry points this
    /// crate issues cannot be resolved.
    pub fn bind_context(&mut self) -> WindowResult<()> {
        use glfw::Context;

        self.window.make_current();
        gl::load_with(|symbol| self.window.get_proc_address(symbol));

        if !(gl::Viewport::is_loaded() && gl::ClearColor::is_loaded() && gl::Clear::is_loaded()) {
            return Err(WindowError::LoaderFailed);
        }

        log::debug!("OpenGL context bound, function pointers resolved");
        Ok(())
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending platform events. Registered callbacks fire
    /// synchronously inside this call, on this thread.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain events gathered by the last [`Window::poll_events`] call.
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Present the back buffer.
    pub fn swap_buffers(&mut self) {
        use glfw::Context;
        self.window.swap_buffers();
    }

    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Drawable surface resolution in pixels; may differ from the window
    /// size on high-DPI displays.
    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Whether `key` is currently held down.
    pub fn key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_error_mentions_context_version() {
        let msg = WindowError::CreationFailed.to_string();
        assert!(msg.contains("3.3"));
    }

    #[test]
    fn test_loader_error_display() {
        assert_eq!(
            WindowError::LoaderFailed.to_string(),
            "failed to load OpenGL function pointers"
        );
    }
}
