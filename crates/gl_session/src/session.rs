//! Window session lifecycle and render loop
//!
//! A [`WindowSession`] walks a fixed pipeline: library init and window
//! creation, context binding, viewport configuration, render loop, teardown.
//! The only feedback edge is the framebuffer-resize event, which updates the
//! viewport read by subsequent frames. Everything runs on the thread that
//! created the session; event callbacks fire synchronously during polling,
//! never concurrently with rendering.

use crate::config::SessionConfig;
use crate::window::{Window, WindowError};
use thiserror::Error;

/// Session-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Window or context error propagated from the platform layer
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// A lifecycle operation was called from the wrong phase
    #[error("invalid session phase: expected {expected:?}, found {actual:?}")]
    InvalidPhase {
        /// Phase the operation requires
        expected: SessionPhase,
        /// Phase the session was actually in
        actual: SessionPhase,
    },
}

/// Lifecycle phase of a [`WindowSession`].
///
/// Phases advance strictly forward; no phase is re-enterable. `Terminated`
/// is additionally reachable from any earlier phase on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No platform resources acquired yet
    Uninitialized,
    /// Window and context exist, context not yet current
    Created,
    /// Context current on the main thread, GL entry points resolved
    ContextBound,
    /// Render loop cycling
    Running,
    /// Close observed, loop exited, resources still held
    Closing,
    /// All platform resources released
    Terminated,
}

impl SessionPhase {
    /// Whether `next` is a legal transition out of this phase.
    pub fn can_advance_to(self, next: Self) -> bool {
        use SessionPhase::{Closing, ContextBound, Created, Running, Terminated, Uninitialized};
        if next == Terminated {
            // Failure edge: terminal from anywhere, but not re-enterable
            return self != Terminated;
        }
        matches!(
            (self, next),
            (Uninitialized, Created)
                | (Created, ContextBound)
                | (ContextBound, Running)
                | (Running, Closing)
        )
    }
}

/// The pixel rectangle rendering output is mapped into, anchored at the
/// framebuffer origin. Mirrors the most recently reported framebuffer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport covering `width` by `height` pixels
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from platform-reported dimensions, clamping negatives to zero
    pub fn from_reported(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    /// The `(x, y, width, height)` rectangle as passed to `glViewport`
    pub fn rect(self) -> (i32, i32, i32, i32) {
        (0, 0, self.width as i32, self.height as i32)
    }
}

/// A window, its OpenGL context, and the render loop that clears it.
///
/// Create with [`WindowSession::initialize`], bind with
/// [`WindowSession::bind_context`], then [`WindowSession::run`] until the
/// user closes the window or presses the configured quit key.
pub struct WindowSession {
    window: Window,
    config: SessionConfig,
    viewport: Viewport,
    phase: SessionPhase,
}

impl WindowSession {
    /// Initialize GLFW and create the window and context described by
    /// `config`.
    ///
    /// On failure every partially acquired platform resource has already
    /// been released; callers are expected to diagnose and exit non-zero.
    pub fn initialize(config: SessionConfig) -> Result<Self, SessionError> {
        log::info!(
            "initializing window session \"{}\" ({}x{})",
            config.title,
            config.width,
            config.height
        );
        let window = Window::new(&config.title, config.width, config.height)?;
        Ok(Self {
            window,
            viewport: Viewport::new(config.width, config.height),
            config,
            phase: SessionPhase::Created,
        })
    }

    /// Make the context current and resolve the OpenGL function pointers.
    ///
    /// On loader failure the session is left terminated; dropping it
    /// releases the window and context created by
    /// [`WindowSession::initialize`].
    pub fn bind_context(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Created)?;
        if let Err(e) = self.window.bind_context() {
            self.phase = SessionPhase::Terminated;
            return Err(e.into());
        }
        self.phase = SessionPhase::ContextBound;
        Ok(())
    }

    /// Point rendering output at `(0, 0, width, height)` and record the new
    /// dimensions.
    ///
    /// Called once at loop entry with the initial framebuffer size, then
    /// again for every resize the platform reports.
    pub fn configure_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        let (x, y, w, h) = self.viewport.rect();
        unsafe {
            gl::Viewport(x, y, w, h);
        }
        log::debug!("viewport set to {}x{}", width, height);
    }

    /// Run the render loop until the close flag is set or the platform
    /// reports a close request.
    ///
    /// Each iteration: check the quit key, clear to the configured color,
    /// poll and handle platform events (resize updates the viewport), then
    /// present. Termination is checked once per iteration at the top, so no
    /// frame is rendered after the close flag is observed.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ContextBound)?;

        let (fb_width, fb_height) = self.window.get_framebuffer_size();
        self.configure_viewport(fb_width, fb_height);

        self.phase = SessionPhase::Running;
        log::info!("entering render loop");

        while !self.window.should_close() {
            self.process_input();
            self.clear_frame();
            self.window.poll_events();
            self.handle_events();
            self.window.swap_buffers();
        }

        self.phase = SessionPhase::Closing;
        log::info!("close requested, render loop exited");
        Ok(())
    }

    /// Release the window, context, and GLFW library state.
    ///
    /// Shutdown also happens implicitly when the session is dropped on a
    /// failure path; this method only adds the lifecycle log line.
    pub fn shutdown(mut self) {
        self.phase = SessionPhase::Terminated;
        log::info!("window session shut down");
        // Dropping `self.window` releases the context, window, and library
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current viewport dimensions
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The configuration this session was created with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn process_input(&mut self) {
        if let Some(key) = self.config.quit_key {
            if self.window.key_pressed(key) {
                log::debug!("quit key pressed, requesting close");
                self.window.set_should_close(true);
            }
        }
    }

    fn clear_frame(&self) {
        let color = self.config.clear_color;
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn handle_events(&mut self) {
        let events: Vec<_> = self.window.flush_events().collect();
        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    let viewport = Viewport::from_reported(width, height);
                    self.configure_viewport(viewport.width, viewport.height);
                }
                glfw::WindowEvent::Close => {
                    self.window.set_should_close(true);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_viewport_matches_default_config() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.rect(), (0, 0, 800, 600));
    }

    #[test]
    fn test_viewport_tracks_resize_sequence() {
        let reported = [(1024, 768), (0, 0), (640, 480), (1920, 1080)];
        for (w, h) in reported {
            let viewport = Viewport::from_reported(w, h);
            assert_eq!(viewport.rect(), (0, 0, w, h));
        }
    }

    #[test]
    fn test_viewport_clamps_negative_dimensions() {
        let viewport = Viewport::from_reported(-5, -1);
        assert_eq!(viewport.rect(), (0, 0, 0, 0));
    }

    #[test]
    fn test_phase_forward_edges() {
        use SessionPhase::*;
        assert!(Uninitialized.can_advance_to(Created));
        assert!(Created.can_advance_to(ContextBound));
        assert!(ContextBound.can_advance_to(Running));
        assert!(Running.can_advance_to(Closing));
        assert!(Closing.can_advance_to(Terminated));
    }

    #[test]
    fn test_terminated_reachable_from_any_phase() {
        use SessionPhase::*;
        for phase in [Uninitialized, Created, ContextBound, Running, Closing] {
            assert!(phase.can_advance_to(Terminated));
        }
    }

    #[test]
    fn test_no_phase_is_reenterable() {
        use SessionPhase::*;
        assert!(!Terminated.can_advance_to(Terminated));
        assert!(!Running.can_advance_to(Created));
        assert!(!ContextBound.can_advance_to(Created));
        assert!(!Terminated.can_advance_to(Running));
    }

    #[test]
    fn test_invalid_phase_error_display() {
        let err = SessionError::InvalidPhase {
            expected: SessionPhase::ContextBound,
            actual: SessionPhase::Created,
        };
        assert_eq!(
            err.to_string(),
            "invalid session phase: expected ContextBound, found Created"
        );
    }
}
