//! # GL Session
//!
//! Minimal window/context/render-loop lifecycle for OpenGL, built on GLFW.
//!
//! The crate does one thing: open a window with an OpenGL 3.3 core-profile
//! context and run a render loop that clears the screen to a solid color
//! until the user closes the window or presses the configured quit key.
//! Everything that varies between uses — title, size, clear color, quit
//! key — lives in [`SessionConfig`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_session::prelude::*;
//!
//! fn main() -> Result<(), SessionError> {
//!     let config = SessionConfig::new("Circle Program")
//!         .with_clear_color(ClearColor::TEAL);
//!     let mut session = WindowSession::initialize(config)?;
//!     session.bind_context()?;
//!     session.run()?;
//!     session.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! The lifecycle is strictly linear: `Uninitialized → Created →
//! ContextBound → Running → Closing → Terminated`, with `Terminated`
//! reachable from any phase on failure. Both failure kinds — window/context
//! creation and GL loader resolution — are unrecoverable at this scope;
//! callers print a diagnostic and exit non-zero.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod logging;
pub mod session;
pub mod window;

pub use config::{ClearColor, SessionConfig};
pub use session::{SessionError, SessionPhase, Viewport, WindowSession};
pub use window::{Window, WindowError, WindowResult};

/// Common imports for session users
pub mod prelude {
    pub use crate::{
        ClearColor, SessionConfig, SessionError, SessionPhase, Viewport, WindowSession,
    };
}
