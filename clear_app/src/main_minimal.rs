//! Minimal window demo
//!
//! The bare lifecycle: window, context, empty render loop clearing to
//! black. No quit-key binding; close the window to exit.

use gl_session::prelude::*;

fn main() {
    gl_session::logging::init();

    let config = SessionConfig::new("LearnOpenGL").with_quit_key(None);

    let result = WindowSession::initialize(config).and_then(|mut session| {
        session.bind_context()?;
        session.run()?;
        session.shutdown();
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("minimal window demo failed: {}", e);
        std::process::exit(1);
    }
}
