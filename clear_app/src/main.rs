//! Clear-screen demo
//!
//! Opens an 800x600 window titled "Circle Program", clears it to teal every
//! frame, and exits when the window is closed or Escape is pressed.

use gl_session::prelude::*;

fn run() -> Result<(), SessionError> {
    let config = SessionConfig::new("Circle Program")
        .with_clear_color(ClearColor::TEAL)
        .with_quit_key(Some(glfw::Key::Escape));

    let mut session = WindowSession::initialize(config)?;
    session.bind_context()?;
    session.run()?;
    session.shutdown();
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        log::error!("clear-screen demo failed: {}", e);
        std::process::exit(1);
    }
}
