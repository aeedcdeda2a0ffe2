//! Session configuration
//!
//! Plain configuration structs with defaults and builder-style setters. The
//! configuration covers everything that varied between the programs this
//! crate replaces: window title, clear color, and the quit-key binding.
//! Context version and profile are fixed (see
//! [`crate::window::GL_CONTEXT_VERSION`]).

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// A normalized RGBA clear color, immutable for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    /// Red component, 0.0–1.0
    pub r: f32,
    /// Green component, 0.0–1.0
    pub g: f32,
    /// Blue component, 0.0–1.0
    pub b: f32,
    /// Alpha component, 0.0–1.0
    pub a: f32,
}

impl ClearColor {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// The muted teal used by the original clear-screen demo
    pub const TEAL: Self = Self::new(0.2, 0.3, 0.3, 1.0);

    /// Create a clear color from normalized components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Window session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Color the framebuffer is cleared to each frame
    pub clear_color: ClearColor,

    /// Key that requests session close when held down, if any
    pub quit_key: Option<glfw::Key>,
}

impl SessionConfig {
    /// Create a configuration with the given title and defaults elsewhere
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder pattern: Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: Set the clear color
    pub fn with_clear_color(mut self, color: ClearColor) -> Self {
        self.clear_color = color;
        self
    }

    /// Builder pattern: Set or unset the quit-key binding
    pub fn with_quit_key(mut self, key: Option<glfw::Key>) -> Self {
        self.quit_key = key;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Window".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            clear_color: ClearColor::default(),
            quit_key: Some(glfw::Key::Escape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_800_by_600() {
        let config = SessionConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn test_default_quit_key_is_escape() {
        let config = SessionConfig::default();
        assert_eq!(config.quit_key, Some(glfw::Key::Escape));
    }

    #[test]
    fn test_builder_overrides() {
        let config = SessionConfig::new("Circle Program")
            .with_size(1024, 768)
            .with_clear_color(ClearColor::TEAL)
            .with_quit_key(None);
        assert_eq!(config.title, "Circle Program");
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.clear_color, ClearColor::TEAL);
        assert_eq!(config.quit_key, None);
    }

    #[test]
    fn test_teal_matches_original_palette() {
        let teal = ClearColor::TEAL;
        assert_eq!((teal.r, teal.g, teal.b, teal.a), (0.2, 0.3, 0.3, 1.0));
    }
}
