/// Window construction parameters.
///
/// Passed by reference to [`Host::new`](crate::host::Host::new) or
/// [`launch`](crate::host::launch); the host copies what it needs.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: format!("glfw-app {}", env!("CARGO_PKG_VERSION")),
            width: 640,
            height: 480,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_the_given_parameters() {
        let config = WindowConfig::new("demo", 800, 600);
        assert_eq!(config.title, "demo");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn default_is_a_usable_window() {
        let config = WindowConfig::default();
        assert!(config.width > 0 && config.height > 0);
        assert!(!config.title.is_empty());
    }
}
