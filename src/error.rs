use std::{error::Error as StdError, fmt};

use glfw::InitError;

#[derive(Debug)]
pub enum HostError {
    Initialization(InitError), // glfw runtime could not be brought up
    WindowCreation {
        // glfw returned no handle for these parameters
        title: String,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(e) => write!(f, "glfw runtime init failed: {:?}", e),
            Self::WindowCreation {
                title,
                width,
                height,
            } => {
                write!(f, "unable to create {width}x{height} window \"{title}\"")
            }
        }
    }
}

impl StdError for HostError {}

/// `?` conversions
impl From<InitError> for HostError {
    fn from(e: InitError) -> Self {
        Self::Initialization(e)
    }
}

pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_converts_for_question_mark() {
        let err: HostError = InitError::Internal.into();
        assert!(matches!(err, HostError::Initialization(_)));
    }

    #[test]
    fn window_creation_display_names_the_parameters() {
        let err = HostError::WindowCreation {
            title: "t".into(),
            width: 640,
            height: 480,
        };
        let text = err.to_string();
        assert!(text.contains("640x480"));
        assert!(text.contains("\"t\""));
    }

    #[test]
    fn error_kinds_are_distinguishable() {
        let init: HostError = InitError::AlreadyInitialized.into();
        let window = HostError::WindowCreation {
            title: "t".into(),
            width: 1,
            height: 1,
        };
        assert!(init.to_string().contains("init"));
        assert!(!window.to_string().contains("init"));
    }
}
