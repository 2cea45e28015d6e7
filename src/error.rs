//! Error types for the Akira driver

use core::fmt;

use crate::{
    driver::TransportError, engine::RenderError, layout::LayoutError,
    settings::ConfigurationError,
};

/// Error type for plugin operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Rejected lighting settings; the previous configuration stays active
    Configuration(ConfigurationError),
    /// Broken layout data, initialization aborted
    Layout(LayoutError),
    /// Report write failed, not retried
    Transport(TransportError),
    /// The device session already shut down
    SessionEnded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(e) => write!(f, "configuration error: {}", e),
            Error::Layout(e) => write!(f, "layout error: {}", e),
            Error::Transport(e) => write!(f, "transport error: {}", e),
            Error::SessionEnded => write!(f, "device session already shut down"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Configuration(e) => Some(e),
            Error::Layout(e) => Some(e),
            Error::Transport(e) => Some(e),
            Error::SessionEnded => None,
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Error::Layout(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<RenderError> for Error {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Transport(e) => Error::Transport(e),
            RenderError::SessionEnded => Error::SessionEnded,
        }
    }
}
