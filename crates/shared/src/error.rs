use thiserror::Error;

/// Failure to fetch or decode a fixture. Every variant carries the resource path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to load {path}: {message}")]
    Network { path: String, message: String },
    #[error("failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Network { path, .. }
            | LoadError::Status { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Why a one-shot position query did not produce a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("position request timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

impl GeoError {
    /// Map a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoError::PermissionDenied,
            2 => GeoError::Unavailable,
            3 => GeoError::Timeout,
            _ => GeoError::Unavailable,
        }
    }
}

/// A browser API the shell cannot run without was missing. Propagated to the
/// outermost error boundary instead of being rendered in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
}
