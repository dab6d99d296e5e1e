//! Platform capability check

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::domain::DomainError;

/// Execution environment of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Plain browser; no native bridge
    #[default]
    Web,
    Ios,
    Android,
}

impl Platform {
    /// Whether the application runs inside the native shell
    pub fn is_native(&self) -> bool {
        !matches!(self, Self::Web)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Web => write!(f, "web"),
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" | "browser" => Ok(Platform::Web),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(DomainError::configuration(format!(
                "Unknown platform: {}. Valid platforms: web, ios, android",
                s
            ))),
        }
    }
}

/// Capability signal queried once at startup
pub trait PlatformCapabilities: Send + Sync + Debug {
    fn platform(&self) -> Platform;

    /// True inside the native shell, false in a plain browser
    fn is_native_platform(&self) -> bool {
        self.platform().is_native()
    }
}
