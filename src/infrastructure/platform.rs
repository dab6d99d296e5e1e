//! Platform detection

use crate::config::PlatformSettings;
use crate::domain::platform::{Platform, PlatformCapabilities};
use crate::domain::DomainError;

/// Platform fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform(pub Platform);

impl PlatformCapabilities for StaticPlatform {
    fn platform(&self) -> Platform {
        self.0
    }
}

/// Platform resolved once from configuration or the build target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedPlatform {
    platform: Platform,
}

impl DetectedPlatform {
    /// Uses `platform.kind` when set, otherwise the compile target
    pub fn from_settings(settings: &PlatformSettings) -> Result<Self, DomainError> {
        let platform = match settings.kind.as_deref() {
            Some(kind) => kind.parse()?,
            None => Self::target_platform(),
        };

        Ok(Self { platform })
    }

    fn target_platform() -> Platform {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Web
        }
    }
}

impl PlatformCapabilities for DetectedPlatform {
    fn platform(&self) -> Platform {
        self.platform
    }
}
