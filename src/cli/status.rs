//! Status command - reports what the runtime would wire at startup

use std::fmt;

use crate::config::AppConfig;
use crate::domain::auth_client::redirect_uri;
use crate::domain::PlatformCapabilities;
use crate::infrastructure::DetectedPlatform;

/// Snapshot of startup decisions, without opening the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub platform: String,
    pub native: bool,
    pub redirect_uri: Option<String>,
    pub cache: String,
    pub marker: String,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform:     {}", self.platform)?;
        writeln!(f, "native:       {}", self.native)?;
        writeln!(
            f,
            "redirect_uri: {}",
            self.redirect_uri.as_deref().unwrap_or("<unconfigured>")
        )?;
        writeln!(f, "cache:        {}", self.cache)?;
        write!(f, "marker:       {}", self.marker)
    }
}

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("{}", report(config)?);
    Ok(())
}

pub fn report(config: &AppConfig) -> anyhow::Result<StatusReport> {
    let platform = DetectedPlatform::from_settings(&config.platform)?;
    let native = platform.is_native_platform();

    let cache = if native {
        format!("scoped ({:?})", config.cache.backend)
    } else {
        "client default".to_string()
    };

    Ok(StatusReport {
        platform: platform.platform().to_string(),
        native,
        redirect_uri: redirect_uri(&config.auth, &platform).ok(),
        cache,
        marker: config.cache.marker.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_web() {
        let mut config = AppConfig::default();
        config.platform.kind = Some("web".to_string());

        let report = report(&config).unwrap();
        assert!(!report.native);
        assert_eq!(report.cache, "client default");
        assert_eq!(report.redirect_uri.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_report_native_without_package_id() {
        let mut config = AppConfig::default();
        config.platform.kind = Some("ios".to_string());

        let report = report(&config).unwrap();
        assert!(report.native);
        assert_eq!(report.cache, "scoped (Sqlite)");
        assert!(report.redirect_uri.is_none());
        assert!(report.to_string().contains("<unconfigured>"));
    }
}
