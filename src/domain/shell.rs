//! In-app browser overlay used to show the identity provider's login page

use async_trait::async_trait;

use crate::domain::DomainError;

/// Message one platform reports when closing the overlay, even though the
/// overlay does close
pub const OVERLAY_CLOSE_UNIMPLEMENTED: &str = "not implemented";

/// Browser overlay provided by the native shell
#[async_trait]
pub trait BrowserOverlay: Send + Sync {
    /// Opens `url` in the overlay
    async fn open(&self, url: &str) -> Result<(), DomainError>;

    /// Dismisses the overlay
    async fn close(&self) -> Result<(), DomainError>;
}

fn is_unimplemented_close(error: &DomainError) -> bool {
    match error {
        DomainError::Shell { message } => {
            message.trim().eq_ignore_ascii_case(OVERLAY_CLOSE_UNIMPLEMENTED)
        }
        _ => false,
    }
}

/// Closes the overlay, accepting the known "not implemented" report as success
///
/// Any other failure is returned unchanged.
pub async fn close_overlay(overlay: &dyn BrowserOverlay) -> Result<(), DomainError> {
    match overlay.close().await {
        Ok(()) => Ok(()),
        Err(e) if is_unimplemented_close(&e) => {
            tracing::debug!(error = %e, "Overlay close reported as unimplemented, ignoring");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
