use thiserror::Error;

use crate::api::ApiError;

/// Shown when the resume could not be retrieved
pub const RESOURCE_UNAVAILABLE_NOTICE: &str = "Resume will be available soon!";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownloadError {
    #[error("Resume unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Failed to save resume: {0}")]
    SaveFailed(String),
}

impl DownloadError {
    /// Short message for the user, without transport details
    pub fn notice(&self) -> String {
        match self {
            DownloadError::ResourceUnavailable(_) => RESOURCE_UNAVAILABLE_NOTICE.to_string(),
            DownloadError::SaveFailed(reason) => format!("Couldn't save the resume: {}", reason),
        }
    }
}

impl From<ApiError> for DownloadError {
    fn from(e: ApiError) -> Self {
        DownloadError::ResourceUnavailable(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid content file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content is missing {0}")]
    Missing(&'static str),
}

/// Errors that stop the app from starting
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] ApiError),

    #[error("Window error: {0}")]
    Window(#[from] iced::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_notice_hides_details() {
        let err = DownloadError::ResourceUnavailable("404 Not Found".to_string());
        assert_eq!(err.notice(), "Resume will be available soon!");
    }

    #[test]
    fn test_save_notice_includes_reason() {
        let err = DownloadError::SaveFailed("disk full".to_string());
        assert_eq!(err.notice(), "Couldn't save the resume: disk full");
    }
}
