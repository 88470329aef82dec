use std::path::PathBuf;

use futures::{future::BoxFuture, FutureExt};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

use super::resume_download::{Notifier, SaveTarget, TransientPayload};
use crate::domain::DownloadError;

/// Native "save as" dialog followed by a write to the chosen path
pub struct DialogSaveTarget;

impl SaveTarget for DialogSaveTarget {
    fn save<'a>(
        &'a self,
        file_name: &'a str,
        payload: &'a TransientPayload,
    ) -> BoxFuture<'a, Result<Option<PathBuf>, DownloadError>> {
        async move {
            let Some(handle) = AsyncFileDialog::new()
                .set_file_name(file_name)
                .add_filter("PDF document", &["pdf"])
                .save_file()
                .await
            else {
                return Ok(None);
            };

            let path = handle.path().to_path_buf();
            tokio::fs::write(&path, payload.as_bytes())
                .await
                .map_err(|e| DownloadError::SaveFailed(e.to_string()))?;

            Ok(Some(path))
        }
        .boxed()
    }
}

/// Modal message box, dismissed with OK
pub struct DialogNotifier {
    title: String,
}

impl DialogNotifier {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Notifier for DialogNotifier {
    fn notify<'a>(&'a self, message: &'a str) -> BoxFuture<'a, ()> {
        async move {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(&self.title)
                .set_description(message)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        }
        .boxed()
    }
}
