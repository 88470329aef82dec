use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use bytes::Bytes;
use futures::future::BoxFuture;

use crate::{
    api::AssetClient,
    domain::{DownloadError, DownloadPhase, SaveOutcome},
};

pub type DownloadResult = Result<SaveOutcome, DownloadError>;

/// Somewhere a downloaded document can be handed to the user.
///
/// Resolves to `Ok(None)` when the user backs out of saving.
pub trait SaveTarget: Send + Sync {
    fn save<'a>(
        &'a self,
        file_name: &'a str,
        payload: &'a TransientPayload,
    ) -> BoxFuture<'a, Result<Option<PathBuf>, DownloadError>>;
}

/// Displays a short message to the user
pub trait Notifier: Send + Sync {
    fn notify<'a>(&'a self, message: &'a str) -> BoxFuture<'a, ()>;
}

/// In-memory document body, alive only while it is being saved
pub struct TransientPayload {
    data: Arc<Bytes>,
}

impl TransientPayload {
    fn new(bytes: Bytes) -> Self {
        Self {
            data: Arc::new(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Non-owning handle; dead once the payload is released
    pub fn watch(&self) -> Weak<Bytes> {
        Arc::downgrade(&self.data)
    }

    fn release(self) {
        tracing::debug!(bytes = self.len(), "releasing downloaded payload");
    }
}

/// Holds the in-progress flag; clears it when dropped
pub struct InProgressGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InProgressGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Fetches the resume and hands it to a [`SaveTarget`], one attempt at a time
#[derive(Clone)]
pub struct ResumeDownloader {
    client: AssetClient,
    save_target: Arc<dyn SaveTarget>,
    notifier: Arc<dyn Notifier>,
    in_progress: Arc<AtomicBool>,
}

impl ResumeDownloader {
    pub fn new(
        client: AssetClient,
        save_target: Arc<dyn SaveTarget>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            save_target,
            notifier,
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> DownloadPhase {
        if self.is_in_progress() {
            DownloadPhase::InProgress
        } else {
            DownloadPhase::Idle
        }
    }

    /// Mark an attempt as started. `None` if one is already running.
    ///
    /// The flag is visible to readers as soon as this returns, before
    /// any request goes out.
    pub fn begin(&self) -> Option<InProgressGuard> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InProgressGuard {
                flag: Arc::clone(&self.in_progress),
            })
    }

    /// Start and finish a download. `None` means an attempt was already
    /// outstanding and nothing was done.
    pub async fn trigger_download(&self) -> Option<DownloadResult> {
        let guard = self.begin()?;
        Some(self.run(guard).await)
    }

    /// Finish an attempt started with [`begin`](Self::begin).
    ///
    /// Failures are logged and shown through the notifier; the guard is
    /// dropped last, after the user has been told.
    pub async fn run(&self, guard: InProgressGuard) -> DownloadResult {
        debug_assert!(Arc::ptr_eq(&guard.flag, &self.in_progress));

        let result = self.fetch_and_save().await;

        match &result {
            Ok(SaveOutcome::Saved(path)) => {
                tracing::info!(path = %path.display(), "resume saved");
            }
            Ok(SaveOutcome::Cancelled) => {
                tracing::info!("resume save cancelled");
            }
            Err(error) => {
                tracing::error!(%error, "resume download failed");
                self.notifier.notify(&error.notice()).await;
            }
        }

        drop(guard);
        result
    }

    async fn fetch_and_save(&self) -> DownloadResult {
        let config = self.client.config();
        let body = self.client.fetch(&config.resume_path).await?;

        let payload = TransientPayload::new(body);
        let saved = self.save_target.save(&config.file_name, &payload).await;
        payload.release();

        Ok(match saved? {
            Some(path) => SaveOutcome::Saved(path),
            None => SaveOutcome::Cancelled,
        })
    }
}
