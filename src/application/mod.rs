pub mod dialogs;
pub mod resume_download;

pub use dialogs::{DialogNotifier, DialogSaveTarget};
pub use resume_download::{DownloadResult, ResumeDownloader};
