pub mod content;
pub mod error;
pub mod model;

pub use content::Content;
pub use error::{AppError, ContentError, DownloadError};
pub use model::{DownloadPhase, SaveOutcome};
