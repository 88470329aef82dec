mod client;
mod models;

pub use client::{ApiError, AssetClient};
pub use models::AssetConfig;
