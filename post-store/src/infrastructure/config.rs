use std::path::PathBuf;

use crate::data::storage::DEFAULT_SLOT;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub posts_file: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let posts_file = std::env::var("POSTS_FILE").unwrap_or_else(|_| DEFAULT_SLOT.into());
        if posts_file.trim().is_empty() {
            anyhow::bail!("POSTS_FILE must not be empty");
        }

        Ok(Self {
            posts_file: posts_file.into(),
        })
    }
}
