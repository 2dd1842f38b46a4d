pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::post_store::PostStore;
pub use data::storage::{JsonFileStorage, MemoryStorage, PostStorage};
pub use domain::error::StoreError;
pub use domain::post::Post;
