pub mod post_store;
