use std::collections::HashSet;

use tracing::{info, warn};

use crate::data::storage::PostStorage;
use crate::domain::error::StoreError;
use crate::domain::post::{self, Post};
use crate::domain::seed;

/// Holds the ordered post sequence for one session and keeps it in sync
/// with the persistence slot. Every mutation rewrites the whole slot; if
/// the write fails the in-memory change is rolled back, so memory and slot
/// never drift apart.
pub struct PostStore<S: PostStorage> {
    storage: S,
    posts: Vec<Post>,
}

impl<S: PostStorage> PostStore<S> {
    /// Loads the persisted sequence, falling back to the seed set when the
    /// slot has never been written. A corrupt slot is an error, not a
    /// reseed: silently replacing user data would lose it.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let posts = match storage.load()? {
            Some(loaded) => repair(loaded),
            None => {
                info!("no persisted posts, starting from the seed set");
                seed::seed_posts()
            }
        };
        Ok(Self { storage, posts })
    }

    /// The full sequence, newest created post first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Order-preserving filter over title and content, case-insensitive.
    /// An empty query matches everything. Pure read.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let q = query.to_lowercase();
        self.posts.iter().filter(|p| p.matches(&q)).collect()
    }

    /// Validates, builds and prepends a new post, then persists. Fails
    /// without mutating anything when a field is empty after trimming or
    /// when the slot rejects the write.
    pub fn create(&mut self, title: &str, author: &str, content: &str) -> Result<&Post, StoreError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let post = Post::new(
            title.to_string(),
            author_or_default(author),
            content.to_string(),
        );
        self.posts.insert(0, post);
        if let Err(e) = self.storage.save(&self.posts) {
            self.posts.remove(0);
            return Err(e);
        }

        info!(post_id = %self.posts[0].id, "post created");
        Ok(&self.posts[0])
    }

    /// Overwrites title, author and content of an existing post and
    /// recomputes its excerpt. `id` and `date` are never touched.
    pub fn update(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<&Post, StoreError> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::PostNotFound(id.to_string()))?;

        let previous = self.posts[idx].clone();
        let post = &mut self.posts[idx];
        post.title = title.trim().to_string();
        post.author = author_or_default(author);
        post.set_content(content.trim().to_string());

        if let Err(e) = self.storage.save(&self.posts) {
            self.posts[idx] = previous;
            return Err(e);
        }

        info!(post_id = %id, "post updated");
        Ok(&self.posts[idx])
    }

    /// Removes the matching post. An absent id is a no-op, not an error;
    /// the slot is rewritten either way.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let removed = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .map(|idx| (idx, self.posts.remove(idx)));

        if let Err(e) = self.storage.save(&self.posts) {
            if let Some((idx, post)) = removed {
                self.posts.insert(idx, post);
            }
            return Err(e);
        }

        if removed.is_some() {
            info!(post_id = %id, "post deleted");
        }
        Ok(())
    }
}

fn author_or_default(author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        post::DEFAULT_AUTHOR.to_string()
    } else {
        author.to_string()
    }
}

/// Shape-validates records loaded from the slot: excerpts are recomputed
/// from content and later duplicates of an id are dropped.
fn repair(loaded: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(loaded.len());
    for mut post in loaded {
        if !seen.insert(post.id.clone()) {
            warn!(post_id = %post.id, "dropping post with duplicate id");
            continue;
        }
        post.excerpt = post::excerpt_of(&post.content);
        posts.push(post);
    }
    posts
}
