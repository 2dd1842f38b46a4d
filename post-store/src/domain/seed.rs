use crate::domain::post::Post;

/// Example posts shown the first time the app runs with an empty slot.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::seeded(
            "p1",
            "Designing for Simplicity",
            "A. Writer",
            "2025-09-20",
            "Simplicity is one of the hardest things to design for. It requires clarity of thought...",
        ),
        Post::seeded(
            "p2",
            "Getting started with modern JS",
            "A. Writer",
            "2025-08-11",
            "JavaScript has evolved fast — from callbacks to promises to async/await. This article will...",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_excerpts_derived() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 2);
        assert_ne!(posts[0].id, posts[1].id);
        for post in &posts {
            assert_eq!(post.excerpt, crate::domain::post::excerpt_of(&post.content));
        }
    }
}
