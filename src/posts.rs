//! Blog post loading
//!
//! Posts live in a JSON file next to the deployment. Loading is
//! failure-tolerant: a missing or malformed file yields an empty list, so
//! the rest of the page still renders.

use std::path::Path;

use tracing::warn;

use crate::models::Post;

/// Load blog posts from a JSON file.
pub fn load_posts(path: impl AsRef<Path>) -> Vec<Post> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            warn!("Failed to read posts file {}: {}", path.display(), error);
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(posts) => posts,
        Err(error) => {
            warn!("Failed to parse posts file {}: {}", path.display(), error);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_posts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "title": "Scaling matchmaking queues",
                "excerpt": "Lessons from running matchmaking on kubernetes",
                "date": "2025-11-03",
                "tags": ["backend"]
            }}]"#
        )
        .unwrap();

        let posts = load_posts(file.path());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Scaling matchmaking queues");
    }

    #[test]
    fn test_load_posts_missing_file() {
        let posts = load_posts("does/not/exist/posts.json");
        assert!(posts.is_empty());
    }

    #[test]
    fn test_load_posts_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let posts = load_posts(file.path());
        assert!(posts.is_empty());
    }
}
