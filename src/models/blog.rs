//! Blog content types.

use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "published")]
    Published,
    #[serde(rename = "archived")]
    Archived,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "Draft"),
            PostStatus::Published => write!(f, "Published"),
            PostStatus::Archived => write!(f, "Archived"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub author: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Payload for admin create/update of a post.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blog_post_without_tags() {
        let json = r#"{
            "id": "b-1",
            "title": "Why Land Banking Works",
            "slug": "why-land-banking-works",
            "excerpt": "The case for buying early",
            "content": "Full article body",
            "imageUrl": "https://cdn.haven.test/b-1.jpg",
            "category": "Investment",
            "status": "published",
            "author": "Haven Editorial",
            "publishedAt": "2026-05-10T09:00:00Z"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.status, PostStatus::Published);
        assert!(post.tags.is_empty());
        assert_eq!(post.author.as_deref(), Some("Haven Editorial"));
    }

    #[test]
    fn test_post_input_serializes_status() {
        let input = BlogPostInput {
            title: "Title".to_string(),
            slug: "title".to_string(),
            excerpt: "Excerpt".to_string(),
            content: "Body".to_string(),
            image_url: String::new(),
            category: "Homes".to_string(),
            tags: vec!["lagos".to_string()],
            status: PostStatus::Draft,
            author: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["status"], "draft");
        assert!(json.get("author").is_none());
    }
}
