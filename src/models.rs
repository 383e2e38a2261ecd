//! Frontend Models
//!
//! Client-side shadows of the entities served by the S-Brain API.

use serde::{Deserialize, Serialize};

/// Saved bookmark/note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: u32,
    pub title: String,
    /// Free-text body
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Shareable link, when one has been generated
    #[serde(default)]
    pub link: Option<String>,
    /// Tag display name
    pub tag: String,
    #[serde(default)]
    pub user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub unique_id: Option<String>,
}

impl Content {
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Non-blank URL to open, if any
    pub fn open_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// One page of the content listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    #[serde(default)]
    pub contents: Vec<Content>,
    #[serde(default)]
    pub total_links: u32,
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default = "one")]
    pub current_page: u32,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub has_next_page: bool,
}

fn one() -> u32 {
    1
}

/// Listing query; also the cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentQuery {
    pub page: u32,
    pub limit: u32,
    pub tag_id: Option<u32>,
}

impl ContentQuery {
    pub fn to_query_string(&self) -> String {
        match self.tag_id {
            Some(tag_id) => format!("page={}&limit={}&tagId={}", self.page, self.limit, tag_id),
            None => format!("page={}&limit={}", self.page, self.limit),
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContent {
    /// Client-generated idempotency key
    pub unique_id: String,
    pub title: String,
    pub content: String,
    pub url: String,
    pub tag_id: u32,
}

/// Body of an update request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContent {
    pub title: String,
    pub content: String,
    pub url: String,
    pub tag_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// `{ "data": ..., "message": ... }` wrapper used by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Listing route and the tag it filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Twitter,
    Youtube,
    Docs,
    Links,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Twitter,
        Category::Youtube,
        Category::Docs,
        Category::Links,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Twitter => "twitter",
            Category::Youtube => "youtube",
            Category::Docs => "docs",
            Category::Links => "links",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug().eq_ignore_ascii_case(slug))
    }

    /// Nav label
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Collection",
            Category::Twitter => "Twitter",
            Category::Youtube => "Youtube",
            Category::Docs => "Docs",
            Category::Links => "Links",
        }
    }

    pub fn tag_id(self) -> Option<u32> {
        match self {
            Category::All => None,
            Category::Twitter => Some(1),
            Category::Youtube => Some(2),
            Category::Docs => Some(3),
            Category::Links => Some(4),
        }
    }

    pub fn path(self) -> String {
        format!("/dashboard/{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_page_from_wire() {
        let json = r#"{
            "data": {
                "contents": [
                    {"id": 4, "title": "Hooks", "content": "Guide", "url": "https://react.dev", "link": null, "tag": "Docs", "userId": 9}
                ],
                "totalLinks": 13,
                "totalPages": 2,
                "currentPage": 1,
                "hasPreviousPage": false,
                "hasNextPage": true
            }
        }"#;
        let envelope: Envelope<ContentPage> = serde_json::from_str(json).expect("parse");
        let page = envelope.data;
        assert_eq!(page.contents.len(), 1);
        assert_eq!(page.contents[0].tag, "Docs");
        assert!(!page.contents[0].has_link());
        assert_eq!(page.total_links, 13);
        assert!(page.has_next_page);
    }

    #[test]
    fn test_create_payload_uses_camel_case() {
        let payload = CreateContent {
            unique_id: "abc".into(),
            title: "t".into(),
            content: "c".into(),
            url: "u".into(),
            tag_id: 3,
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["uniqueId"], "abc");
        assert_eq!(value["tagId"], 3);
    }

    #[test]
    fn test_query_string_includes_tag_only_when_filtered() {
        let all = ContentQuery { page: 2, limit: 12, tag_id: None };
        assert_eq!(all.to_query_string(), "page=2&limit=12");
        let docs = ContentQuery { page: 1, limit: 12, tag_id: Category::Docs.tag_id() };
        assert_eq!(docs.to_query_string(), "page=1&limit=12&tagId=3");
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(Category::from_slug("DOCS"), Some(Category::Docs));
        assert_eq!(Category::from_slug("unknown"), None);
        assert_eq!(Category::Twitter.path(), "/dashboard/twitter");
    }

    #[test]
    fn test_open_url_ignores_blank() {
        let mut content = Content {
            id: 1,
            title: "t".into(),
            content: "c".into(),
            url: Some("  ".into()),
            link: None,
            tag: "Docs".into(),
            user_id: None,
            unique_id: None,
        };
        assert_eq!(content.open_url(), None);
        content.url = Some("https://example.com".into());
        assert_eq!(content.open_url(), Some("https://example.com"));
    }
}
