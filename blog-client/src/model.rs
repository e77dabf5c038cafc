use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BlogClientError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {} }}", id.as_deref().unwrap_or("-"), title)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub image_path: Option<String>,
    pub creator: Option<String>,
}

/// Post record exactly as the backend sends it (`_id` instead of `id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        Self {
            id: Some(raw.id),
            title: raw.title,
            content: raw.content,
            image_path: raw.image_path,
            creator: raw.creator,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub posts: Vec<RawPost>,
    pub max_posts: u64,
}

/// One fetched page, published to listeners as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub posts: Vec<Post>,
    pub post_count: u64,
}

impl From<PostsResponse> for PageSnapshot {
    fn from(resp: PostsResponse) -> Self {
        Self {
            posts: resp.posts.into_iter().map(Into::into).collect(),
            post_count: resp.max_posts,
        }
    }
}

/// In-memory image ready to be sent as a multipart file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl ImageFile {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, BlogClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let content_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_for_extension)
            .map(str::to_string);
        Ok(Self {
            bytes,
            content_type,
        })
    }
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Image argument of an update: a fresh upload or the path the post already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostImage {
    File(ImageFile),
    Path(String),
}

impl From<ImageFile> for PostImage {
    fn from(file: ImageFile) -> Self {
        PostImage::File(file)
    }
}

impl From<String> for PostImage {
    fn from(path: String) -> Self {
        PostImage::Path(path)
    }
}

impl From<&str> for PostImage {
    fn from(path: &str) -> Self {
        PostImage::Path(path.to_string())
    }
}
