//! Paginated post list shared with the UI layer. Writes never touch the
//! held list; overlapping fetches are not cancelled, the last response wins.

use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::BlogClientError;
use crate::model::{ImageFile, PageSnapshot, Post, PostImage, PostsResponse, RawPost};
use crate::navigation::{Navigator, ROOT_ROUTE};
use crate::observer::{Listener, Observers};
use crate::transport::{MultipartForm, RequestBody, Transport};

#[derive(Clone)]
pub struct PostListStore {
    posts_url: String,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    posts: Arc<RwLock<Vec<Post>>>,
    publish: Arc<Mutex<()>>,
    updated: Arc<Observers<PageSnapshot>>,
}

impl PostListStore {
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            posts_url: config.posts_url(),
            transport,
            navigator,
            posts: Arc::new(RwLock::new(Vec::new())),
            publish: Arc::new(Mutex::new(())),
            updated: Arc::new(Observers::new()),
        }
    }

    /// Copy of the currently held page.
    pub async fn posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub fn get_post_updated_listener(&self) -> Listener<PageSnapshot> {
        self.updated.listener()
    }

    /// Fire-and-forget page fetch. The result is only observable through
    /// [`get_post_updated_listener`](Self::get_post_updated_listener); a
    /// failure is logged and leaves the held page as it was.
    ///
    /// Must be called from within a tokio runtime.
    pub fn get_posts(&self, page_size: u32, page: u32) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            if let Err(err) = store.fetch_posts(page_size, page).await {
                warn!(error = %err, page_size, page, "failed to fetch posts");
            }
        })
    }

    /// Fetches one page, replaces the held list and publishes the snapshot.
    /// `page` is 1-based.
    pub async fn fetch_posts(
        &self,
        page_size: u32,
        page: u32,
    ) -> Result<PageSnapshot, BlogClientError> {
        if page_size == 0 || page == 0 {
            return Err(BlogClientError::InvalidRequest(
                "page size and page number must be at least 1".to_string(),
            ));
        }

        let url = format!("{}?pagesize={}&page={}", self.posts_url, page_size, page);
        let body = self.transport.get(&url).await?;
        let resp: PostsResponse = serde_json::from_value(body)?;
        let snapshot = PageSnapshot::from(resp);

        // keeps the held list equal to the last published snapshot
        let _publishing = self.publish.lock().await;
        {
            let mut held = self.posts.write().await;
            *held = snapshot.posts.clone();
        }
        info!(
            posts = snapshot.posts.len(),
            total = snapshot.post_count,
            page,
            "post page replaced"
        );
        self.updated.notify(&snapshot);

        Ok(snapshot)
    }

    /// Single post as the backend returns it; `_id` is not remapped.
    pub async fn get_post(&self, id: &str) -> Result<RawPost, BlogClientError> {
        let body = self.transport.get(&self.post_url(id)).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn add_post(
        &self,
        title: &str,
        content: &str,
        image: ImageFile,
    ) -> Result<Value, BlogClientError> {
        ensure_title(title)?;

        let form = MultipartForm::new()
            .text("title", title)
            .text("content", content)
            .file("image", title, image);
        let resp = self
            .transport
            .post(&self.posts_url, RequestBody::Multipart(form))
            .await?;

        info!(%title, "post created");
        self.navigate_home();
        Ok(resp)
    }

    /// A [`PostImage::File`] is uploaded as multipart. A [`PostImage::Path`]
    /// keeps the existing image and is sent as JSON with `creator` nulled so
    /// the backend assigns it.
    pub async fn update_post(
        &self,
        id: &str,
        title: &str,
        content: &str,
        image: impl Into<PostImage>,
    ) -> Result<Value, BlogClientError> {
        ensure_title(title)?;

        let body = match image.into() {
            PostImage::File(file) => RequestBody::Multipart(
                MultipartForm::new()
                    .text("id", id)
                    .text("title", title)
                    .text("content", content)
                    .file("image", title, file),
            ),
            PostImage::Path(image_path) => RequestBody::Json(json!({
                "id": id,
                "title": title,
                "content": content,
                "imagePath": image_path,
                "creator": null,
            })),
        };
        let resp = self.transport.put(&self.post_url(id), body).await?;

        info!(post_id = %id, "post updated");
        self.navigate_home();
        Ok(resp)
    }

    /// Deletes on the backend only. Refreshing the page is up to the caller.
    pub async fn delete_post(&self, id: &str) -> Result<Value, BlogClientError> {
        let resp = self.transport.delete(&self.post_url(id)).await?;
        info!(post_id = %id, "post deleted");
        Ok(resp)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/{}", self.posts_url, id)
    }

    fn navigate_home(&self) {
        info!(route = ROOT_ROUTE, "navigating");
        self.navigator.navigate_to(ROOT_ROUTE);
    }
}

fn ensure_title(title: &str) -> Result<(), BlogClientError> {
    if title.is_empty() {
        return Err(BlogClientError::InvalidRequest(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}
