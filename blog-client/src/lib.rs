pub mod config;
mod error;
mod http_client;
pub mod model;
pub mod navigation;
pub mod observer;
mod store;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::BlogClientError;
pub use http_client::HttpTransport;
pub use model::{ImageFile, PageSnapshot, Post, PostImage, RawPost};
pub use navigation::{Navigator, ROOT_ROUTE};
pub use observer::{Listener, Subscription, Updates};
pub use store::PostListStore;
pub use transport::{FormPart, MultipartForm, RequestBody, Transport};
