use serde::Deserialize;

pub const DEFAULT_API_ROOT: &str = "http://localhost:3000/api";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_root: String,
}

impl ClientConfig {
    pub fn new(api_root: &str) -> anyhow::Result<Self> {
        let api_root = api_root.trim().trim_end_matches('/').to_string();
        if !(api_root.starts_with("http://") || api_root.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "invalid API root '{}': expected an http:// or https:// URL",
                api_root
            ));
        }
        Ok(Self { api_root })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_root = std::env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_API_ROOT.into());
        Self::new(&api_root)
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.api_root)
    }
}
