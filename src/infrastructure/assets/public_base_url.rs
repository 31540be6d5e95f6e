use super::traits::AssetUrlProvider;

/// Base URL taken from configuration at startup.
#[derive(Debug, Clone)]
pub struct PublicBaseUrl {
    base_url: String,
}

impl PublicBaseUrl {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }
}

impl AssetUrlProvider for PublicBaseUrl {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
