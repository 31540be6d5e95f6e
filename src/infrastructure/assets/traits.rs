use crate::domain::catalogue::entity::non_empty;

pub trait AssetUrlProvider: Send + Sync {
    /// Externally reachable root of the deployment, without a trailing slash.
    fn base_url(&self) -> String;

    /// Absolute URL of a stored relative path, or `None` when no path is set.
    fn absolute_url(&self, path: Option<&str>) -> Option<String> {
        non_empty(path).map(|p| format!("{}{}", self.base_url(), p))
    }
}
