use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com";
pub const DEFAULT_NAMESPACE: &str = "brammys";
pub const DEFAULT_REPOSITORY: &str = "necesse-server";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to look for tags and which descriptor files to rewrite.
///
/// The defaults are the only values used when no CLI override is given.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry_url: String,
    pub namespace: String,
    pub repository: String,
    pub page_size: u32,
    pub timeout: Duration,
    pub chart_path: PathBuf,
    pub values_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            chart_path: PathBuf::from("Chart.yaml"),
            values_path: PathBuf::from("values.yaml"),
        }
    }
}

impl Config {
    pub fn tags_url(&self) -> String {
        format!(
            "{}/v2/repositories/{}/{}/tags",
            self.registry_url.trim_end_matches('/'),
            self.namespace,
            self.repository
        )
    }
}
