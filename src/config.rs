use std::path::PathBuf;

pub const WFM_BASE_URL: &str = "https://api.warframe.market/v2";
pub const USER_AGENT: &str = "Warframe-Inventory-Fetcher/Rust-v1";

/// Fixed request configuration, built once at startup and handed to the
/// fetcher. Tests swap in a local base URL and output path.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub platform: String,
    pub language: String,
    pub user_agent: String,
    pub output_path: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: WFM_BASE_URL.to_string(),
            platform: "pc".to_string(),
            language: "ru".to_string(),
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from("data").join("items.json"),
        }
    }
}

impl FetchConfig {
    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_warframe_market() {
        let config = FetchConfig::default();
        assert_eq!(config.items_url(), "https://api.warframe.market/v2/items");
        assert_eq!(config.output_path, PathBuf::from("data/items.json"));
    }
}
