//! Client configuration

pub const API_URL_VAR: &str = "TM_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the task API, without trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `TM_API_URL`, falling back to the local default when unset or blank
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/api/tasks`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(
            ClientConfig::default().endpoint("/api/tasks"),
            "http://localhost:5000/api/tasks"
        );
    }

    #[test]
    fn unset_or_blank_url_falls_back_to_default() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_lookup(|_| Some("   ".to_string())),
            ClientConfig::default()
        );
    }

    #[test]
    fn reads_api_url_override() {
        let config = ClientConfig::from_lookup(|name| {
            (name == API_URL_VAR).then(|| "http://10.0.0.7:8080/".to_string())
        });
        assert_eq!(config.base_url, "http://10.0.0.7:8080");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://tasks.example.com/ ");
        assert_eq!(config.base_url, "https://tasks.example.com");
        assert_eq!(
            config.endpoint("/api/tasks/1"),
            "https://tasks.example.com/api/tasks/1"
        );
    }
}
