//! `[base]` section configuration.
//!
//! Holds the public site origin used for absolute sitemap and robots URLs.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[base]` section in verde.toml - public site identity.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://www.verdelandscaping.com"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Absolute origin (scheme + host, no trailing slash).
    /// Overridden by `--base-url` or the `SITE_URL` environment variable.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_url() {
        let config = r#"
            [base]
            url = "https://www.example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.url, "https://www.example.com");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();
        assert_eq!(config.base.url, "https://www.verdelandscaping.com");

        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.base.url, "https://www.verdelandscaping.com");
    }

    #[test]
    fn test_unknown_field_rejection_in_base() {
        let config = r#"
            [base]
            url = "https://www.example.com"
            title = "not a field here"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
