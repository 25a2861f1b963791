//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    /// Fallback origin when neither the config file nor `SITE_URL` provide one.
    pub fn url() -> String {
        "https://www.verdelandscaping.com".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod sitemap {
        use crate::pages::ChangeFreq;

        pub fn changefreq() -> ChangeFreq {
            ChangeFreq::Weekly
        }

        /// Custom not-found page, never a canonical URL.
        pub fn exclude() -> Vec<String> {
            vec!["404.html".into()]
        }

        /// Post-submission acknowledgement pages, English and Spanish.
        pub fn exclude_patterns() -> Vec<String> {
            vec![r"(^|/)(thanks|thank-you|gracias)(/index)?\.html$".into()]
        }
    }
}
