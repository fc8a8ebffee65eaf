//! Static site build settings shared with the asset pipeline.

use serde::{Deserialize, Serialize};

/// How the site is built.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Pre-render every page at build time.
    #[default]
    Static,
    /// Render on request.
    Server,
}

fn default_allowed_hosts() -> Vec<String> {
    vec!["localhost".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub output: OutputMode,

    /// Hosts the dev server answers to.
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,

    /// Remote hosts images may be optimized from (e.g., the CMS upload host).
    #[serde(default)]
    pub image_domains: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            allowed_hosts: default_allowed_hosts(),
            image_domains: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Whether images from `host` may be processed by the asset pipeline.
    pub fn allows_image_domain(&self, host: &str) -> bool {
        self.image_domains.iter().any(|domain| domain.eq_ignore_ascii_case(host))
    }
}
