//! Attribute structs for every content type served by the CMS.
//!
//! Field names follow the API's camelCase JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so live responses and the
//! fallback set are interchangeable and can be checked against one schema.

mod cuisine;
mod homepage;
mod image;
mod menu_item;
mod testimonial;
mod timestamps;

pub use cuisine::Cuisine;
pub use homepage::{HeroSection, Homepage};
pub use image::{Image, ImageFormat, ImageFormatName};
pub use menu_item::MenuItem;
pub use testimonial::Testimonial;
pub use timestamps::Timestamps;

use crate::errors::CoreError;

/// Structural checks an entity must pass before it is handed to a renderer.
pub trait Validate {
    /// Name used in error messages (e.g. `menu item`).
    const ENTITY_TYPE: &'static str;

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first violated rule.
    fn validate(&self) -> Result<(), CoreError>;
}

/// True for `/`-rooted site paths and absolute http(s) URLs.
pub(crate) fn is_resolvable_url(url: &str) -> bool {
    is_site_path(url) || url.starts_with("https://") || url.starts_with("http://")
}

/// True for non-empty site-relative paths (`/menu`, `/placeholders/x.svg`).
pub(crate) fn is_site_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
