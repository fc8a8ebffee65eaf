use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Validate, is_resolvable_url};
use crate::errors::CoreError;

/// Named resize breakpoints generated by the media library, smallest first.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormatName {
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl ImageFormatName {
    pub const ALL: [Self; 4] = [Self::Thumbnail, Self::Small, Self::Medium, Self::Large];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ImageFormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resized variant of an [`Image`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImageFormat {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageFormat {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// An uploaded media file plus its resized variants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    pub width: u32,
    pub height: u32,
    /// The media library sends `null` for uploads it does not resize (SVG, GIF).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formats: BTreeMap<ImageFormatName, ImageFormat>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<ImageFormatName, ImageFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeMap<ImageFormatName, ImageFormat>>::deserialize(deserializer)
        .map(Option::unwrap_or_default)
}

impl Image {
    pub fn format(&self, name: ImageFormatName) -> Option<&ImageFormat> {
        self.formats.get(&name)
    }

    /// The widest variant no wider than `max_width`, if any fits.
    pub fn best_format(&self, max_width: u32) -> Option<&ImageFormat> {
        self.formats
            .values()
            .filter(|format| format.width <= max_width)
            .max_by_key(|format| format.width)
    }

    /// Alt text for rendering; empty when the upload has none.
    pub fn alt(&self) -> &str {
        self.alternative_text.as_deref().unwrap_or_default()
    }
}

impl Validate for Image {
    const ENTITY_TYPE: &'static str = "image";

    fn validate(&self) -> Result<(), CoreError> {
        if !is_resolvable_url(&self.url) {
            return Err(CoreError::validation(format!(
                "image url '{}' is not resolvable",
                self.url
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::validation(format!(
                "image '{}' has zero dimension {}x{}",
                self.url, self.width, self.height
            )));
        }
        for (name, format) in &self.formats {
            if format.width == 0 || format.height == 0 {
                return Err(CoreError::validation(format!(
                    "image '{}' format {name} has zero dimension {}x{}",
                    self.url, format.width, format.height
                )));
            }
            if !is_resolvable_url(&format.url) {
                return Err(CoreError::validation(format!(
                    "image '{}' format {name} url '{}' is not resolvable",
                    self.url, format.url
                )));
            }
        }
        Ok(())
    }
}
