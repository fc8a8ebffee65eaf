use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Image, Timestamps, Validate, is_site_path};
use crate::envelope::Relation;
use crate::errors::CoreError;

/// Banner at the top of the homepage with two call-to-action buttons.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_image: Relation<Image>,
    pub primary_cta_text: String,
    pub primary_cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
}

impl HeroSection {
    pub fn image(&self) -> Option<&Image> {
        self.hero_image.get().map(|entry| &entry.attributes)
    }
}

impl Validate for HeroSection {
    const ENTITY_TYPE: &'static str = "hero section";

    fn validate(&self) -> Result<(), CoreError> {
        for (field, link) in [
            ("primaryCtaLink", &self.primary_cta_link),
            ("secondaryCtaLink", &self.secondary_cta_link),
        ] {
            if !is_site_path(link) {
                return Err(CoreError::validation(format!(
                    "hero section {field} '{link}' is not a site-relative path"
                )));
            }
        }
        if let Some(image) = self.image() {
            image.validate()?;
        }
        Ok(())
    }
}

/// The homepage single type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub hero_section: HeroSection,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Validate for Homepage {
    const ENTITY_TYPE: &'static str = "homepage";

    fn validate(&self) -> Result<(), CoreError> {
        self.hero_section.validate()
    }
}
