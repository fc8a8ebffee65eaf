use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Timestamps, Validate};
use crate::errors::CoreError;

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub customer_name: String,
    pub content: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub is_featured: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Testimonial {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;
}

impl Validate for Testimonial {
    const ENTITY_TYPE: &'static str = "testimonial";

    fn validate(&self) -> Result<(), CoreError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating) {
            return Err(CoreError::validation(format!(
                "testimonial from '{}' has rating {} outside {}..={}",
                self.customer_name,
                self.rating,
                Self::MIN_RATING,
                Self::MAX_RATING
            )));
        }
        if self.content.trim().is_empty() {
            return Err(CoreError::validation(format!(
                "testimonial from '{}' has no content",
                self.customer_name
            )));
        }
        Ok(())
    }
}
