use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::CoreError;

/// Cuisine label a menu item can be filed under.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Cuisine {
    pub name: String,
}

impl Cuisine {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for Cuisine {
    const ENTITY_TYPE: &'static str = "cuisine";

    fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("cuisine name is empty"));
        }
        Ok(())
    }
}
