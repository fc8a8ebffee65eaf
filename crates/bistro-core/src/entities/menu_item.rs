use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Cuisine, Image, Timestamps, Validate};
use crate::envelope::Relation;
use crate::errors::CoreError;

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_made_to_order: bool,
    #[serde(default)]
    pub image: Relation<Image>,
    #[serde(default)]
    pub cuisine: Relation<Cuisine>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl MenuItem {
    pub fn image(&self) -> Option<&Image> {
        self.image.get().map(|entry| &entry.attributes)
    }

    pub fn cuisine_name(&self) -> Option<&str> {
        self.cuisine.get().map(|entry| entry.attributes.name.as_str())
    }
}

impl Validate for MenuItem {
    const ENTITY_TYPE: &'static str = "menu item";

    fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("menu item name is empty"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CoreError::validation(format!(
                "menu item '{}' has non-positive price {}",
                self.name, self.price
            )));
        }
        if let Some(image) = self.image() {
            image.validate()?;
        }
        if let Some(cuisine) = self.cuisine.get() {
            cuisine.attributes.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Entry;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn soup(price: f64) -> MenuItem {
        MenuItem {
            name: "Tomato Soup".into(),
            description: "Roasted tomatoes and basil".into(),
            price,
            is_made_to_order: false,
            image: Relation::default(),
            cuisine: Relation::to(Entry::new(9, Cuisine::new("Soups"))),
            timestamps: Timestamps::at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn positive_price_is_valid() {
        assert!(soup(7.5).validate().is_ok());
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        assert!(soup(0.0).validate().is_err());
        assert!(soup(-1.0).validate().is_err());
        assert!(soup(f64::NAN).validate().is_err());
    }

    #[test]
    fn timestamps_flatten_into_attributes() {
        let json = serde_json::to_value(soup(7.5)).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["isMadeToOrder"], false);
        assert_eq!(json["cuisine"]["data"]["attributes"]["name"], "Soups");
        assert!(json["image"]["data"].is_null());
    }

    #[test]
    fn unpopulated_relations_default_to_empty() {
        let json = r#"{
            "name": "Bread",
            "description": "Sourdough",
            "price": 3,
            "isMadeToOrder": false,
            "createdAt": "2024-05-01T12:00:00.000Z",
            "updatedAt": "2024-05-01T12:00:00.000Z",
            "publishedAt": "2024-05-01T12:00:00.000Z"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.image().is_none());
        assert!(item.cuisine_name().is_none());
        assert_eq!(item.price, 3.0);
    }
}
