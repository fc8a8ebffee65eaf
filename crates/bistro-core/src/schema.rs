//! JSON Schema export for the top-level API responses.

use schemars::schema_for;

use crate::envelope::{HomepageResponse, MenuItemsResponse, TestimonialsResponse};
use crate::errors::CoreError;

/// Names accepted by [`schema_for_name`].
pub const SCHEMA_NAMES: [&str; 3] = ["menu-items", "homepage", "testimonials"];

/// Generate the JSON Schema of a response shape by name.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSchema`] if `name` is not one of [`SCHEMA_NAMES`].
pub fn schema_for_name(name: &str) -> Result<serde_json::Value, CoreError> {
    let schema = match name {
        "menu-items" => schema_for!(MenuItemsResponse),
        "homepage" => schema_for!(HomepageResponse),
        "testimonials" => schema_for!(TestimonialsResponse),
        other => return Err(CoreError::UnknownSchema(other.to_string())),
    };
    Ok(schema.to_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_for_name(name).unwrap();
            assert_eq!(schema["type"], "object", "schema {name} should be an object");
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = schema_for_name("reservations").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSchema(name) if name == "reservations"));
    }

    #[test]
    fn menu_item_schema_requires_price() {
        let schema = schema_for_name("menu-items").unwrap().to_string();
        assert!(schema.contains("isMadeToOrder"));
        assert!(schema.contains("price"));
    }
}
