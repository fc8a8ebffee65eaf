//! Response envelopes shared by every content type.
//!
//! The content API wraps each entity as `{ "id": .., "attributes": {..} }`,
//! each relation as `{ "data": <entry or null> }`, and each response as
//! `{ "data": .., "meta": {..} }`. Collection responses carry pagination
//! metadata; single-type responses carry an empty `meta` object.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Homepage, MenuItem, Testimonial, Validate};
use crate::errors::CoreError;

/// An entity as it appears on the wire: numeric id plus its attributes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry<T> {
    pub id: u32,
    pub attributes: T,
}

impl<T> Entry<T> {
    pub const fn new(id: u32, attributes: T) -> Self {
        Self { id, attributes }
    }
}

/// A to-one relation. `data` is `null` when nothing is linked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Relation<T> {
    pub data: Option<Entry<T>>,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> Relation<T> {
    /// Link a single entry.
    pub const fn to(entry: Entry<T>) -> Self {
        Self { data: Some(entry) }
    }

    /// The linked entry, if any.
    pub const fn get(&self) -> Option<&Entry<T>> {
        self.data.as_ref()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

/// Page-based pagination metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

impl Pagination {
    /// Metadata for a result set that fits on one page.
    #[must_use]
    pub const fn single_page(total: u32, page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            page_count: 1,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionMeta {
    pub pagination: Pagination,
}

/// A paginated list response: `{ "data": [..], "meta": { "pagination": .. } }`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionResponse<T> {
    pub data: Vec<Entry<T>>,
    pub meta: CollectionMeta,
}

impl<T> CollectionResponse<T> {
    /// Wrap entries as a single page, with `total` taken from the entry count.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` entries are supplied.
    #[must_use]
    pub fn single_page(data: Vec<Entry<T>>, page_size: u32) -> Self {
        let total = u32::try_from(data.len()).expect("entry count fits in u32");
        Self {
            data,
            meta: CollectionMeta {
                pagination: Pagination::single_page(total, page_size),
            },
        }
    }

    pub const fn pagination(&self) -> &Pagination {
        &self.meta.pagination
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.data.iter()
    }

    /// Look up an entry by id.
    pub fn find(&self, id: u32) -> Option<&Entry<T>> {
        self.data.iter().find(|entry| entry.id == id)
    }
}

impl<T: Validate> CollectionResponse<T> {
    /// Validate every entry, reject duplicate ids, and check that a
    /// single-page response reports a `total` equal to its entry count.
    ///
    /// # Errors
    ///
    /// Returns the first [`CoreError`] encountered.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.data.len());
        for entry in &self.data {
            if !seen.insert(entry.id) {
                return Err(CoreError::DuplicateId {
                    entity_type: T::ENTITY_TYPE.to_string(),
                    id: entry.id,
                });
            }
            entry.attributes.validate()?;
        }

        let pagination = self.pagination();
        if pagination.page_count == 1 && u32::try_from(self.data.len()).ok() != Some(pagination.total) {
            return Err(CoreError::validation(format!(
                "{} pagination total {} does not match {} entries",
                T::ENTITY_TYPE,
                pagination.total,
                self.data.len()
            )));
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a CollectionResponse<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// `meta` of a single-type response. The API sends an empty object.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SingleMeta {}

/// A single-type response: `{ "data": {..}, "meta": {} }`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SingleResponse<T> {
    pub data: Entry<T>,
    #[serde(default)]
    pub meta: SingleMeta,
}

impl<T> SingleResponse<T> {
    pub const fn new(data: Entry<T>) -> Self {
        Self {
            data,
            meta: SingleMeta {},
        }
    }

    pub const fn attributes(&self) -> &T {
        &self.data.attributes
    }
}

impl<T: Validate> SingleResponse<T> {
    /// # Errors
    ///
    /// Returns the entity's validation error, if any.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.data.attributes.validate()
    }
}

/// `GET /api/menu-items`
pub type MenuItemsResponse = CollectionResponse<MenuItem>;
/// `GET /api/homepage`
pub type HomepageResponse = SingleResponse<Homepage>;
/// `GET /api/testimonials`
pub type TestimonialsResponse = CollectionResponse<Testimonial>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Cuisine;
    use pretty_assertions::assert_eq;

    fn cuisines(ids: &[u32]) -> CollectionResponse<Cuisine> {
        let entries = ids
            .iter()
            .map(|id| Entry::new(*id, Cuisine::new(format!("cuisine-{id}"))))
            .collect();
        CollectionResponse::single_page(entries, 25)
    }

    #[test]
    fn single_page_counts_entries() {
        let collection = cuisines(&[1, 2, 3]);
        assert_eq!(
            *collection.pagination(),
            Pagination {
                page: 1,
                page_size: 25,
                page_count: 1,
                total: 3,
            }
        );
        assert!(collection.validate().is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = cuisines(&[1, 2, 1]).validate().unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { id: 1, .. }));
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let mut collection = cuisines(&[1, 2]);
        collection.meta.pagination.total = 5;
        let err = collection.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn multi_page_total_may_exceed_entries() {
        let mut collection = cuisines(&[1, 2]);
        collection.meta.pagination.total = 40;
        collection.meta.pagination.page_count = 2;
        assert!(collection.validate().is_ok());
    }

    #[test]
    fn find_by_id() {
        let collection = cuisines(&[4, 7]);
        assert_eq!(collection.find(7).map(|e| e.id), Some(7));
        assert!(collection.find(5).is_none());
    }

    #[test]
    fn null_relation_deserializes_empty() {
        let relation: Relation<Cuisine> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(relation.is_empty());
        assert!(relation.get().is_none());
    }

    #[test]
    fn single_response_meta_defaults_when_absent() {
        let json = r#"{"data": {"id": 3, "attributes": {"name": "Thai"}}}"#;
        let response: SingleResponse<Cuisine> = serde_json::from_str(json).unwrap();
        assert_eq!(response.attributes().name, "Thai");
        assert_eq!(serde_json::to_value(response.meta).unwrap(), serde_json::json!({}));
    }
}
