//! # bistro-core
//!
//! Typed mirror of the content API responses consumed by the Bistro site.
//!
//! This crate provides the shapes every content-backed page expects,
//! whether the data came from the live CMS or from the local fallback set:
//! - Entity attribute structs (menu items, images, cuisines, hero section, testimonials)
//! - The `{id, attributes}` entry wrapper and `{data}` relation wrapper
//! - Collection and single-entity envelopes with pagination metadata
//! - Structural validation for the invariants renderers rely on
//! - JSON Schema export for the top-level responses

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod schema;

pub use errors::CoreError;
