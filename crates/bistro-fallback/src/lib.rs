//! # bistro-fallback
//!
//! Ready-made content for every CMS-backed page, used when the live fetch
//! fails or is skipped. Each dataset is wrapped in the same envelope the
//! API returns, so renderers cannot tell the two sources apart.
//!
//! - [`menu_items`] / [`MENU_ITEMS`]: six dishes in a single-page collection
//! - [`homepage`] / [`HOMEPAGE`]: the hero section single type
//! - [`testimonials`] / [`TESTIMONIALS`]: three reviews, two featured
//! - [`featured_testimonials`]: the reviews flagged for prominent display
//!
//! Builders stamp entries with the current instant; the `*_at` variants take
//! the instant explicitly. The statics are built once on first access and
//! never change afterwards.

mod homepage;
mod menu;
mod testimonials;

use std::sync::LazyLock;

use bistro_core::entities::Testimonial;
use bistro_core::envelope::{Entry, HomepageResponse, MenuItemsResponse, TestimonialsResponse};

pub use homepage::{homepage, homepage_at};
pub use menu::{menu_items, menu_items_at};
pub use testimonials::{testimonials, testimonials_at};

/// Site path under which placeholder artwork is served.
pub const PLACEHOLDER_PREFIX: &str = "/placeholders/";

/// Page size reported in fallback pagination metadata.
pub const PAGE_SIZE: u32 = 25;

pub static MENU_ITEMS: LazyLock<MenuItemsResponse> = LazyLock::new(menu_items);
pub static HOMEPAGE: LazyLock<HomepageResponse> = LazyLock::new(homepage);
pub static TESTIMONIALS: LazyLock<TestimonialsResponse> = LazyLock::new(testimonials);

/// Testimonials flagged `isFeatured`, in their original order.
pub fn featured_testimonials(collection: &TestimonialsResponse) -> Vec<&Entry<Testimonial>> {
    collection
        .iter()
        .filter(|entry| entry.attributes.is_featured)
        .collect()
}

fn placeholder(file: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{file}")
}
