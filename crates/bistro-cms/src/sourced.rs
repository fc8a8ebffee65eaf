//! Fallback substitution: live content when available, fixtures otherwise.

use std::fmt;

use bistro_core::envelope::{HomepageResponse, MenuItemsResponse, TestimonialsResponse};
use bistro_fallback::{HOMEPAGE, MENU_ITEMS, TESTIMONIALS};
use serde::Serialize;

use crate::content::{HOMEPAGE_PATH, MENU_ITEMS_PATH, TESTIMONIALS_PATH};
use crate::{ContentClient, error::CmsError};

/// Where a piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Live,
    Fallback,
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        })
    }
}

/// Content tagged with its source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub source: ContentSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub const fn live(data: T) -> Self {
        Self {
            source: ContentSource::Live,
            data,
        }
    }

    pub const fn fallback(data: T) -> Self {
        Self {
            source: ContentSource::Fallback,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

fn live_or_fallback<T: Clone>(
    path: &str,
    result: Result<T, CmsError>,
    fallback: &T,
) -> Sourced<T> {
    match result {
        Ok(data) => Sourced::live(data),
        Err(error) => {
            tracing::warn!(path, %error, "CMS fetch failed; serving fallback content");
            Sourced::fallback(fallback.clone())
        }
    }
}

impl ContentClient {
    pub async fn menu_items(&self) -> Sourced<MenuItemsResponse> {
        live_or_fallback(MENU_ITEMS_PATH, self.fetch_menu_items().await, &*MENU_ITEMS)
    }

    pub async fn homepage(&self) -> Sourced<HomepageResponse> {
        live_or_fallback(HOMEPAGE_PATH, self.fetch_homepage().await, &*HOMEPAGE)
    }

    pub async fn testimonials(&self) -> Sourced<TestimonialsResponse> {
        live_or_fallback(TESTIMONIALS_PATH, self.fetch_testimonials().await, &*TESTIMONIALS)
    }
}

/// Menu from `client` if given, otherwise straight from the fallback set.
pub async fn load_menu_items(client: Option<&ContentClient>) -> Sourced<MenuItemsResponse> {
    match client {
        Some(client) => client.menu_items().await,
        None => Sourced::fallback(MENU_ITEMS.clone()),
    }
}

/// Homepage from `client` if given, otherwise straight from the fallback set.
pub async fn load_homepage(client: Option<&ContentClient>) -> Sourced<HomepageResponse> {
    match client {
        Some(client) => client.homepage().await,
        None => Sourced::fallback(HOMEPAGE.clone()),
    }
}

/// Testimonials from `client` if given, otherwise straight from the fallback set.
pub async fn load_testimonials(client: Option<&ContentClient>) -> Sourced<TestimonialsResponse> {
    match client {
        Some(client) => client.testimonials().await,
        None => Sourced::fallback(TESTIMONIALS.clone()),
    }
}
