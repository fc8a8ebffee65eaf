//! Typed fetches for each content type.

use bistro_core::envelope::{HomepageResponse, MenuItemsResponse, TestimonialsResponse};
use serde::de::DeserializeOwned;

use crate::{ContentClient, error::CmsError, http::ensure_success};

pub(crate) const MENU_ITEMS_PATH: &str = "menu-items";
pub(crate) const HOMEPAGE_PATH: &str = "homepage";
pub(crate) const TESTIMONIALS_PATH: &str = "testimonials";

impl ContentClient {
    /// Fetch the menu with images and cuisines populated.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError`] if the request fails, the CMS returns a
    /// non-success status, or the body does not match the menu shape.
    pub async fn fetch_menu_items(&self) -> Result<MenuItemsResponse, CmsError> {
        let response: MenuItemsResponse = self
            .get_json(
                MENU_ITEMS_PATH,
                &[
                    ("populate", "*".to_string()),
                    ("sort", "id:asc".to_string()),
                    ("pagination[pageSize]", self.page_size.to_string()),
                ],
            )
            .await?;
        response.validate()?;
        Ok(response)
    }

    /// Fetch the homepage single type with the hero image populated.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_menu_items`].
    pub async fn fetch_homepage(&self) -> Result<HomepageResponse, CmsError> {
        let response: HomepageResponse = self
            .get_json(
                HOMEPAGE_PATH,
                &[("populate[heroSection][populate]", "*".to_string())],
            )
            .await?;
        response.validate()?;
        Ok(response)
    }

    /// Fetch published testimonials.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_menu_items`].
    pub async fn fetch_testimonials(&self) -> Result<TestimonialsResponse, CmsError> {
        let response: TestimonialsResponse = self
            .get_json(
                TESTIMONIALS_PATH,
                &[
                    ("sort", "id:asc".to_string()),
                    ("pagination[pageSize]", self.page_size.to_string()),
                ],
            )
            .await?;
        response.validate()?;
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CmsError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "fetching content");

        let resp = ensure_success(self.http.get(&url).query(query).send().await?, path).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| CmsError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
