use std::collections::BTreeMap;

use bistro_core::entities::{HeroSection, Homepage, Image, ImageFormat, ImageFormatName, Timestamps};
use bistro_core::envelope::{Entry, HomepageResponse, Relation};
use chrono::{DateTime, Utc};

use crate::placeholder;

/// Fallback homepage stamped with the current instant.
pub fn homepage() -> HomepageResponse {
    homepage_at(Utc::now())
}

/// Fallback homepage with every timestamp set to `now`.
pub fn homepage_at(now: DateTime<Utc>) -> HomepageResponse {
    let url = placeholder("hero.svg");
    let hero_image = Image {
        url: url.clone(),
        alternative_text: Some("Restaurant Hero Image".into()),
        width: 1920,
        height: 1080,
        formats: BTreeMap::from([
            (ImageFormatName::Large, ImageFormat::new(url.clone(), 1000, 563)),
            (ImageFormatName::Medium, ImageFormat::new(url.clone(), 750, 422)),
            (ImageFormatName::Small, ImageFormat::new(url.clone(), 500, 281)),
            (ImageFormatName::Thumbnail, ImageFormat::new(url, 245, 138)),
        ]),
    };

    let hero_section = HeroSection {
        hero_title: "Delicious Food, Made Fresh Daily".into(),
        hero_subtitle: "Experience the finest culinary creations. We bring authentic flavors and quality ingredients to every dish we serve.".into(),
        hero_image: Relation::to(Entry::new(1, hero_image)),
        primary_cta_text: "View Menu".into(),
        primary_cta_link: "/menu".into(),
        secondary_cta_text: "Order Now".into(),
        secondary_cta_link: "/contact".into(),
    };

    HomepageResponse::new(Entry::new(
        1,
        Homepage {
            hero_section,
            timestamps: Timestamps::at(now),
        },
    ))
}
