use bistro_core::entities::{Testimonial, Timestamps};
use bistro_core::envelope::{Entry, TestimonialsResponse};
use chrono::{DateTime, Utc};

use crate::PAGE_SIZE;

const REVIEWS: [(u32, &str, &str, u8, bool); 3] = [
    (
        1,
        "Sarah Johnson",
        "Absolutely amazing! The food was incredible and the service was top-notch. Best dining experience I've had in years.",
        5,
        true,
    ),
    (
        2,
        "Michael Chen",
        "The grilled salmon was cooked to perfection. Fresh ingredients and wonderful presentation. Highly recommend!",
        5,
        true,
    ),
    (
        3,
        "Emily Rodriguez",
        "Great atmosphere and delicious food. The staff made us feel welcome and the menu has something for everyone.",
        5,
        false,
    ),
];

/// Fallback testimonials stamped with the current instant.
pub fn testimonials() -> TestimonialsResponse {
    testimonials_at(Utc::now())
}

/// Fallback testimonials with every timestamp set to `now`.
pub fn testimonials_at(now: DateTime<Utc>) -> TestimonialsResponse {
    let entries = REVIEWS
        .iter()
        .map(|&(id, customer_name, content, rating, is_featured)| {
            Entry::new(
                id,
                Testimonial {
                    customer_name: customer_name.to_string(),
                    content: content.to_string(),
                    rating,
                    is_featured,
                    timestamps: Timestamps::at(now),
                },
            )
        })
        .collect();
    TestimonialsResponse::single_page(entries, PAGE_SIZE)
}
