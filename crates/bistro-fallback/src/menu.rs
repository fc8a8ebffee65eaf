use std::collections::BTreeMap;

use bistro_core::entities::{Cuisine, Image, ImageFormat, ImageFormatName, MenuItem, Timestamps};
use bistro_core::envelope::{Entry, MenuItemsResponse, Relation};
use chrono::{DateTime, Utc};

use crate::{PAGE_SIZE, placeholder};

struct Dish {
    id: u32,
    name: &'static str,
    description: &'static str,
    price: f64,
    made_to_order: bool,
    artwork: &'static str,
    cuisine: (u32, &'static str),
}

const DISHES: [Dish; 6] = [
    Dish {
        id: 1,
        name: "Grilled Salmon",
        description: "Fresh Atlantic salmon grilled to perfection, served with seasonal vegetables and lemon butter sauce",
        price: 24.99,
        made_to_order: true,
        artwork: "dish-1.svg",
        cuisine: (1, "Seafood"),
    },
    Dish {
        id: 2,
        name: "Classic Burger",
        description: "Juicy beef patty with lettuce, tomato, pickles, and our special sauce on a toasted brioche bun",
        price: 16.99,
        made_to_order: true,
        artwork: "dish-2.svg",
        cuisine: (2, "American"),
    },
    Dish {
        id: 3,
        name: "Margherita Pizza",
        description: "Traditional Italian pizza with fresh mozzarella, tomatoes, and basil on a wood-fired crust",
        price: 18.99,
        made_to_order: true,
        artwork: "dish-3.svg",
        cuisine: (3, "Italian"),
    },
    Dish {
        id: 4,
        name: "Caesar Salad",
        description: "Crisp romaine lettuce with parmesan cheese, croutons, and house-made Caesar dressing",
        price: 12.99,
        made_to_order: false,
        artwork: "dish-4.svg",
        cuisine: (4, "Salads"),
    },
    Dish {
        id: 5,
        name: "Chicken Alfredo Pasta",
        description: "Creamy fettuccine pasta with grilled chicken in our signature Alfredo sauce",
        price: 19.99,
        made_to_order: true,
        artwork: "dish-1.svg",
        cuisine: (3, "Italian"),
    },
    Dish {
        id: 6,
        name: "Steak Frites",
        description: "8oz ribeye steak cooked to your preference with crispy french fries and garlic butter",
        price: 32.99,
        made_to_order: true,
        artwork: "dish-2.svg",
        cuisine: (5, "French"),
    },
];

/// Fallback menu stamped with the current instant.
pub fn menu_items() -> MenuItemsResponse {
    menu_items_at(Utc::now())
}

/// Fallback menu with every timestamp set to `now`.
pub fn menu_items_at(now: DateTime<Utc>) -> MenuItemsResponse {
    let entries = DISHES.iter().map(|dish| dish.to_entry(now)).collect();
    MenuItemsResponse::single_page(entries, PAGE_SIZE)
}

impl Dish {
    fn to_entry(&self, now: DateTime<Utc>) -> Entry<MenuItem> {
        let url = placeholder(self.artwork);
        let image = Image {
            url: url.clone(),
            alternative_text: Some(self.name.to_string()),
            width: 800,
            height: 600,
            formats: BTreeMap::from([(ImageFormatName::Thumbnail, ImageFormat::new(url, 245, 156))]),
        };
        let (cuisine_id, cuisine_name) = self.cuisine;

        Entry::new(
            self.id,
            MenuItem {
                name: self.name.to_string(),
                description: self.description.to_string(),
                price: self.price,
                is_made_to_order: self.made_to_order,
                // Image ids track the dish id, not the shared artwork file.
                image: Relation::to(Entry::new(self.id, image)),
                cuisine: Relation::to(Entry::new(cuisine_id, Cuisine::new(cuisine_name))),
                timestamps: Timestamps::at(now),
            },
        )
    }
}
