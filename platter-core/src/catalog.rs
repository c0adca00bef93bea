//! Built-in restaurant catalog used to seed an empty store

use crate::restaurant::{MinOrder, Restaurant, RestaurantId};

const CATALOG: &[(RestaurantId, &str, &str, f64, &str, i64, &str)] = &[
    (1, "Pizza Palace", "Italian", 4.5, "25-35 min", 15, "🍕"),
    (2, "Burger House", "American", 4.2, "30-40 min", 12, "🍔"),
    (3, "Sushi World", "Japanese", 4.8, "35-45 min", 20, "🍣"),
    (4, "Taco Fiesta", "Mexican", 4.6, "20-30 min", 10, "🌮"),
    (5, "Dragon Wok", "Chinese", 4.4, "30-40 min", 15, "🥡"),
    (6, "Curry Express", "Indian", 4.7, "35-45 min", 18, "🍛"),
    (7, "Mediterranean Delight", "Mediterranean", 4.5, "30-40 min", 16, "🥙"),
    (8, "BBQ Nation", "BBQ", 4.3, "40-50 min", 20, "🍖"),
    (9, "Pasta Paradise", "Italian", 4.6, "25-35 min", 14, "🍝"),
    (10, "Healthy Bowls", "Healthy", 4.8, "20-30 min", 12, "🥗"),
    (11, "Dessert Heaven", "Desserts", 4.9, "15-25 min", 8, "🍰"),
    (12, "Coffee & Snacks", "Cafe", 4.4, "15-20 min", 5, "☕"),
];

/// The reference restaurants written by `platter seed`.
///
/// The gateway never serves these directly; requests always go to the store.
pub fn default_restaurants() -> Vec<Restaurant> {
    CATALOG
        .iter()
        .map(
            |&(id, name, cuisine, rating, delivery_time, min_order, image)| Restaurant {
                id,
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                rating,
                delivery_time: delivery_time.to_string(),
                min_order: MinOrder::Integer(min_order),
                image: image.to_string(),
            },
        )
        .collect()
}
