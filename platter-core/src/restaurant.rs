//! Restaurant record as served by the gateway

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application-level restaurant identifier, distinct from the store's `_id`
pub type RestaurantId = i64;

/// A restaurant as exposed over the API.
///
/// Only the fields listed here survive decoding, so storage-only fields such
/// as `_id` or driver version keys never reach a response. Hand-edited
/// documents are tolerated: `id` may be stored as a whole-valued double, and
/// any other missing field decodes to its empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique application id, the lookup key for `/api/restaurants/{id}`
    #[serde(deserialize_with = "integral_id")]
    pub id: RestaurantId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Cuisine label (e.g., "Italian")
    #[serde(default)]
    pub cuisine: String,

    /// Average rating
    #[serde(default)]
    pub rating: f64,

    /// Delivery window as shown to customers (e.g., "25-35 min")
    #[serde(default)]
    pub delivery_time: String,

    /// Minimum order amount
    #[serde(default)]
    pub min_order: MinOrder,

    /// Glyph used as the restaurant's image
    #[serde(default)]
    pub image: String,
}

fn integral_id<'de, D>(deserializer: D) -> Result<RestaurantId, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegralId;

    impl<'de> Visitor<'de> for IntegralId {
        type Value = RestaurantId;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer restaurant id")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<RestaurantId, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<RestaurantId, E> {
            RestaurantId::try_from(value)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<RestaurantId, E> {
            // Bounds exclude i64::MAX, which is not exactly representable as f64.
            let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
            if value.fract() == 0.0 && in_range {
                Ok(value as RestaurantId)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(IntegralId)
}

/// Minimum order amount.
///
/// Whole amounts stay integers on the wire; fractional amounts stay decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinOrder {
    /// Whole currency units
    Integer(i64),
    /// Fractional amount
    Decimal(f64),
}

impl Default for MinOrder {
    fn default() -> Self {
        MinOrder::Integer(0)
    }
}

impl MinOrder {
    /// Amount as a float, for display and comparisons
    pub fn as_f64(&self) -> f64 {
        match self {
            MinOrder::Integer(value) => *value as f64,
            MinOrder::Decimal(value) => *value,
        }
    }
}

impl From<i64> for MinOrder {
    fn from(value: i64) -> Self {
        MinOrder::Integer(value)
    }
}

impl From<f64> for MinOrder {
    fn from(value: f64) -> Self {
        MinOrder::Decimal(value)
    }
}

impl fmt::Display for MinOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinOrder::Integer(value) => write!(f, "{}", value),
            MinOrder::Decimal(value) => write!(f, "{:.2}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_storage_identifier_is_dropped() {
        let stored = json!({
            "_id": {"$oid": "65a1f0c2e4b0a1b2c3d4e5f6"},
            "__v": 0,
            "id": 3,
            "name": "Sushi World",
            "cuisine": "Japanese",
            "rating": 4.8,
            "delivery_time": "35-45 min",
            "min_order": 20,
            "image": "🍣"
        });

        let restaurant: Restaurant = serde_json::from_value(stored).unwrap();
        assert_eq!(restaurant.id, 3);

        let served = serde_json::to_value(&restaurant).unwrap();
        let object = served.as_object().unwrap();
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("__v"));
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn test_min_order_keeps_integer_shape() {
        let whole: MinOrder = serde_json::from_str("15").unwrap();
        assert_eq!(whole, MinOrder::Integer(15));
        assert_eq!(serde_json::to_string(&whole).unwrap(), "15");

        let fractional: MinOrder = serde_json::from_str("12.5").unwrap();
        assert_eq!(fractional, MinOrder::Decimal(12.5));
        assert_eq!(serde_json::to_string(&fractional).unwrap(), "12.5");
    }

    #[test]
    fn test_min_order_display() {
        assert_eq!(MinOrder::Integer(8).to_string(), "8");
        assert_eq!(MinOrder::Decimal(7.5).to_string(), "7.50");
        assert_eq!(MinOrder::from(5).as_f64(), 5.0);
    }

    #[test]
    fn test_integer_rating_is_accepted() {
        let restaurant: Restaurant = serde_json::from_value(json!({
            "id": 1,
            "name": "Pizza Palace",
            "cuisine": "Italian",
            "rating": 5,
            "delivery_time": "25-35 min",
            "min_order": 15,
            "image": "🍕"
        }))
        .unwrap();
        assert_eq!(restaurant.rating, 5.0);
    }

    #[test]
    fn test_bson_document_decodes() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": 4_i32,
            "name": "Taco Fiesta",
            "cuisine": "Mexican",
            "rating": 4.3,
            "delivery_time": "20-30 min",
            "min_order": 10_i32,
            "image": "🌮",
        };

        let restaurant: Restaurant = from_document(stored).unwrap();
        assert_eq!(restaurant.id, 4);
        assert_eq!(restaurant.min_order, MinOrder::Integer(10));
        assert_eq!(restaurant.image, "🌮");
    }

    #[test]
    fn test_whole_double_id_is_accepted() {
        let stored = doc! {
            "id": 13.0,
            "name": "Noodle Bar",
            "cuisine": "Asian",
            "rating": 4.0,
            "delivery_time": "30-40 min",
            "min_order": 15.0,
            "image": "🍜",
        };

        let restaurant: Restaurant = from_document(stored).unwrap();
        assert_eq!(restaurant.id, 13);
        assert_eq!(restaurant.min_order, MinOrder::Decimal(15.0));
    }

    #[test]
    fn test_fractional_id_is_rejected() {
        let result = from_document::<Restaurant>(doc! { "id": 13.5, "name": "Noodle Bar" });
        assert!(result.is_err());

        let result = serde_json::from_value::<Restaurant>(json!({"id": "13"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let restaurant: Restaurant = from_document(doc! {
            "id": 14_i64,
            "name": "Pop-up Kitchen",
        })
        .unwrap();

        assert_eq!(restaurant.id, 14);
        assert_eq!(restaurant.name, "Pop-up Kitchen");
        assert_eq!(restaurant.image, "");
        assert_eq!(restaurant.rating, 0.0);
        assert_eq!(restaurant.min_order, MinOrder::Integer(0));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = from_document::<Restaurant>(doc! { "name": "Nameless" });
        assert!(result.is_err());
    }
}
