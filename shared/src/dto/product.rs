//! # Product Data Transfer Objects
//!
//! Request and response structures for the product catalogue endpoints
//! (`/products/` and `/products/{id}/`).
//!
//! The backend stores prices and ratings as decimals and serializes them as
//! strings (`"1299.00"`); older fixtures send plain numbers. Both shapes are
//! accepted through [`crate::utils::decimal`].

use serde::{Deserialize, Serialize};

use crate::utils::decimal;

/// A titled paragraph shown under the main product description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubDescription {
    pub title: String,
    pub body: String,
}

/// A customer review attached to a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "userName", default)]
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub date: String,
    pub comment: String,
}

/// Product fields sent on create and returned on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_descriptions: Vec<SubDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thumbnails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    #[serde(
        default,
        deserialize_with = "decimal::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
}

/// Product as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(flatten)]
    pub data: ProductData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Partial product update for `PUT /products/{id}/`.
///
/// Unset fields are left out of the request body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_descriptions: Option<Vec<SubDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
}

impl ProductPatch {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_response_with_string_decimals() {
        let json = r#"{
            "id": 3,
            "name": "Brass Ganesha",
            "category": "Idols",
            "price": "1299.50",
            "image": "https://cdn.example.com/ganesha.jpg",
            "alt": "Brass idol",
            "main_description": null,
            "sub_descriptions": [{ "title": "Care", "body": "Wipe with a dry cloth" }],
            "inStock": false,
            "thumbnails": ["https://cdn.example.com/t1.jpg"],
            "reviews": [{ "id": 1, "userName": "Ravi", "rating": 5, "date": "2024-05-01", "comment": "Lovely" }],
            "rating": "4.50",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z"
        }"#;

        let product: ProductResponse = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.data.price, 1299.5);
        assert_eq!(product.data.rating, Some(4.5));
        assert_eq!(product.data.in_stock, Some(false));
        assert_eq!(product.data.main_description, None);
        assert_eq!(product.data.sub_descriptions[0].title, "Care");
        assert_eq!(product.data.reviews[0].user_name, "Ravi");
        assert_eq!(product.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn test_product_data_minimal_serialization() {
        let data = ProductData {
            name: "Frame".to_string(),
            category: "Photo Frames".to_string(),
            price: 25.0,
            image: "https://cdn.example.com/frame.jpg".to_string(),
            alt: String::new(),
            description: None,
            main_description: None,
            sub_descriptions: Vec::new(),
            dimensions: None,
            material: None,
            weight: None,
            in_stock: Some(true),
            thumbnails: Vec::new(),
            reviews: Vec::new(),
            rating: None,
        };

        let value = serde_json::to_value(&data).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["inStock"], true);
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("thumbnails"));
        assert!(!object.contains_key("rating"));
    }

    #[test]
    fn test_product_patch_only_sends_set_fields() {
        let patch = ProductPatch {
            price: Some(30.0),
            in_stock: Some(false),
            ..ProductPatch::default()
        };

        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["price"], 30.0);
        assert_eq!(object["inStock"], false);
        assert!(!patch.is_empty());
        assert!(ProductPatch::default().is_empty());
    }
}
