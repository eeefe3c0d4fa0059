use crate::{ListingType, PropertyId, PropertyImageId, UserId};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A property listing as returned by the backend.
///
/// Field names are camelCase on the wire to match the backend's DTOs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub location: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    /// Floor area in square meters.
    pub area: f64,
    /// Secondary category badge, e.g. "Apartment", "House", "Villa".
    pub property_type: String,
    pub listing_type: ListingType,
    pub owner_id: Option<UserId>,
    /// Owner display name, included for management views.
    pub owner_name: Option<String>,
}

/// An image attached to a property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: PropertyImageId,
    pub property_id: PropertyId,
    pub image_url: String,
    pub description: Option<String>,
    pub is_primary: bool,
    pub created_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_deserializes_from_backend_json() {
        let json = r#"{
            "id": 42,
            "title": "Sunny Loft",
            "description": "Top floor, lots of light.",
            "price": 250000,
            "location": "Lisbon",
            "bedrooms": 2,
            "bathrooms": 1,
            "area": 85.5,
            "propertyType": "Apartment",
            "listingType": "Sale",
            "ownerId": 7,
            "ownerName": "Alice"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, PropertyId(42));
        assert_eq!(property.listing_type, ListingType::Sale);
        assert_eq!(property.price, Decimal::from(250000_i64));
        assert_eq!(property.area, 85.5);
        assert_eq!(property.owner_id, Some(UserId(7)));
    }

    #[test]
    fn image_deserializes_with_null_fields() {
        let json = r#"{
            "id": 3,
            "propertyId": 42,
            "imageUrl": "https://img.example.com/a.jpg",
            "description": null,
            "isPrimary": true,
            "createdAt": null
        }"#;

        let image: PropertyImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.property_id, PropertyId(42));
        assert!(image.is_primary);
        assert_eq!(image.description, None);
    }
}
