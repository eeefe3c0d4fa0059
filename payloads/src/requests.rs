use crate::{ListingType, PropertyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 255;
pub const LOCATION_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Validation result for short free-text fields (title, location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldValidation {
    Valid,
    Empty,
    TooLong,
}

impl TextFieldValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate a listing title.
///
/// Rules:
/// - Non-empty after trimming
/// - At most 255 characters
pub fn validate_title(title: &str) -> TextFieldValidation {
    validate_short_text(title, TITLE_MAX_LEN)
}

/// Validate a listing location. Same rules as titles.
pub fn validate_location(location: &str) -> TextFieldValidation {
    validate_short_text(location, LOCATION_MAX_LEN)
}

fn validate_short_text(text: &str, max_len: usize) -> TextFieldValidation {
    if text.trim().is_empty() {
        return TextFieldValidation::Empty;
    }
    if text.chars().count() > max_len {
        return TextFieldValidation::TooLong;
    }
    TextFieldValidation::Valid
}

/// Create/update payload for a property listing. The backend assigns the id
/// and owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub location: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub property_type: String,
    pub listing_type: ListingType,
}

impl SaveProperty {
    /// Field errors preventing submission, in display order. Empty means the
    /// payload is acceptable.
    pub fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        match validate_title(&self.title) {
            TextFieldValidation::Valid => {}
            TextFieldValidation::Empty => errors.push("Title is required"),
            TextFieldValidation::TooLong => {
                errors.push("Title must be at most 255 characters")
            }
        }
        match validate_location(&self.location) {
            TextFieldValidation::Valid => {}
            TextFieldValidation::Empty => errors.push("Location is required"),
            TextFieldValidation::TooLong => {
                errors.push("Location must be at most 255 characters")
            }
        }
        if let Some(description) = &self.description
            && description.chars().count() > DESCRIPTION_MAX_LEN
        {
            errors.push("Description must be at most 1000 characters");
        }
        if self.price <= Decimal::ZERO {
            errors.push("Price must be greater than zero");
        }
        if self.bedrooms < 0 || self.bathrooms < 0 {
            errors.push("Bedroom and bathroom counts cannot be negative");
        }
        if self.area <= 0.0 {
            errors.push("Area must be greater than zero");
        }
        if self.property_type.trim().is_empty() {
            errors.push("Property type is required");
        }
        errors
    }
}

/// Create payload for a property image. Images are hosted externally and
/// referenced by URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePropertyImage {
    pub property_id: PropertyId,
    pub image_url: String,
    pub description: Option<String>,
    pub is_primary: bool,
}

/// Filters for the property search endpoint. Unset fields are omitted from
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
}

impl PropertySearch {
    /// Render as a URL query string, e.g. `location=Lisbon&minPrice=100000`.
    /// Returns an empty string when no filter is set.
    pub fn to_query(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_save() -> SaveProperty {
        SaveProperty {
            title: "Sunny Loft".to_string(),
            description: None,
            price: Decimal::from(250000_i64),
            location: "Lisbon".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            area: 85.5,
            property_type: "Apartment".to_string(),
            listing_type: ListingType::Sale,
        }
    }

    #[test]
    fn valid_payload_has_no_errors() {
        assert!(sample_save().validation_errors().is_empty());
    }

    #[test]
    fn blank_title_and_nonpositive_price_are_rejected() {
        let mut save = sample_save();
        save.title = "   ".to_string();
        save.price = Decimal::ZERO;
        let errors = save.validation_errors();
        assert!(errors.contains(&"Title is required"));
        assert!(errors.contains(&"Price must be greater than zero"));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut save = sample_save();
        save.title = "x".repeat(TITLE_MAX_LEN + 1);
        assert_eq!(
            save.validation_errors(),
            vec!["Title must be at most 255 characters"]
        );
    }

    #[test]
    fn search_query_uses_camel_case_and_skips_unset_filters() {
        let search = PropertySearch {
            location: Some("Lisbon".to_string()),
            min_price: Some(Decimal::from(100000_i64)),
            listing_type: Some(ListingType::Rent),
            ..Default::default()
        };
        assert_eq!(
            search.to_query(),
            "location=Lisbon&minPrice=100000&listingType=Rent"
        );
    }

    #[test]
    fn empty_search_renders_empty_query() {
        assert_eq!(PropertySearch::default().to_query(), "");
    }
}
