use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Id type wrapper helps ensure we don't mix up ids for different tables.
/// Ids are plain integers assigned by the backend; Display/FromStr let them
/// appear directly in route paths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
pub struct PropertyId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
pub struct PropertyImageId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    FromStr,
)]
pub struct UserId(pub i64);

/// Whether a property is offered for sale or for rent.
///
/// Serialized as `"Sale"` / `"Rent"`, matching what the backend stores and
/// what listing badges display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ListingType {
    #[display("Sale")]
    Sale,
    #[display("Rent")]
    Rent,
}

impl ListingType {
    pub fn is_rent(&self) -> bool {
        matches!(self, Self::Rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_plain_integers() {
        assert_eq!(PropertyId(42).to_string(), "42");
        assert_eq!("42".parse::<PropertyId>().unwrap(), PropertyId(42));
    }

    #[test]
    fn listing_type_wire_format() {
        assert_eq!(serde_json::to_string(&ListingType::Sale).unwrap(), "\"Sale\"");
        assert_eq!(
            serde_json::from_str::<ListingType>("\"Rent\"").unwrap(),
            ListingType::Rent
        );
    }

    #[test]
    fn listing_type_display_matches_badge_text() {
        assert_eq!(ListingType::Sale.to_string(), "Sale");
        assert_eq!(ListingType::Rent.to_string(), "Rent");
        assert!(ListingType::Rent.is_rent());
        assert!(!ListingType::Sale.is_rent());
    }
}
