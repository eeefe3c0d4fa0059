pub mod use_fetch;
pub mod use_properties;
pub mod use_property;
pub mod use_property_images;
pub mod use_push_route;

pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_cache};
pub use use_properties::use_properties;
pub use use_property::use_property;
pub use use_property_images::use_property_images;
pub use use_push_route::use_push_route;

/// Distinguishes "not fetched yet" from "fetched but empty" for cached
/// collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
