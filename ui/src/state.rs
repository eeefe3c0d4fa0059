use payloads::{PropertyId, responses};
use std::collections::HashMap;
use yewdux::prelude::*;

use crate::hooks::FetchState;

/// Global store caching fetched listings so navigating between the
/// dashboard, detail, and edit pages doesn't refetch.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Properties (canonical store - managed by use_properties + use_property) ===
    pub individual_properties: HashMap<PropertyId, responses::Property>, // Single source of truth
    pub property_list: FetchState<Vec<PropertyId>>, // Dashboard ordering
}

impl State {
    pub fn has_properties_loaded(&self) -> bool {
        self.property_list.is_fetched()
    }

    /// Dashboard listing, in backend order. None until the first load
    /// completes.
    pub fn get_properties(&self) -> Option<Vec<responses::Property>> {
        self.property_list.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.individual_properties.get(id).cloned())
                .collect()
        })
    }

    pub fn get_property(
        &self,
        property_id: PropertyId,
    ) -> Option<&responses::Property> {
        self.individual_properties.get(&property_id)
    }

    /// Replace the dashboard listing with a fresh fetch.
    pub fn set_properties(&mut self, properties: Vec<responses::Property>) {
        let ids = properties.iter().map(|p| p.id).collect();
        for property in properties {
            self.individual_properties.insert(property.id, property);
        }
        self.property_list = FetchState::Fetched(ids);
    }

    /// Upsert a single record without touching the listing order.
    pub fn set_property(&mut self, property: responses::Property) {
        self.individual_properties.insert(property.id, property);
    }

    /// Insert a newly created record and append it to the listing, if the
    /// listing has been loaded.
    pub fn add_property(&mut self, property: responses::Property) {
        let id = property.id;
        self.individual_properties.insert(id, property);
        if let FetchState::Fetched(ids) = &mut self.property_list
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }

    pub fn remove_property(&mut self, property_id: PropertyId) {
        self.individual_properties.remove(&property_id);
        if let FetchState::Fetched(ids) = &mut self.property_list {
            ids.retain(|id| *id != property_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::ListingType;
    use rust_decimal::Decimal;

    fn property(id: i64) -> responses::Property {
        responses::Property {
            id: PropertyId(id),
            title: format!("Listing {id}"),
            description: None,
            price: Decimal::from(100000_i64),
            location: "Porto".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            area: 70.0,
            property_type: "Apartment".to_string(),
            listing_type: ListingType::Sale,
            owner_id: None,
            owner_name: None,
        }
    }

    #[test]
    fn listing_starts_not_fetched() {
        let state = State::default();
        assert!(!state.has_properties_loaded());
        assert_eq!(state.get_properties(), None);
    }

    #[test]
    fn remove_drops_record_and_listing_entry() {
        let mut state = State::default();
        state.set_properties(vec![property(1), property(2)]);

        state.remove_property(PropertyId(1));

        let remaining = state.get_properties().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, PropertyId(2));
        assert_eq!(state.get_property(PropertyId(1)), None);
    }

    #[test]
    fn add_appends_to_loaded_listing_once() {
        let mut state = State::default();
        state.set_properties(vec![property(1)]);

        state.add_property(property(2));
        state.add_property(property(2));

        let ids: Vec<_> =
            state.get_properties().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PropertyId(1), PropertyId(2)]);
    }
}
