use payloads::{PropertyId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to fetch a single property, cache-first: records already loaded by
/// the dashboard are reused without a roundtrip.
#[hook]
pub fn use_property(
    property_id: PropertyId,
) -> FetchHookReturn<responses::Property> {
    let (state, dispatch) = use_store::<State>();

    use_fetch_with_cache(
        property_id,
        {
            let state = state.clone();
            move || state.get_property(property_id).cloned()
        },
        move || state.get_property(property_id).is_none(),
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let property = api_client
                    .get_property(&property_id)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_property(property.clone()));
                Ok(property)
            }
        },
    )
}
